//! Everything related to items and the slots that hold them.

use std::fmt::Display;

use derive_more::{Add, AddAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod inventory;

/// The category of an item.
///
/// [`ItemKind::None`] is the sentinel for an empty slot: an item of this kind
/// never contributes to an inventory's totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemKind {
    /// Marks an empty slot.
    #[default]
    None,
    /// A one-handed blade.
    Sword,
    /// An off-hand block.
    Shield,
    /// Head protection.
    Helmet,
    /// Body protection.
    Armor,
    /// Foot protection.
    Boots,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ItemKind::None => "none",
            ItemKind::Sword => "sword",
            ItemKind::Shield => "shield",
            ItemKind::Helmet => "helmet",
            ItemKind::Armor => "armor",
            ItemKind::Boots => "boots",
        };

        write!(f, "{name}")
    }
}

/// A quantity of mass, used to total up an inventory.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Default,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
pub struct Weight(pub f32);

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A single item, as stored in one inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    /// What category of item this is.
    kind: ItemKind,

    /// How much the item weighs.
    ///
    /// Never negative.
    weight: Weight,
}

impl Item {
    /// Create an item of the given kind and weight.
    pub fn new(kind: ItemKind, weight: Weight) -> Self {
        debug_assert!(weight.0 >= 0.);

        Self { kind, weight }
    }

    /// The item that marks an empty slot.
    pub fn none() -> Self {
        Self::default()
    }

    /// The category of this item.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The weight of this item.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Determine if this item is the empty-slot sentinel.
    pub fn is_none(&self) -> bool {
        self.kind == ItemKind::None
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "_")
        } else {
            write!(f, "{} ({})", self.kind, self.weight)
        }
    }
}
