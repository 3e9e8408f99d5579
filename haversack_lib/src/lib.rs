//! Grid-based item storage for an interactive application.
//!
//! The [`items::inventory::Inventory`] container owns a two-dimensional grid
//! of item slots plus one equipped slot, and keeps its total weight and item
//! count in step with every mutation.

#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]

pub mod items;
