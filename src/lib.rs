//! Reply Brawl - turn-based reply battle engine

pub mod battle;
pub mod catalog;
pub mod core;
pub mod narrative;
