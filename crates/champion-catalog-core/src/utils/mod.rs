//! Utility functions for champion name handling.

pub mod names;

pub use names::normalize_champion_name;
