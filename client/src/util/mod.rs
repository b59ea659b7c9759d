//! Browser and formatting helpers shared by components.

pub mod maps;
pub mod print;
