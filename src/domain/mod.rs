//! Domain types for Pantry
//! Defines the ingredient records and the request failures shared across the crate.

pub mod error;
pub mod ingredient;

pub use error::*;
pub use ingredient::*;
