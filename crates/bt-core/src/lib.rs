/// Configuration, types, and shared structures for bitrame.
///
/// This crate contains the grids, errors, and configuration logic
/// used across the bitrame workspace.

pub mod config;
pub mod error;
pub mod grid;

pub use config::ConvertConfig;
pub use error::CoreError;
pub use grid::{BitGrid, SampleGrid};
