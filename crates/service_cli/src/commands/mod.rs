//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod curve;
pub mod moneyness;
pub mod pools;
