//! Product variant, parameter, and error types.
//!
//! This module provides:
//! - `variant`: The closed set of earn product variants and their static sampling profiles
//! - `params`: Barrier and yield parameter structs
//! - `error`: Structured error types for parameter validation and strict tag parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ProductVariant`], [`VariantProfile`], [`InteriorShape`] from `variant`
//! - [`BarrierConfig`], [`YieldConfig`] from `params`
//! - [`SamplerError`] from `error`

pub mod error;
pub mod params;
pub mod variant;

pub use error::SamplerError;
pub use params::{BarrierConfig, YieldConfig};
pub use variant::{InteriorShape, ProductVariant, VariantProfile};
