//! Error types for structured error handling.
//!
//! The sample generators never fail; these errors only come from the
//! validating constructors and strict tag parsing that callers can opt into.

use thiserror::Error;

/// Categorised sampler parameter errors.
///
/// # Variants
/// - `InvalidBarrier`: Barriers not strictly ordered (`lower < upper`)
/// - `NonFiniteInput`: A parameter is NaN or infinite
/// - `UnknownVariant`: Product tag not in the variant table (strict parsing only)
///
/// # Examples
/// ```
/// use payoff_core::types::SamplerError;
///
/// let err = SamplerError::UnknownVariant("rEARN-xyz".to_string());
/// assert_eq!(format!("{}", err), "Unknown product variant: rEARN-xyz");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SamplerError {
    /// Lower barrier is not strictly below the upper barrier.
    #[error("Invalid barriers: lower {lower} must be below upper {upper}")]
    InvalidBarrier {
        /// Lower barrier percentage
        lower: f64,
        /// Upper barrier percentage
        upper: f64,
    },

    /// A parameter is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Product tag not found in the variant table.
    #[error("Unknown product variant: {0}")]
    UnknownVariant(String),
}
