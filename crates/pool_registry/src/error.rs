//! Error types for pool and asset lookups.

use thiserror::Error;

/// Pool registry lookup errors.
///
/// # Examples
/// ```
/// use pool_registry::PoolError;
///
/// let err = PoolError::UnknownPool("alameda".to_string());
/// assert_eq!(format!("{}", err), "Unknown pool: alameda");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PoolError {
    /// Pool id not present in the registry
    #[error("Unknown pool: {0}")]
    UnknownPool(String),

    /// Asset symbol not present in the registry
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),
}
