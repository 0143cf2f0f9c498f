//! # pool_registry: Lend Pool Tables
//!
//! Static configuration for the lend pools shown in the web app.
//! All pools are defined as data so a new market maker is one table row.
//!
//! - Pool options and per-pool lookups (`pool`)
//! - Deposit assets with decimals and price-feed ids (`asset`)
//! - Error types: `PoolError` (`error`)
//!
//! ```rust
//! use pool_registry::{gas_limits, is_deposit_disabled_pool, PoolOption};
//!
//! let pool: PoolOption = "wintermute".parse().unwrap();
//! assert_eq!(gas_limits(pool).deposit, 80_000);
//! assert!(!is_deposit_disabled_pool(pool));
//! assert!(is_deposit_disabled_pool(PoolOption::Folkvang));
//! ```

#![warn(missing_docs)]

pub mod asset;
pub mod error;
pub mod pool;

pub use asset::{is_native_token, Asset, NATIVE_TOKENS};
pub use error::PoolError;
pub use pool::{
    allowed_deposit_assets, display_asset, gas_limits, is_deposit_disabled_pool, max_deposit,
    pool_asset, pool_details, GasLimits, PoolDetails, PoolFees, PoolOption, POOL_FEES,
    SECONDS_PER_YEAR,
};
