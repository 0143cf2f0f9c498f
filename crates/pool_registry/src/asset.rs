//! Deposit assets with decimal precision and price-feed metadata.
//!
//! # Examples
//!
//! ```
//! use pool_registry::Asset;
//!
//! assert_eq!(Asset::USDC.decimals(), 6);
//! assert_eq!(Asset::WETH.coingecko_id(), "ethereum");
//!
//! let rbn: Asset = "rbn".parse().unwrap();
//! assert_eq!(rbn, Asset::RBN);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::PoolError;

/// Tokens that wrap the chain's native currency.
pub const NATIVE_TOKENS: [&str; 1] = ["WETH"];

/// Returns whether `symbol` wraps the native currency.
#[inline]
pub fn is_native_token(symbol: &str) -> bool {
    NATIVE_TOKENS.contains(&symbol)
}

/// ERC-20 assets known to the lend app.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Asset {
    /// Wrapped ether (18 decimals)
    WETH,
    /// USD Coin (6 decimals)
    USDC,
    /// Ribbon governance token (18 decimals)
    RBN,
}

impl Asset {
    /// Token symbol.
    #[inline]
    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::WETH => "WETH",
            Asset::USDC => "USDC",
            Asset::RBN => "RBN",
        }
    }

    /// On-chain decimal places.
    #[inline]
    pub fn decimals(&self) -> u32 {
        match self {
            Asset::WETH | Asset::RBN => 18,
            Asset::USDC => 6,
        }
    }

    /// CoinGecko price-feed id.
    #[inline]
    pub fn coingecko_id(&self) -> &'static str {
        match self {
            Asset::WETH => "ethereum",
            Asset::USDC => "usd-coin",
            Asset::RBN => "ribbon-finance",
        }
    }
}

impl FromStr for Asset {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WETH" => Ok(Asset::WETH),
            "USDC" => Ok(Asset::USDC),
            "RBN" => Ok(Asset::RBN),
            _ => Err(PoolError::UnknownAsset(s.to_string())),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
