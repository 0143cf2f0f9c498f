//! Lend pool options and their configuration rows.

use std::fmt;
use std::str::FromStr;

use crate::asset::Asset;
use crate::error::PoolError;

/// Seconds in a 365-day year, used to annualise pool rates.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Pool capacity in whole units of the pool asset.
const MAX_DEPOSIT_UNITS: u128 = 100_000_000;

/// Lend pools, one per market-maker borrower.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PoolOption {
    /// Wintermute pool
    Wintermute,
    /// Folkvang pool
    Folkvang,
}

/// Gas limits for pool transactions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GasLimits {
    /// Deposit transaction gas limit
    pub deposit: u64,
    /// Withdraw transaction gas limit
    pub withdraw: u64,
}

/// Display details for a pool's borrower.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolDetails {
    /// Borrower display name
    pub name: &'static str,
    /// Borrower twitter URL
    pub twitter: &'static str,
    /// Borrower website URL
    pub website: &'static str,
}

/// Protocol fee schedule, in whole percent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolFees {
    /// Annual management fee
    pub management_fee: u32,
    /// Fee on interest earned
    pub performance_fee: u32,
}

/// Fees charged by every lend pool.
pub const POOL_FEES: PoolFees = PoolFees {
    management_fee: 2,
    performance_fee: 10,
};

struct PoolConfig {
    option: PoolOption,
    id: &'static str,
    details: PoolDetails,
    deposit_disabled: bool,
    gas: GasLimits,
    deposit_assets: &'static [Asset],
}

const LEND_GAS: GasLimits = GasLimits {
    deposit: 80_000,
    withdraw: 100_000,
};

static POOLS: [PoolConfig; 2] = [
    PoolConfig {
        option: PoolOption::Wintermute,
        id: "wintermute",
        details: PoolDetails {
            name: "Wintermute",
            twitter: "https://twitter.com/wintermute_t",
            website: "https://www.wintermute.com",
        },
        deposit_disabled: false,
        gas: LEND_GAS,
        deposit_assets: &[Asset::USDC],
    },
    PoolConfig {
        option: PoolOption::Folkvang,
        id: "folkvang",
        details: PoolDetails {
            name: "Folkvang",
            twitter: "https://twitter.com/folkvangtrading",
            website: "https://folkvang.io",
        },
        deposit_disabled: true,
        gas: LEND_GAS,
        deposit_assets: &[Asset::USDC],
    },
];

impl PoolOption {
    /// Every pool in the registry.
    pub const ALL: [PoolOption; 2] = [PoolOption::Wintermute, PoolOption::Folkvang];

    fn config(&self) -> &'static PoolConfig {
        match self {
            PoolOption::Wintermute => &POOLS[0],
            PoolOption::Folkvang => &POOLS[1],
        }
    }

    /// Pool id as used in URLs and deployment files.
    #[inline]
    pub fn id(&self) -> &'static str {
        self.config().id
    }
}

impl FromStr for PoolOption {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POOLS
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(s.trim()))
            .map(|p| p.option)
            .ok_or_else(|| PoolError::UnknownPool(s.to_string()))
    }
}

impl fmt::Display for PoolOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Returns whether new deposits into `pool` are switched off.
#[inline]
pub fn is_deposit_disabled_pool(pool: PoolOption) -> bool {
    pool.config().deposit_disabled
}

/// Gas limits for lend transactions on `pool`.
#[inline]
pub fn gas_limits(pool: PoolOption) -> GasLimits {
    pool.config().gas
}

/// Assets accepted as deposits into `pool`.
#[inline]
pub fn allowed_deposit_assets(pool: PoolOption) -> &'static [Asset] {
    pool.config().deposit_assets
}

/// Asset a pool is denominated in.
#[inline]
pub fn pool_asset(_pool: PoolOption) -> Asset {
    Asset::USDC
}

/// Asset shown in the UI for a pool.
#[inline]
pub fn display_asset(pool: PoolOption) -> Asset {
    pool_asset(pool)
}

/// Pool capacity in the pool asset's smallest unit.
///
/// # Examples
/// ```
/// use pool_registry::{max_deposit, PoolOption};
///
/// // 100M USDC with 6 decimals
/// assert_eq!(max_deposit(PoolOption::Wintermute), 100_000_000_000_000);
/// ```
pub fn max_deposit(pool: PoolOption) -> u128 {
    MAX_DEPOSIT_UNITS * 10u128.pow(pool_asset(pool).decimals())
}

/// Borrower details for `pool`.
#[inline]
pub fn pool_details(pool: PoolOption) -> PoolDetails {
    pool.config().details
}
