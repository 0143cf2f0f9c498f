//! # payoff_core: Payoff Curve Sampling for Barrier Earn Products
//!
//! ## Role
//!
//! payoff_core turns an earn product's barrier and yield parameters into
//! the two aligned sequences a payoff chart is drawn from:
//! - Product variants and their static sampling profiles (`types::variant`)
//! - Barrier and yield parameters (`types::params`)
//! - Performance classification and moneyness (`moneyness`)
//! - Staked-asset yield models (`staked`)
//! - Moneyness (x) and yield (y) sample generators (`sampling`)
//! - Error types: `SamplerError` (`types::error`)
//!
//! Every function here is pure: inputs are taken by value or shared
//! reference and each call allocates fresh output vectors.
//!
//! ## Usage Examples
//!
//! ```rust
//! use payoff_core::sampling::{generate_moneyness_samples, generate_yield_samples};
//! use payoff_core::types::ProductVariant;
//!
//! let xs = generate_moneyness_samples(ProductVariant::Earn, -0.1, 0.1);
//! let ys = generate_yield_samples(ProductVariant::Earn, -0.1, 0.1, 0.12, 0.04, 1.0);
//!
//! // Positional correspondence: zip index by index into plot points
//! assert_eq!(xs.len(), ys.len());
//!
//! // Unknown product tags render as an empty chart
//! let unknown = ProductVariant::from("rEARN-unknown");
//! assert!(generate_moneyness_samples(unknown, -0.1, 0.1).is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for variants, parameters and curves

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod moneyness;
pub mod sampling;
pub mod staked;
pub mod types;

pub use moneyness::{
    classify_performance, compute_moneyness, effective_performance, option_moneyness, PerformanceState,
};
pub use sampling::{sample_payoff_curve, PayoffCurve, SamplePoint};
pub use staked::{ParticipationYieldModel, StakedYieldModel};
pub use types::{BarrierConfig, ProductVariant, SamplerError, YieldConfig};
