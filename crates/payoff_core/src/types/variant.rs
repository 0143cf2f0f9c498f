//! Earn product variants and their static sampling profiles.
//!
//! Each variant maps to one row of [`VARIANT_PROFILES`], which fixes the
//! flat padding counts drawn outside the barriers and the shape of the
//! curve between them.
//!
//! # Examples
//!
//! ```
//! use payoff_core::types::{InteriorShape, ProductVariant};
//!
//! let variant = ProductVariant::from("rEARN-stETH");
//! assert_eq!(variant, ProductVariant::EarnStEth);
//! assert_eq!(variant.profile().left_points, 2000);
//! assert_eq!(variant.profile().interior, Some(InteriorShape::StakedAsset));
//!
//! // Unknown tags fall back instead of failing
//! let other = ProductVariant::from("theta-vault");
//! assert_eq!(other.profile().left_points, 0);
//! assert!(other.profile().interior.is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::SamplerError;

/// Closed set of earn product payoff shapes.
///
/// Designed for static dispatch: sampling code matches on the profile's
/// [`InteriorShape`] instead of the variant itself.
///
/// # Variants
/// - `Earn`: Vanilla barrier product (`rEARN`)
/// - `EarnStEth`: Staked-ETH barrier product (`rEARN-stETH`)
/// - `Unrecognized`: Any other product tag; samples to an empty chart
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductVariant {
    /// Vanilla barrier product: yield scales linearly towards the upper barrier.
    Earn,
    /// Staked-asset barrier product: yield follows a participation model.
    EarnStEth,
    /// Product tag with no sampling profile.
    Unrecognized,
}

/// Shape of the yield curve between the barriers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteriorShape {
    /// `base + |moneyness / upper| * (max - base)`
    Linear,
    /// Staked-asset yield model evaluated over an interpolated performance grid
    StakedAsset,
}

impl InteriorShape {
    /// Short lowercase name for display.
    pub fn name(&self) -> &'static str {
        match self {
            InteriorShape::Linear => "linear",
            InteriorShape::StakedAsset => "staked-asset",
        }
    }
}

impl fmt::Display for InteriorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static sampling configuration for one product variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VariantProfile {
    /// Variant this row configures
    pub variant: ProductVariant,
    /// Product tag as used by the web app
    pub tag: &'static str,
    /// Flat base-yield samples drawn left of the lower barrier
    pub left_points: usize,
    /// Flat base-yield samples drawn right of the upper barrier
    pub right_points: usize,
    /// Curve shape between barriers; `None` renders nothing
    pub interior: Option<InteriorShape>,
}

/// Profile table keyed by variant.
pub static VARIANT_PROFILES: [VariantProfile; 2] = [
    VariantProfile {
        variant: ProductVariant::Earn,
        tag: "rEARN",
        left_points: 2000,
        right_points: 2000,
        interior: Some(InteriorShape::Linear),
    },
    VariantProfile {
        variant: ProductVariant::EarnStEth,
        tag: "rEARN-stETH",
        left_points: 2000,
        right_points: 2000,
        interior: Some(InteriorShape::StakedAsset),
    },
];

static UNRECOGNIZED_PROFILE: VariantProfile = VariantProfile {
    variant: ProductVariant::Unrecognized,
    tag: "",
    left_points: 0,
    right_points: 0,
    interior: None,
};

impl ProductVariant {
    /// All variants that have a sampling profile.
    pub const KNOWN: [ProductVariant; 2] = [ProductVariant::Earn, ProductVariant::EarnStEth];

    /// Returns the static sampling profile for this variant.
    #[inline]
    pub fn profile(self) -> &'static VariantProfile {
        VARIANT_PROFILES
            .iter()
            .find(|p| p.variant == self)
            .unwrap_or(&UNRECOGNIZED_PROFILE)
    }

    /// Product tag for this variant (empty for `Unrecognized`).
    #[inline]
    pub fn tag(self) -> &'static str {
        self.profile().tag
    }

    /// Returns whether this variant has a sampling profile.
    #[inline]
    pub fn is_known(self) -> bool {
        !matches!(self, ProductVariant::Unrecognized)
    }

    /// Parse a product tag, rejecting tags outside the profile table.
    ///
    /// # Errors
    /// Returns [`SamplerError::UnknownVariant`] for unrecognised tags.
    pub fn parse_strict(tag: &str) -> Result<Self, SamplerError> {
        VARIANT_PROFILES
            .iter()
            .find(|p| p.tag.eq_ignore_ascii_case(tag.trim()))
            .map(|p| p.variant)
            .ok_or_else(|| SamplerError::UnknownVariant(tag.to_string()))
    }
}

impl From<&str> for ProductVariant {
    /// Lenient parse: unknown tags map to [`ProductVariant::Unrecognized`].
    fn from(tag: &str) -> Self {
        match ProductVariant::parse_strict(tag) {
            Ok(variant) => variant,
            Err(_) => {
                tracing::debug!(tag, "unrecognized product variant tag");
                ProductVariant::Unrecognized
            }
        }
    }
}

impl FromStr for ProductVariant {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductVariant::parse_strict(s)
    }
}

impl fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductVariant::Unrecognized => write!(f, "unrecognized"),
            known => write!(f, "{}", known.tag()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProductVariant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProductVariant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ProductVariant::from(tag.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_shape_display() {
        assert_eq!(InteriorShape::Linear.to_string(), "linear");
        assert_eq!(InteriorShape::StakedAsset.to_string(), "staked-asset");
    }

    #[test]
    fn test_known_tags() {
        assert_eq!(ProductVariant::from("rEARN"), ProductVariant::Earn);
        assert_eq!(ProductVariant::from("rEARN-stETH"), ProductVariant::EarnStEth);
        assert_eq!(ProductVariant::from("rearn-steth"), ProductVariant::EarnStEth);
    }

    #[test]
    fn test_unknown_tag_is_lenient() {
        assert_eq!(ProductVariant::from("T-ETH-C"), ProductVariant::Unrecognized);
        assert_eq!(ProductVariant::from(""), ProductVariant::Unrecognized);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "T-ETH-C".parse::<ProductVariant>().unwrap_err();
        assert_eq!(err, SamplerError::UnknownVariant("T-ETH-C".to_string()));
        assert_eq!("rEARN".parse::<ProductVariant>().unwrap(), ProductVariant::Earn);
    }

    #[test]
    fn test_padding_table() {
        for variant in ProductVariant::KNOWN {
            let profile = variant.profile();
            assert_eq!(profile.variant, variant);
            assert_eq!(profile.left_points, 2000);
            assert_eq!(profile.right_points, 2000);
            assert!(profile.interior.is_some());
        }

        let profile = ProductVariant::Unrecognized.profile();
        assert_eq!(profile.left_points, 0);
        assert_eq!(profile.right_points, 0);
        assert!(profile.interior.is_none());
    }

    #[test]
    fn test_display_round_trips_known_tags() {
        for variant in ProductVariant::KNOWN {
            assert_eq!(ProductVariant::from(variant.to_string().as_str()), variant);
        }
        assert_eq!(ProductVariant::Unrecognized.to_string(), "unrecognized");
    }

    #[test]
    fn test_is_known() {
        assert!(ProductVariant::Earn.is_known());
        assert!(ProductVariant::EarnStEth.is_known());
        assert!(!ProductVariant::Unrecognized.is_known());
    }
}
