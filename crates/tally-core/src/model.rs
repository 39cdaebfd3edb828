//! Attribution model selection.
//!
//! Each variant carries its own parameters, so a model selection is
//! self-contained and type-checked instead of an untyped options bag.
//! The serialized form uses the kebab-case string identifiers the
//! surrounding application stores in per-organization configuration
//! (`first-touch`, `time-decay`, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{
    U_SHAPE_FIRST_SHARE, U_SHAPE_LAST_SHARE, W_SHAPE_FIRST_SHARE, W_SHAPE_LAST_SHARE,
    W_SHAPE_MIDDLE_SHARE,
};
use crate::error::InvalidInputError;
use crate::types::TouchpointId;

/// Position shares for the U-shaped model.
///
/// `first` and `last` are fractions of the total credit; whatever remains
/// is split equally among interior touchpoints.
///
/// # Examples
///
/// ```
/// use tally_core::model::UShapedShares;
/// let shares = UShapedShares::default();
/// assert_eq!(shares.first, 0.40);
/// assert_eq!(shares.last, 0.40);
/// assert!((shares.interior() - 0.20).abs() < 1e-12);
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct UShapedShares {
    pub first: f64,
    pub last: f64,
}

impl Default for UShapedShares {
    fn default() -> Self {
        Self {
            first: U_SHAPE_FIRST_SHARE,
            last: U_SHAPE_LAST_SHARE,
        }
    }
}

impl UShapedShares {
    /// Share left over for the interior touchpoints.
    pub fn interior(&self) -> f64 {
        1.0 - self.first - self.last
    }

    /// Check that both shares are finite, non-negative, and sum to at most 1.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_shares(&[self.first, self.last])
    }
}

/// Position shares for the W-shaped model.
///
/// `first`, `middle` (the lead-creation-equivalent touchpoint), and `last`
/// are fractions of the total credit; the remainder is split equally among
/// the other touchpoints.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WShapedShares {
    pub first: f64,
    pub middle: f64,
    pub last: f64,
}

impl Default for WShapedShares {
    fn default() -> Self {
        Self {
            first: W_SHAPE_FIRST_SHARE,
            middle: W_SHAPE_MIDDLE_SHARE,
            last: W_SHAPE_LAST_SHARE,
        }
    }
}

impl WShapedShares {
    /// Share left over for the non-key touchpoints.
    pub fn rest(&self) -> f64 {
        1.0 - self.first - self.middle - self.last
    }

    /// Check that all shares are finite, non-negative, and sum to at most 1.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_shares(&[self.first, self.middle, self.last])
    }
}

fn validate_shares(shares: &[f64]) -> Result<(), InvalidInputError> {
    let sum: f64 = shares.iter().sum();
    if shares.iter().any(|s| !s.is_finite() || *s < 0.0) || sum > 1.0 {
        return Err(InvalidInputError::InvalidShares { sum });
    }
    Ok(())
}

/// Attribution model: how a deal's credit is distributed across its
/// touchpoint history.
///
/// # Examples
///
/// ```
/// use tally_core::model::AttributionModel;
/// let model = AttributionModel::TimeDecay { half_life_secs: 86_400.0 };
/// assert_eq!(model.kind(), "time-decay");
/// let json = serde_json::to_string(&model).unwrap();
/// assert!(json.contains("\"model\":\"time-decay\""));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum AttributionModel {
    /// All credit to the earliest touchpoint.
    FirstTouch,
    /// All credit to the latest touchpoint.
    LastTouch,
    /// Equal credit to every touchpoint.
    Linear,
    /// Exponential weighting toward deal closure: a touchpoint `Δt` before
    /// the latest one weighs `2^(−Δt / half_life)`.
    TimeDecay { half_life_secs: f64 },
    /// Fixed shares for the first and last touchpoints, remainder split
    /// equally among the interior.
    UShaped { shares: UShapedShares },
    /// Fixed shares for the first, middle, and last touchpoints, remainder
    /// split equally among the rest.
    WShaped { shares: WShapedShares },
    /// Caller-supplied non-negative weight per touchpoint id, normalized by
    /// their sum. A touchpoint absent from the map falls back to its own
    /// `weight` field, then to 0.
    CustomWeighted { weights: BTreeMap<TouchpointId, f64> },
}

impl AttributionModel {
    /// U-shaped with the default 40/20/40 split.
    pub fn u_shaped() -> Self {
        Self::UShaped {
            shares: UShapedShares::default(),
        }
    }

    /// W-shaped with the default 30/30/30/10 split.
    pub fn w_shaped() -> Self {
        Self::WShaped {
            shares: WShapedShares::default(),
        }
    }

    /// The model's string identifier as stored in configuration.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FirstTouch => "first-touch",
            Self::LastTouch => "last-touch",
            Self::Linear => "linear",
            Self::TimeDecay { .. } => "time-decay",
            Self::UShaped { .. } => "u-shaped",
            Self::WShaped { .. } => "w-shaped",
            Self::CustomWeighted { .. } => "custom-weighted",
        }
    }
}
