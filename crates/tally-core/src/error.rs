//! Error types for attribution calculation.
use thiserror::Error;

use crate::types::{DealId, TouchpointId};

/// Contract violation in the inputs to an attribution calculation.
///
/// Always raised synchronously, always all-or-nothing: no partial
/// allocation is ever returned alongside this error. Callers should treat
/// it as non-retryable input validation, distinct from any storage or
/// transport failure on their side.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("deal value must be finite and non-negative, got {0}")] BadDealValue(f64),
    #[error("touchpoint {touchpoint_id} belongs to deal {got}, expected {expected}")] DealIdMismatch {
        touchpoint_id: TouchpointId,
        expected: DealId,
        got: DealId,
    },
    #[error("touchpoint at index {index} occurs before its predecessor")] OutOfOrder { index: usize },
    #[error("time-decay half-life must be positive")] NonPositiveHalfLife,
    #[error("position shares must be finite, non-negative, and sum to at most 1, got sum {sum}")] InvalidShares { sum: f64 },
    #[error("negative weight {weight} for touchpoint {touchpoint_id}")] NegativeWeight {
        touchpoint_id: TouchpointId,
        weight: f64,
    },
    #[error("computed weights sum to zero, cannot normalize")] ZeroWeightSum,
    #[error("computed weights overflow to a non-finite sum, cannot normalize")] NonFiniteWeightSum,
}
