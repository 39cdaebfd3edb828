//! Attribution engine implementing the [`AttributionCalculator`] trait.
//!
//! Validates the inputs, dispatches to the per-model weighting function,
//! and applies the one shared normalization step that enforces the
//! conservation invariant.

use tally_core::error::InvalidInputError;
use tally_core::model::AttributionModel;
use tally_core::traits::AttributionCalculator;
use tally_core::types::{CreditAllocation, Deal, Touchpoint};

use crate::models::{
    custom_weights, first_touch_weights, last_touch_weights, linear_weights, time_decay_weights,
    u_shaped_weights, w_shaped_weights,
};

/// The production attribution calculator.
///
/// Stateless; a single instance can be shared across any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct AttributionEngine;

impl AttributionEngine {
    /// Create a new AttributionEngine.
    pub fn new() -> Self {
        Self
    }
}

/// Distribute credit for `deal` across `touchpoints` under `model`.
///
/// Convenience entry point delegating to [`AttributionEngine`]; see
/// [`AttributionCalculator::allocate`] for the contract.
///
/// # Examples
///
/// ```
/// use tally_attrib::calculate_attribution;
/// use tally_core::model::AttributionModel;
/// use tally_core::types::Deal;
///
/// let deal = Deal {
///     id: "d-1".into(),
///     value: 10_000.0,
///     currency: "USD".to_owned(),
/// };
/// let allocations = calculate_attribution(&deal, &[], &AttributionModel::Linear).unwrap();
/// assert!(allocations.is_empty());
/// ```
pub fn calculate_attribution(
    deal: &Deal,
    touchpoints: &[Touchpoint],
    model: &AttributionModel,
) -> Result<Vec<CreditAllocation>, InvalidInputError> {
    AttributionEngine::new().allocate(deal, touchpoints, model)
}

/// Check the caller-side preconditions: a finite non-negative deal value,
/// every touchpoint belonging to the deal, and non-decreasing timestamps.
fn validate_inputs(deal: &Deal, touchpoints: &[Touchpoint]) -> Result<(), InvalidInputError> {
    if !deal.value.is_finite() || deal.value < 0.0 {
        return Err(InvalidInputError::BadDealValue(deal.value));
    }
    for (index, tp) in touchpoints.iter().enumerate() {
        if tp.deal_id != deal.id {
            return Err(InvalidInputError::DealIdMismatch {
                touchpoint_id: tp.id.clone(),
                expected: deal.id.clone(),
                got: tp.deal_id.clone(),
            });
        }
        if index > 0 && tp.occurred_at < touchpoints[index - 1].occurred_at {
            return Err(InvalidInputError::OutOfOrder { index });
        }
    }
    Ok(())
}

/// Raw (non-normalized) weights for a non-empty touchpoint list.
fn raw_weights(
    touchpoints: &[Touchpoint],
    model: &AttributionModel,
) -> Result<Vec<f64>, InvalidInputError> {
    let n = touchpoints.len();
    match model {
        AttributionModel::FirstTouch => Ok(first_touch_weights(n)),
        AttributionModel::LastTouch => Ok(last_touch_weights(n)),
        AttributionModel::Linear => Ok(linear_weights(n)),
        AttributionModel::TimeDecay { half_life_secs } => {
            time_decay_weights(touchpoints, *half_life_secs)
        }
        AttributionModel::UShaped { shares } => u_shaped_weights(n, shares),
        AttributionModel::WShaped { shares } => w_shaped_weights(n, shares),
        AttributionModel::CustomWeighted { weights } => custom_weights(touchpoints, weights),
    }
}

/// Divide raw weights by their sum so fractions sum to 1.0.
///
/// The single place the conservation invariant is enforced; every model's
/// output passes through here. A zero sum is only reachable through
/// degenerate share configurations (e.g. all-zero W-shaped shares with no
/// rest bucket) and cannot be normalized. Individually finite custom
/// weights can still overflow to an infinite sum, which would zero every
/// fraction; that is rejected too, keeping the call all-or-nothing.
fn normalize(weights: &mut [f64]) -> Result<(), InvalidInputError> {
    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() {
        return Err(InvalidInputError::NonFiniteWeightSum);
    }
    if sum <= 0.0 {
        return Err(InvalidInputError::ZeroWeightSum);
    }
    for w in weights.iter_mut() {
        *w /= sum;
    }
    Ok(())
}

impl AttributionCalculator for AttributionEngine {
    fn allocate(
        &self,
        deal: &Deal,
        touchpoints: &[Touchpoint],
        model: &AttributionModel,
    ) -> Result<Vec<CreditAllocation>, InvalidInputError> {
        validate_inputs(deal, touchpoints)?;
        if touchpoints.is_empty() {
            return Ok(Vec::new());
        }

        let mut weights = raw_weights(touchpoints, model)?;
        normalize(&mut weights)?;

        Ok(touchpoints
            .iter()
            .zip(weights)
            .map(|(tp, credit_fraction)| CreditAllocation {
                touchpoint_id: tp.id.clone(),
                partner_id: tp.partner_id.clone(),
                credit_fraction,
                credit_amount: credit_fraction * deal.value,
            })
            .collect())
    }
}
