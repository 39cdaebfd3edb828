//! Raw weighting functions, one per attribution model.
//!
//! Each function returns non-normalized weights, one per touchpoint in
//! input order. Callers (the engine) normalize by the sum afterwards, so
//! a function only has to get the *proportions* right. An empty
//! touchpoint list yields empty weights; the engine short-circuits that
//! case before dispatching, but the functions are public and stay total.

use std::collections::BTreeMap;

use tally_core::error::InvalidInputError;
use tally_core::model::{UShapedShares, WShapedShares};
use tally_core::types::{Touchpoint, TouchpointId};

/// All weight on the earliest touchpoint.
///
/// Equal timestamps are broken by input position, so index 0 wins.
pub fn first_touch_weights(n: usize) -> Vec<f64> {
    let mut weights = vec![0.0; n];
    if let Some(first) = weights.first_mut() {
        *first = 1.0;
    }
    weights
}

/// All weight on the latest touchpoint.
pub fn last_touch_weights(n: usize) -> Vec<f64> {
    let mut weights = vec![0.0; n];
    if let Some(last) = weights.last_mut() {
        *last = 1.0;
    }
    weights
}

/// Equal weight for every touchpoint.
pub fn linear_weights(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

/// Exponential weighting toward deal closure.
///
/// A touchpoint `Δt` seconds before the terminal (latest) touchpoint
/// weighs `2^(−Δt / half_life_secs)`. The terminal touchpoint always
/// weighs exactly 1, so the sum is always positive even when older
/// touchpoints underflow to 0.
pub fn time_decay_weights(
    touchpoints: &[Touchpoint],
    half_life_secs: f64,
) -> Result<Vec<f64>, InvalidInputError> {
    if !half_life_secs.is_finite() || half_life_secs <= 0.0 {
        return Err(InvalidInputError::NonPositiveHalfLife);
    }
    let Some(last) = touchpoints.last() else {
        return Ok(Vec::new());
    };
    let terminal = last.occurred_at;
    Ok(touchpoints
        .iter()
        .map(|tp| {
            let dt_secs = (terminal - tp.occurred_at).num_milliseconds() as f64 / 1000.0;
            (-dt_secs / half_life_secs).exp2()
        })
        .collect())
}

/// Fixed shares for the first and last touchpoints, interior split equally.
///
/// For `n ≤ 2` there is no interior bucket and credit splits equally
/// between the existing touchpoints, whatever the configured shares.
pub fn u_shaped_weights(n: usize, shares: &UShapedShares) -> Result<Vec<f64>, InvalidInputError> {
    shares.validate()?;
    if n <= 2 {
        return Ok(vec![1.0; n]);
    }
    let per_interior = shares.interior() / (n - 2) as f64;
    let mut weights = vec![per_interior; n];
    weights[0] = shares.first;
    weights[n - 1] = shares.last;
    Ok(weights)
}

/// Fixed shares for the first, middle, and last touchpoints, rest split
/// equally.
///
/// The middle touchpoint is the one nearest the sequence midpoint by
/// index, `(n − 1) / 2`, taking the earlier candidate when `n` is even.
/// For `n < 3` the middle bucket is undefined and its share is
/// redistributed proportionally among the defined buckets by the shared
/// normalization step.
pub fn w_shaped_weights(n: usize, shares: &WShapedShares) -> Result<Vec<f64>, InvalidInputError> {
    shares.validate()?;
    match n {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![1.0]),
        2 => return Ok(vec![shares.first, shares.last]),
        _ => {}
    }
    let middle = (n - 1) / 2;
    let rest_count = n - 3;
    let per_rest = if rest_count > 0 {
        shares.rest() / rest_count as f64
    } else {
        0.0
    };
    let mut weights = vec![per_rest; n];
    weights[0] = shares.first;
    weights[middle] = shares.middle;
    weights[n - 1] = shares.last;
    Ok(weights)
}

/// Caller-supplied weight per touchpoint id.
///
/// Precedence per touchpoint: explicit map entry, else the touchpoint's
/// own `weight` field, else 0. Negative or non-finite weights are
/// rejected; an all-zero weight set cannot be normalized and is rejected
/// too.
pub fn custom_weights(
    touchpoints: &[Touchpoint],
    weights: &BTreeMap<TouchpointId, f64>,
) -> Result<Vec<f64>, InvalidInputError> {
    if touchpoints.is_empty() {
        return Ok(Vec::new());
    }
    let mut raw = Vec::with_capacity(touchpoints.len());
    for tp in touchpoints {
        let weight = weights
            .get(&tp.id)
            .copied()
            .or(tp.weight)
            .unwrap_or(0.0);
        if !weight.is_finite() || weight < 0.0 {
            return Err(InvalidInputError::NegativeWeight {
                touchpoint_id: tp.id.clone(),
                weight,
            });
        }
        raw.push(weight);
    }
    if raw.iter().sum::<f64>() <= 0.0 {
        return Err(InvalidInputError::ZeroWeightSum);
    }
    Ok(raw)
}
