//! Attribution constants. All shares are fractions of the deal value.

/// Default share of credit assigned to the first touchpoint by the
/// U-shaped model. The last touchpoint receives [`U_SHAPE_LAST_SHARE`];
/// the remainder is split equally among interior touchpoints.
pub const U_SHAPE_FIRST_SHARE: f64 = 0.40;

/// Default share of credit assigned to the last touchpoint by the
/// U-shaped model.
pub const U_SHAPE_LAST_SHARE: f64 = 0.40;

/// Default share of credit assigned to the first touchpoint by the
/// W-shaped model.
pub const W_SHAPE_FIRST_SHARE: f64 = 0.30;

/// Default share of credit assigned to the middle touchpoint
/// (lead-creation equivalent) by the W-shaped model.
pub const W_SHAPE_MIDDLE_SHARE: f64 = 0.30;

/// Default share of credit assigned to the last touchpoint by the
/// W-shaped model.
pub const W_SHAPE_LAST_SHARE: f64 = 0.30;

/// Tolerance for the conservation invariant: credit fractions for one deal
/// must sum to 1.0 within this bound.
pub const FRACTION_TOLERANCE: f64 = 1e-9;

/// Tolerance for the amount-consistency invariant, scaled for large deal
/// values: credit amounts must sum to the deal value within this bound.
pub const AMOUNT_TOLERANCE: f64 = 1e-6;
