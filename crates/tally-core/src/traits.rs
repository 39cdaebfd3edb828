//! Trait interfaces for the attribution engine.
//!
//! [`AttributionCalculator`] is the seam between the engine crate and its
//! callers: the backend query layer loads a deal and its ordered
//! touchpoints from storage, picks a model from configuration, and hands
//! everything to an implementation of this trait.

use crate::error::InvalidInputError;
use crate::model::AttributionModel;
use crate::types::{CreditAllocation, Deal, Touchpoint};

/// Pure computation of credit allocations for one deal.
///
/// Implementations must be stateless and side-effect free: no I/O, no
/// logging, no mutation of inputs. Identical inputs yield bit-identical
/// output, and concurrent calls need no synchronization.
pub trait AttributionCalculator: Send + Sync {
    /// Distribute credit for `deal` across `touchpoints` under `model`.
    ///
    /// `touchpoints` must all belong to `deal` and be ordered
    /// non-decreasingly by `occurred_at`; both preconditions are
    /// re-validated. An empty slice yields an empty allocation. For any
    /// non-empty slice the returned fractions sum to 1.0 within
    /// [`FRACTION_TOLERANCE`](crate::constants::FRACTION_TOLERANCE).
    ///
    /// All-or-nothing: on [`InvalidInputError`] no partial result exists.
    fn allocate(
        &self,
        deal: &Deal,
        touchpoints: &[Touchpoint],
        model: &AttributionModel,
    ) -> Result<Vec<CreditAllocation>, InvalidInputError>;
}
