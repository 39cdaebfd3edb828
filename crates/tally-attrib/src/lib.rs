//! # tally-attrib — attribution calculation engine.
//!
//! Pure, stateless computation: given a deal's value and its ordered
//! touchpoint history, distribute credit across the touchpoints under a
//! selectable model.
//!
//! - **One weighting function per model**: each model produces raw,
//!   non-normalized weights; a single shared normalization step divides by
//!   the sum, so the conservation invariant (fractions sum to 1.0) is
//!   enforced in exactly one place.
//! - **All-or-nothing validation**: contract violations in the inputs fail
//!   with [`InvalidInputError`](tally_core::error::InvalidInputError)
//!   before any weight is computed.
//! - **Deterministic**: no wall clock, no randomness, no I/O; identical
//!   inputs yield bit-identical output.

pub mod engine;
pub mod models;
pub mod rollup;

pub use engine::{calculate_attribution, AttributionEngine};
pub use rollup::partner_totals;
