//! Per-partner roll-up of credit allocations.

use std::collections::BTreeMap;

use tally_core::types::{CreditAllocation, PartnerId};

/// Sum credit amounts per partner for one deal's allocations.
///
/// Reporting helper for the consuming dashboard: the conservation
/// invariant carries over, so the totals sum to the deal value within the
/// same tolerance as the allocations themselves. Pure like the engine;
/// ordering of the result is deterministic (keyed by partner id).
pub fn partner_totals(allocations: &[CreditAllocation]) -> BTreeMap<PartnerId, f64> {
    let mut totals = BTreeMap::new();
    for allocation in allocations {
        *totals.entry(allocation.partner_id.clone()).or_insert(0.0) +=
            allocation.credit_amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::types::TouchpointId;

    fn alloc(tp: &str, partner: &str, fraction: f64, amount: f64) -> CreditAllocation {
        CreditAllocation {
            touchpoint_id: TouchpointId::from(tp),
            partner_id: PartnerId::from(partner),
            credit_fraction: fraction,
            credit_amount: amount,
        }
    }

    #[test]
    fn totals_group_by_partner() {
        let allocations = vec![
            alloc("a", "p-1", 0.25, 25.0),
            alloc("b", "p-2", 0.50, 50.0),
            alloc("c", "p-1", 0.25, 25.0),
        ];
        let totals = partner_totals(&allocations);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&PartnerId::from("p-1")], 50.0);
        assert_eq!(totals[&PartnerId::from("p-2")], 50.0);
    }

    #[test]
    fn empty_allocations_yield_empty_totals() {
        assert!(partner_totals(&[]).is_empty());
    }
}
