//! Core attribution types: deals, touchpoints, credit allocations.
//!
//! All identifiers are opaque strings owned by the surrounding application;
//! this crate never parses or generates them. Monetary values are `f64` in
//! the deal's own currency — currency itself is pass-through only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Borrow the underlying identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

id_newtype! {
    /// Opaque identifier of a deal.
    DealId
}

id_newtype! {
    /// Opaque identifier of a partner.
    PartnerId
}

id_newtype! {
    /// Opaque identifier of a single touchpoint.
    TouchpointId
}

/// The monetizable event being attributed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Deal {
    pub id: DealId,
    /// Deal value in `currency`. Must be finite and non-negative.
    pub value: f64,
    /// Pass-through currency code. The engine performs no conversion.
    pub currency: String,
}

/// A single partner interaction contributing to an eventual deal.
///
/// Touchpoints supplied to the engine for one calculation must all share
/// the same `deal_id` and be ordered non-decreasingly by `occurred_at`;
/// the engine re-validates both before computing anything.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Touchpoint {
    pub id: TouchpointId,
    pub partner_id: PartnerId,
    pub deal_id: DealId,
    pub occurred_at: DateTime<Utc>,
    /// Categorical tag (e.g. `referral`, `content`, `event`). Carried
    /// through to the allocation but never interpreted by the engine.
    pub channel: String,
    /// Static weight consulted only by the custom-weighted model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Credit assigned to one touchpoint by one calculation.
///
/// For a non-empty touchpoint list the `credit_fraction` values sum to 1.0
/// and the `credit_amount` values sum to the deal value, both within
/// floating-point tolerance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreditAllocation {
    pub touchpoint_id: TouchpointId,
    pub partner_id: PartnerId,
    /// Proportion of the deal value in `[0, 1]`.
    pub credit_fraction: f64,
    /// `credit_fraction * deal.value`.
    pub credit_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_newtypes_display_and_convert() {
        let id = DealId::from("deal-42");
        assert_eq!(id.as_str(), "deal-42");
        assert_eq!(id.to_string(), "deal-42");
        assert_eq!(DealId::from("deal-42".to_owned()), id);
    }

    #[test]
    fn id_serializes_transparently() {
        let id = TouchpointId::from("tp-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tp-1\"");
    }

    #[test]
    fn touchpoint_weight_omitted_when_absent() {
        let tp = Touchpoint {
            id: TouchpointId::from("tp-1"),
            partner_id: PartnerId::from("p-1"),
            deal_id: DealId::from("d-1"),
            occurred_at: DateTime::from_timestamp(0, 0).unwrap(),
            channel: "referral".to_owned(),
            weight: None,
        };
        let json = serde_json::to_string(&tp).unwrap();
        assert!(!json.contains("weight"), "json: {json}");
    }
}
