use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::index::{Constituent, IndexAllocation};

/// A constituent as it was at purchase time.
///
/// Carries the full constituent snapshot plus `purchase_price`, which is the
/// per-share price frozen at capture. Later fetches never touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedConstituent {
    #[serde(flatten)]
    pub constituent: Constituent,

    /// Per-share price at the moment of purchase (== constituent.price then)
    pub purchase_price: f64,
}

/// An immutable snapshot of a purchased allocation.
///
/// Append-only: once created it is never mutated or removed, and it lives
/// only in process memory for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPortfolio {
    /// Unique identifier for this snapshot
    pub id: Uuid,

    /// Index name at capture time
    pub name: String,

    /// Capture timestamp (UTC; localized by the view layer)
    pub date: DateTime<Utc>,

    /// Investment amount the allocation was computed for
    pub investment: f64,

    /// Deep copy of the constituents with purchase prices frozen
    pub data: Vec<PurchasedConstituent>,
}

impl SavedPortfolio {
    /// Snapshot the given allocation at the current instant.
    pub fn capture(allocation: &IndexAllocation, investment: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: allocation.name.clone(),
            date: Utc::now(),
            investment,
            data: allocation
                .constituents
                .iter()
                .map(|c| PurchasedConstituent {
                    constituent: c.clone(),
                    purchase_price: c.price,
                })
                .collect(),
        }
    }
}
