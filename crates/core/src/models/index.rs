use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One entry in the index listing returned by `GET /api/indices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSummary {
    /// Index name (e.g., "NIFTY50") — also the path segment for allocation requests
    pub name: String,
}

impl IndexSummary {
    /// Reject listing entries the dashboard cannot act on.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidResponse(
                "index summary has an empty name".into(),
            ));
        }
        Ok(())
    }
}

/// One stock inside an index allocation.
///
/// All numbers are computed server-side for a given investment amount.
/// The client never recomputes them; `allocated_amount ≈ shares * price`
/// is the server's invariant, not ours to enforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constituent {
    /// Ticker symbol (e.g., "RELIANCE")
    pub symbol: String,

    /// Human-readable company name
    pub name: String,

    /// Target weight within the index, in percent (0–100)
    pub weight: f64,

    /// Per-share price in rupees at computation time
    pub price: f64,

    /// Whole shares to buy for the requested investment
    pub shares: u64,

    /// Rupee amount allocated to this stock
    pub allocated_amount: f64,
}

impl Constituent {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.symbol.trim().is_empty() {
            return Err(CoreError::InvalidResponse(
                "constituent has an empty symbol".into(),
            ));
        }
        if !self.weight.is_finite() || !(0.0..=100.0).contains(&self.weight) {
            return Err(CoreError::InvalidResponse(format!(
                "constituent {}: weight {} outside 0–100",
                self.symbol, self.weight
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CoreError::InvalidResponse(format!(
                "constituent {}: invalid price {}",
                self.symbol, self.price
            )));
        }
        if !self.allocated_amount.is_finite() || self.allocated_amount < 0.0 {
            return Err(CoreError::InvalidResponse(format!(
                "constituent {}: invalid allocated amount {}",
                self.symbol, self.allocated_amount
            )));
        }
        Ok(())
    }
}

/// A server-computed allocation of an investment amount across an index.
///
/// Created fresh on every successful fetch and installed wholesale; the
/// previous allocation is replaced, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexAllocation {
    /// Index name, echoed back by the server
    pub name: String,

    /// Constituents in server order (weight sum ≈ 100, assumed not enforced)
    pub constituents: Vec<Constituent>,
}

impl IndexAllocation {
    /// Validate the whole payload before it is trusted by the dashboard.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidResponse(
                "allocation has an empty index name".into(),
            ));
        }
        for c in &self.constituents {
            c.validate()?;
        }
        Ok(())
    }

    /// Total rupees actually allocated across all constituents.
    #[must_use]
    pub fn total_allocated(&self) -> f64 {
        self.constituents.iter().map(|c| c.allocated_amount).sum()
    }
}
