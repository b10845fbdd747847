use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::index::{IndexAllocation, IndexSummary};

/// Trait abstraction for the index data source.
///
/// The real implementation talks HTTP to the allocation server; tests
/// substitute mocks. If the API changes, only the one implementation
/// moves — the dashboard on top is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IndexProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// List the indices available for allocation.
    async fn list_indices(&self) -> Result<Vec<IndexSummary>, CoreError>;

    /// Fetch the server-computed allocation of `amount` across the named
    /// index. `amount` must be finite and non-negative; the server is the
    /// sole authority for weights, shares, and allocated amounts.
    async fn get_allocation(
        &self,
        index_name: &str,
        amount: f64,
    ) -> Result<IndexAllocation, CoreError>;
}
