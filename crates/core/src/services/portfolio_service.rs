use uuid::Uuid;

use crate::models::portfolio::SavedPortfolio;
use crate::models::state::DashboardState;

/// Manages the session's purchased-portfolio log.
///
/// Pure business logic — no I/O, no API calls. The log is append-only:
/// snapshots are never mutated or removed, and they live only as long as
/// the process.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Snapshot the currently displayed allocation as a purchase.
    ///
    /// Deep-copies the constituents with `purchase_price` frozen at the
    /// current price. No-op returning `None` when no allocation is loaded.
    /// Repeated purchases of the same allocation append distinct entries.
    pub fn purchase(&self, state: &mut DashboardState) -> Option<Uuid> {
        let allocation = state.selected_index.as_ref()?;
        let snapshot = SavedPortfolio::capture(allocation, state.investment);
        let id = snapshot.id;
        state.push_saved_portfolio(snapshot);
        Some(id)
    }

    /// All snapshots in purchase order.
    #[must_use]
    pub fn saved_portfolios<'a>(&self, state: &'a DashboardState) -> &'a [SavedPortfolio] {
        &state.saved_portfolios
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
