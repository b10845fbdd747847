pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod services;

use models::state::DashboardState;
use models::view::DashboardView;
use providers::traits::IndexProvider;
use services::portfolio_service::PortfolioService;
use services::view_service::ViewService;

use errors::CoreError;

/// Main entry point for the DIY Index dashboard core.
///
/// Owns all dashboard state and the services that operate on it. State is
/// mutated only through the named transitions on [`DashboardState`], driven
/// by the operations below; a frontend calls these and renders the
/// [`DashboardView`] it gets back.
///
/// Fetch failures are fail-soft by design: they are logged and swallowed,
/// leaving the last good allocation on display. Nothing here retries.
#[must_use]
pub struct IndexDashboard {
    state: DashboardState,
    provider: Box<dyn IndexProvider>,
    portfolio_service: PortfolioService,
    view_service: ViewService,
}

impl std::fmt::Debug for IndexDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexDashboard")
            .field("provider", &self.provider.name())
            .field("indices", &self.state.indices.len())
            .field("selected", &self.state.selected_index_name)
            .field("investment", &self.state.investment)
            .field("loading", &self.state.loading)
            .field("saved_portfolios", &self.state.saved_portfolios.len())
            .finish()
    }
}

impl IndexDashboard {
    /// Create a dashboard over the given data source.
    pub fn new(provider: Box<dyn IndexProvider>) -> Self {
        Self {
            state: DashboardState::default(),
            provider,
            portfolio_service: PortfolioService::new(),
            view_service: ViewService::new(),
        }
    }

    /// Create a dashboard talking HTTP to the server named by the
    /// `DIY_INDEX_API_BASE_URL` environment variable (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, CoreError> {
        let provider = providers::http::HttpIndexProvider::from_env()?;
        Ok(Self::new(Box::new(provider)))
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// App-start sequence: fetch the index listing, auto-select the first
    /// entry, and fetch its allocation at the current investment amount.
    ///
    /// A listing failure is logged and swallowed; the dashboard stays idle
    /// and can be bootstrapped again.
    pub async fn bootstrap(&mut self) {
        match self.provider.list_indices().await {
            Ok(indices) => {
                if let Some(first) = self.state.apply_index_list(indices) {
                    self.fetch_allocation(first).await;
                }
            }
            Err(e) => {
                log::error!("Error fetching indices list: {e}");
            }
        }
    }

    /// Change the selected index and re-fetch its allocation. Selecting
    /// the empty placeholder clears the selection without fetching.
    pub async fn select_index(&mut self, name: impl Into<String>) {
        if let Some(name) = self.state.select_index(name) {
            self.fetch_allocation(name).await;
        }
    }

    /// Change the investment amount and re-fetch the current selection.
    /// Rejects non-finite or negative amounts before anything is mutated.
    pub async fn set_investment(&mut self, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "investment amount must be finite and non-negative, got {amount}"
            )));
        }
        if let Some(name) = self.state.set_investment(amount) {
            self.fetch_allocation(name).await;
        }
        Ok(())
    }

    /// Re-fetch the allocation for the current selection, if any.
    pub async fn refresh_allocation(&mut self) {
        if !self.state.selected_index_name.is_empty() {
            let name = self.state.selected_index_name.clone();
            self.fetch_allocation(name).await;
        }
    }

    /// One allocation fetch under a ticket: a response lands only if no
    /// newer fetch has been issued meanwhile (last-issued-wins), and a
    /// failure clears the loading flag but keeps the previous allocation
    /// on display.
    async fn fetch_allocation(&mut self, name: String) {
        let ticket = self.state.begin_allocation_fetch();
        let amount = self.state.investment;
        match self.provider.get_allocation(&name, amount).await {
            Ok(allocation) => {
                if !self.state.apply_allocation(ticket, allocation) {
                    log::debug!("Dropped superseded allocation response for {name}");
                }
            }
            Err(e) => {
                log::error!("Error fetching selected index {name}: {e}");
                self.state.fail_allocation(ticket);
            }
        }
    }

    // ── Purchase ────────────────────────────────────────────────────

    /// Snapshot the displayed allocation into the saved-portfolios log.
    /// No-op returning `None` when no allocation is loaded.
    pub fn purchase(&mut self) -> Option<uuid::Uuid> {
        self.portfolio_service.purchase(&mut self.state)
    }

    /// All purchased portfolios, oldest first.
    #[must_use]
    pub fn saved_portfolios(&self) -> &[models::portfolio::SavedPortfolio] {
        self.portfolio_service.saved_portfolios(&self.state)
    }

    // ── View ────────────────────────────────────────────────────────

    /// Render the current state into a view a frontend can draw directly.
    #[must_use]
    pub fn render(&self) -> DashboardView {
        self.view_service.render(&self.state)
    }

    // ── State accessors ─────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub fn indices(&self) -> &[models::index::IndexSummary] {
        &self.state.indices
    }

    #[must_use]
    pub fn selected_index_name(&self) -> &str {
        &self.state.selected_index_name
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<&models::index::IndexAllocation> {
        self.state.selected_index.as_ref()
    }

    #[must_use]
    pub fn investment(&self) -> f64 {
        self.state.investment
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }
}
