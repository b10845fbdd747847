use serde::{Deserialize, Serialize};

use super::index::{IndexAllocation, IndexSummary};
use super::portfolio::SavedPortfolio;

/// Investment amount pre-filled when the dashboard starts (₹1,00,000).
pub const DEFAULT_INVESTMENT: f64 = 100_000.0;

/// Ticket identifying one issued allocation fetch.
///
/// A response (success or failure) is applied only if its ticket is still
/// the latest issued, giving deterministic last-issued-wins semantics when
/// two fetches race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// All dashboard state, owned by one controller and mutated only through
/// the named transition methods below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    /// Available indices, in server order
    pub indices: Vec<IndexSummary>,

    /// Name of the currently selected index ("" until the first list arrives)
    pub selected_index_name: String,

    /// Most recently applied allocation, if any
    pub selected_index: Option<IndexAllocation>,

    /// Investment amount driving allocation fetches
    pub investment: f64,

    /// True while an allocation fetch is in flight
    pub loading: bool,

    /// Append-only log of purchased portfolios for this session
    pub saved_portfolios: Vec<SavedPortfolio>,

    /// Sequence number of the most recently issued allocation fetch
    #[serde(skip)]
    allocation_seq: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            selected_index_name: String::new(),
            selected_index: None,
            investment: DEFAULT_INVESTMENT,
            loading: false,
            saved_portfolios: Vec::new(),
            allocation_seq: 0,
        }
    }
}

impl DashboardState {
    // ── Named transitions (the only mutation points) ────────────────

    /// Install the index listing and auto-select the first entry.
    /// Returns the name to fetch an allocation for, if the list is non-empty.
    pub fn apply_index_list(&mut self, indices: Vec<IndexSummary>) -> Option<String> {
        self.indices = indices;
        let first = self.indices.first()?.name.clone();
        self.selected_index_name = first.clone();
        Some(first)
    }

    /// Record a new selection. Returns the name to fetch for, or `None`
    /// when the selection is empty (the placeholder option).
    pub fn select_index(&mut self, name: impl Into<String>) -> Option<String> {
        self.selected_index_name = name.into();
        if self.selected_index_name.is_empty() {
            None
        } else {
            Some(self.selected_index_name.clone())
        }
    }

    /// Record a new investment amount. Returns the selected index name if
    /// one is set, meaning a re-fetch should follow.
    pub fn set_investment(&mut self, amount: f64) -> Option<String> {
        self.investment = amount;
        if self.selected_index_name.is_empty() {
            None
        } else {
            Some(self.selected_index_name.clone())
        }
    }

    /// Begin an allocation fetch: raise the loading flag and issue a ticket.
    pub fn begin_allocation_fetch(&mut self) -> FetchTicket {
        self.allocation_seq += 1;
        self.loading = true;
        FetchTicket(self.allocation_seq)
    }

    /// Apply a fetched allocation. A stale ticket (a newer fetch has been
    /// issued since) is dropped without touching state. Returns whether the
    /// result was applied.
    pub fn apply_allocation(&mut self, ticket: FetchTicket, allocation: IndexAllocation) -> bool {
        if ticket.0 != self.allocation_seq {
            return false;
        }
        self.selected_index = Some(allocation);
        self.loading = false;
        true
    }

    /// Record a failed fetch: clear the loading flag (latest ticket only)
    /// and keep the previous allocation on display.
    pub fn fail_allocation(&mut self, ticket: FetchTicket) {
        if ticket.0 == self.allocation_seq {
            self.loading = false;
        }
    }

    /// Append a purchased-portfolio snapshot.
    pub fn push_saved_portfolio(&mut self, portfolio: SavedPortfolio) {
        self.saved_portfolios.push(portfolio);
    }
}
