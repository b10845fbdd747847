use chrono::Local;

use crate::format::currency::{format_inr, group_inr, RUPEE};
use crate::format::words::to_words;
use crate::models::index::IndexAllocation;
use crate::models::state::DashboardState;
use crate::models::view::{
    AllocationTable, DashboardView, Header, IndexSelector, PieChart, PieSlice,
    SavedPortfolioLine, TableRow,
};

/// Slice colors, cycled when constituents outnumber the palette.
pub const PALETTE: [&str; 10] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#8dd1e1", "#d0ed57", "#a4de6c", "#d88884",
    "#a28dd1", "#84a1d8",
];

const TITLE: &str = "DIY Index";
const LOGO_PATH: &str = "/diy-index-logo.png";
const PLACEHOLDER: &str = "-- Choose an index --";

/// Composes dashboard state into render-ready view models.
///
/// The core computes all the numbers and formats all the strings — the
/// frontend only renders. Pure: never mutates state, never does I/O.
pub struct ViewService;

impl ViewService {
    pub fn new() -> Self {
        Self
    }

    /// Build the complete view for the current state.
    ///
    /// Table and pie chart appear only when an allocation is present and
    /// no fetch is in flight, mirroring the loading-indicator behavior.
    #[must_use]
    pub fn render(&self, state: &DashboardState) -> DashboardView {
        let allocation = if state.loading {
            None
        } else {
            state.selected_index.as_ref()
        };

        DashboardView {
            header: Header {
                title: TITLE.to_string(),
                logo_path: LOGO_PATH.to_string(),
            },
            selector: IndexSelector {
                placeholder: PLACEHOLDER.to_string(),
                options: state.indices.iter().map(|i| i.name.clone()).collect(),
                selected: state.selected_index_name.clone(),
            },
            investment: state.investment,
            investment_caption: self.investment_caption(state.investment),
            loading: state.loading,
            table: allocation.map(|a| self.build_table(a)),
            pie: allocation.map(|a| self.build_pie(a)),
            saved: state
                .saved_portfolios
                .iter()
                .map(|p| SavedPortfolioLine {
                    name: p.name.clone(),
                    text: format!(
                        "{} — {RUPEE}{} on {}",
                        p.name,
                        group_inr(p.investment),
                        p.date.with_timezone(&Local).format("%d/%m/%Y, %H:%M:%S"),
                    ),
                })
                .collect(),
        }
    }

    /// "₹1,00,000.00 (one lakh only)" — the words cover the whole-rupee part.
    fn investment_caption(&self, investment: f64) -> String {
        let whole = if investment.is_finite() && investment > 0.0 {
            investment.trunc() as u64
        } else {
            0
        };
        format!("{} ({} only)", format_inr(investment), to_words(whole))
    }

    fn build_table(&self, allocation: &IndexAllocation) -> AllocationTable {
        AllocationTable {
            rows: allocation
                .constituents
                .iter()
                .map(|c| TableRow {
                    symbol: c.symbol.clone(),
                    name: c.name.clone(),
                    weight: format!("{:.2}%", c.weight),
                    price: format_inr(c.price),
                    shares: c.shares,
                    allocated: format_inr(c.allocated_amount),
                })
                .collect(),
            total: format_inr(allocation.total_allocated()),
        }
    }

    fn build_pie(&self, allocation: &IndexAllocation) -> PieChart {
        PieChart {
            slices: allocation
                .constituents
                .iter()
                .enumerate()
                .map(|(i, c)| PieSlice {
                    label: format!("{}: {RUPEE}{}", c.name, group_inr(c.allocated_amount)),
                    value: c.allocated_amount,
                    color: PALETTE[i % PALETTE.len()].to_string(),
                    tooltip: format!("{}: {}", c.name, format_inr(c.allocated_amount)),
                })
                .collect(),
        }
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}
