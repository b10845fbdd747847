use serde::{Deserialize, Serialize};

/// Render-ready dashboard view.
///
/// The core generates these — the frontend just renders them. Every string
/// is already formatted (currency symbols, grouping, percentages), so a
/// frontend never needs its own number formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// Page header (title + logo asset path)
    pub header: Header,

    /// Index selector control
    pub selector: IndexSelector,

    /// Numeric investment input value
    pub investment: f64,

    /// Caption under the input: formatted amount plus its spelled-out form
    pub investment_caption: String,

    /// True while an allocation fetch is in flight ("Loading data...")
    pub loading: bool,

    /// Allocation table; `None` while loading or before the first fetch
    pub table: Option<AllocationTable>,

    /// Pie chart of allocated amounts; present exactly when `table` is
    pub pie: Option<PieChart>,

    /// Saved-portfolio lines; empty list means the section is not shown
    pub saved: Vec<SavedPortfolioLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    pub logo_path: String,
}

/// The "Select Index" dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSelector {
    /// Placeholder option shown before/above the real choices
    pub placeholder: String,

    /// Index names in listing order
    pub options: Vec<String>,

    /// Currently selected name ("" = placeholder)
    pub selected: String,
}

/// Constituent table plus its totals row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationTable {
    pub rows: Vec<TableRow>,

    /// Formatted sum of allocated amounts ("Total" row)
    pub total: String,
}

/// One formatted table row: Stock / Weight (%) / Price (₹) / Shares / Allocated (₹).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    pub symbol: String,
    pub name: String,
    pub weight: String,
    pub price: String,
    pub shares: u64,
    pub allocated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

/// One pie slice, colored from a fixed palette (cycling when constituents
/// outnumber the palette).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    /// Slice label: `"{name}: ₹{grouped value}"`
    pub label: String,

    /// Raw allocated amount (drives the slice angle)
    pub value: f64,

    /// Fill color (hex, e.g. "#8884d8")
    pub color: String,

    /// Hover tooltip: `"{name}: {formatted value}"`
    pub tooltip: String,
}

/// One line in the "Saved Portfolios" list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPortfolioLine {
    pub name: String,

    /// `"{name} — ₹{investment} on {local timestamp}"`
    pub text: String,
}
