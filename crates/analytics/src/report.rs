use serde::{Deserialize, Serialize};

/// The headline figures of one dashboard recomputation.
///
/// This struct is the final output of the `KpiEngine` and is consumed
/// directly by the presentation layer (the CLI renders it as the KPI row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiReport {
    /// Sum of invoice values over the filtered records.
    pub total_sales: f64,
    /// Number of distinct invoice identifiers in the filtered records.
    pub total_invoices: usize,
    /// `total_sales / total_invoices`; 0 when there are no invoices.
    pub avg_invoice_value: f64,
    /// Month-over-month growth of the two most recent monthly totals, in
    /// percent; 0 when fewer than two months of history exist.
    pub monthly_growth_pct: f64,
}

impl KpiReport {
    /// Creates a new, zeroed-out KpiReport.
    /// This is the value an empty filter result maps to.
    pub fn new() -> Self {
        Self {
            total_sales: 0.0,
            total_invoices: 0,
            avg_invoice_value: 0.0,
            monthly_growth_pct: 0.0,
        }
    }
}

impl Default for KpiReport {
    fn default() -> Self {
        Self::new()
    }
}
