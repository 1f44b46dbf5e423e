use analytics::KpiReport;
use chrono::NaiveDate;
use core_types::ForecastSeries;
use serde::{Deserialize, Serialize};

/// Everything one dashboard interaction needs to render, derived in a
/// single pass over the filtered records.
///
/// This struct is the data transfer object between the engine and whatever
/// presentation sits on top (the CLI tables, or JSON for a frontend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub kpis: KpiReport,
    /// Summed sales per distributor, first-encounter order.
    pub sales_by_distributor: Vec<(String, f64)>,
    /// Summed sales per client type, first-encounter order.
    pub sales_by_client_type: Vec<(String, f64)>,
    /// The highest-grossing products, descending.
    pub top_products: Vec<(String, f64)>,
    /// Chronological (month start, total) series.
    pub monthly_series: Vec<(NaiveDate, f64)>,
    /// The combined actual/forecast series; absent when there is no
    /// monthly history to project from.
    pub forecast: Option<ForecastSeries>,
}
