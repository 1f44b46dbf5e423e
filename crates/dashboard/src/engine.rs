use crate::error::DashboardError;
use crate::snapshot::DashboardSnapshot;
use analytics::{KpiEngine, aggregator};
use chrono::NaiveDate;
use core_types::{Dataset, GroupKey};
use dataset::FilterSpec;
use forecast::Forecaster;

/// Orchestrates one full, blocking recomputation:
/// filter → aggregate → KPIs → forecast.
///
/// Each user interaction maps to one `snapshot` call. The engine keeps no
/// state between calls; every snapshot is derived fresh from the immutable
/// dataset.
#[derive(Debug)]
pub struct DashboardEngine {
    kpi_engine: KpiEngine,
    ema_span: usize,
    top_products: usize,
}

impl DashboardEngine {
    pub fn new(ema_span: usize, top_products: usize) -> Self {
        Self {
            kpi_engine: KpiEngine::new(),
            ema_span,
            top_products,
        }
    }

    /// Builds the complete output set for one interaction.
    ///
    /// An empty filter result is a valid snapshot: zero KPIs, empty
    /// breakdowns, and no forecast. Only a misconfigured forecaster
    /// (zero span or horizon) is an error.
    pub fn snapshot(
        &self,
        dataset: &Dataset,
        filter: &FilterSpec,
        horizon: usize,
    ) -> Result<DashboardSnapshot, DashboardError> {
        let filtered = filter.apply(dataset);
        tracing::debug!(total = dataset.len(), kept = filtered.len(), "applied dashboard filter");

        let records = filtered.records();
        let monthly = aggregator::monthly_totals(records);
        let kpis = self.kpi_engine.calculate(records, &monthly);

        let monthly_series: Vec<(NaiveDate, f64)> = monthly.into_iter().collect();
        let forecast = if monthly_series.is_empty() {
            // Nothing to smooth; the trend chart renders empty.
            None
        } else {
            Some(Forecaster::new(self.ema_span)?.project(&monthly_series, horizon)?)
        };

        Ok(DashboardSnapshot {
            kpis,
            sales_by_distributor: aggregator::sum_by(records, GroupKey::Distributor),
            sales_by_client_type: aggregator::sum_by(records, GroupKey::ClientType),
            top_products: aggregator::top_products(records, self.top_products),
            monthly_series,
            forecast,
        })
    }
}
