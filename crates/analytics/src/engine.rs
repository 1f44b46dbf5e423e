use crate::report::KpiReport;
use chrono::NaiveDate;
use core_types::InvoiceRecord;
use std::collections::{BTreeMap, HashSet};

/// A stateless calculator for deriving the headline KPIs from a filtered
/// set of invoice records.
#[derive(Debug, Default)]
pub struct KpiEngine {}

impl KpiEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the KPI row.
    ///
    /// # Arguments
    ///
    /// * `records` - The filtered invoice records.
    /// * `monthly` - Their monthly aggregation (`aggregator::monthly_totals`).
    ///
    /// An empty input maps to an all-zero report; no KPI ever fails.
    pub fn calculate(
        &self,
        records: &[InvoiceRecord],
        monthly: &BTreeMap<NaiveDate, f64>,
    ) -> KpiReport {
        let mut report = KpiReport::new();

        if records.is_empty() {
            // With no records every metric is zero.
            // Return a default report, which is all zeroed out.
            return report;
        }

        report.total_sales = records.iter().map(|r| r.value).sum();
        report.total_invoices = records
            .iter()
            .map(|r| r.invoice_no.as_str())
            .collect::<HashSet<_>>()
            .len();

        if report.total_invoices > 0 {
            report.avg_invoice_value = report.total_sales / report.total_invoices as f64;
        }

        report.monthly_growth_pct = self.monthly_growth(monthly);

        report
    }

    /// Month-over-month growth of the two most recent monthly totals, in
    /// percent.
    ///
    /// Fewer than two months of history map to 0, as does a zero-valued
    /// previous month (the growth ratio is undefined there).
    fn monthly_growth(&self, monthly: &BTreeMap<NaiveDate, f64>) -> f64 {
        let mut totals = monthly.values().rev();
        let (Some(last), Some(second_last)) = (totals.next(), totals.next()) else {
            return 0.0;
        };

        if *second_last == 0.0 {
            return 0.0;
        }

        (last - second_last) / second_last * 100.0
    }
}
