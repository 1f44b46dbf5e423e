use crate::enums::PointKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single invoice line item, the atomic unit of the sales dataset.
///
/// Records are valid by construction: the loader drops any source row whose
/// date or value fails coercion, so every record in a `Dataset` carries a
/// parsed date and a finite amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice identifier. Not unique per record: one invoice may span
    /// several line items.
    pub invoice_no: String,
    pub invoice_date: NaiveDate,
    /// Line amount (the source's `ValueNp` column).
    pub value: f64,
    pub client_type: String,
    pub distributor_name: String,
    pub product_name: String,
}

/// An ordered, immutable collection of invoice records.
///
/// A `Dataset` is built once per backing file and never mutated afterwards;
/// the filter stage and every aggregation derive a fresh value from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<InvoiceRecord>,
}

impl Dataset {
    pub fn new(records: Vec<InvoiceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct client types in first-encounter order.
    ///
    /// This is the default selection for the client-type filter.
    pub fn client_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for record in &self.records {
            if seen.insert(record.client_type.as_str()) {
                out.push(record.client_type.clone());
            }
        }
        out
    }

    /// The `[min, max]` invoice-date span, or `None` for an empty dataset.
    ///
    /// This is the default interval for the date-range filter.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(|r| r.invoice_date);
        let first = dates.next()?;
        let span = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(span)
    }
}

/// One point of a combined actual/forecast monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// First day of the month this point belongs to.
    pub month: NaiveDate,
    pub value: f64,
    pub kind: PointKind,
}

/// A chronological monthly series: the observed history followed by a
/// contiguous run of projected months. Observed and projected months never
/// overlap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub points: Vec<SeriesPoint>,
}

impl ForecastSeries {
    /// The observed part of the series.
    pub fn actual(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().filter(|p| p.kind == PointKind::Actual)
    }

    /// The projected part of the series.
    pub fn projected(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().filter(|p| p.kind == PointKind::Forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(invoice_no: &str, date: NaiveDate, client_type: &str) -> InvoiceRecord {
        InvoiceRecord {
            invoice_no: invoice_no.to_string(),
            invoice_date: date,
            value: 1.0,
            client_type: client_type.to_string(),
            distributor_name: "Acme Distribution".to_string(),
            product_name: "Widget".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn client_types_are_distinct_in_first_encounter_order() {
        let dataset = Dataset::new(vec![
            record("A-1", day(2024, 1, 5), "Wholesale"),
            record("A-2", day(2024, 1, 6), "Retail"),
            record("A-3", day(2024, 1, 7), "Wholesale"),
        ]);
        assert_eq!(dataset.client_types(), vec!["Wholesale", "Retail"]);
    }

    #[test]
    fn date_span_covers_min_and_max() {
        let dataset = Dataset::new(vec![
            record("A-1", day(2024, 3, 15), "Retail"),
            record("A-2", day(2024, 1, 2), "Retail"),
            record("A-3", day(2024, 2, 28), "Retail"),
        ]);
        assert_eq!(dataset.date_span(), Some((day(2024, 1, 2), day(2024, 3, 15))));
    }

    #[test]
    fn date_span_is_none_for_empty_dataset() {
        assert_eq!(Dataset::default().date_span(), None);
    }
}
