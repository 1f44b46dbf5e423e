use chrono::NaiveDate;
use core_types::Dataset;
use std::collections::HashSet;

/// The two user-facing predicates: a client-type membership set and an
/// inclusive `[from, to]` date interval.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub client_types: HashSet<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl FilterSpec {
    pub fn new(client_types: HashSet<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self { client_types, from, to }
    }

    /// The default, all-inclusive filter for a dataset: every distinct
    /// client type over the full date span. `None` for an empty dataset,
    /// which has no span to default to.
    pub fn all_of(dataset: &Dataset) -> Option<Self> {
        let (from, to) = dataset.date_span()?;
        Some(Self {
            client_types: dataset.client_types().into_iter().collect(),
            from,
            to,
        })
    }

    /// Returns the subset of records matching both predicates, as a new
    /// dataset.
    ///
    /// An empty client-type set selects nothing (not everything), and an
    /// inverted interval selects nothing. An empty result is a valid
    /// dataset, not an error; downstream stages degrade to zeros.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        let records = dataset
            .records()
            .iter()
            .filter(|r| self.client_types.contains(&r.client_type))
            .filter(|r| self.from <= r.invoice_date && r.invoice_date <= self.to)
            .cloned()
            .collect();
        Dataset::new(records)
    }
}
