use chrono::{Datelike, NaiveDate};
use core_types::{GroupKey, InvoiceRecord};
use std::collections::{BTreeMap, HashMap};

/// Truncates a date to the first day of its calendar month.
pub fn month_of(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("first of month is always a valid date")
}

/// Sums invoice values per distinct key value.
///
/// Category groups come back in first-encounter order; keeping that order
/// here is what makes the top-N tie-break deterministic. Month groups come
/// back chronologically ascending, keyed as `YYYY-MM`.
pub fn sum_by(records: &[InvoiceRecord], key: GroupKey) -> Vec<(String, f64)> {
    let extract: fn(&InvoiceRecord) -> &str = match key {
        GroupKey::Distributor => |r| r.distributor_name.as_str(),
        GroupKey::ClientType => |r| r.client_type.as_str(),
        GroupKey::Product => |r| r.product_name.as_str(),
        GroupKey::Month => {
            return monthly_totals(records)
                .into_iter()
                .map(|(month, total)| (month.format("%Y-%m").to_string(), total))
                .collect();
        }
    };

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, f64)> = Vec::new();

    for record in records {
        let group = extract(record);
        match index.get(group) {
            Some(&slot) => groups[slot].1 += record.value,
            None => {
                index.insert(group, groups.len());
                groups.push((group.to_string(), record.value));
            }
        }
    }

    groups
}

/// Sums invoice values per calendar month, ascending.
///
/// The chronological ordering is load-bearing: both the growth KPI and the
/// forecaster read this series from oldest to newest.
pub fn monthly_totals(records: &[InvoiceRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(month_of(record.invoice_date)).or_insert(0.0) += record.value;
    }
    totals
}

/// The `n` products with the highest summed value, descending.
///
/// Products with equal totals keep their first-encounter order (the sort is
/// stable), so the ranking is deterministic.
pub fn top_products(records: &[InvoiceRecord], n: usize) -> Vec<(String, f64)> {
    let mut ranked = sum_by(records, GroupKey::Product);
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}
