use crate::error::DatasetError;
use chrono::{NaiveDate, NaiveDateTime};
use core_types::{Dataset, InvoiceRecord};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The header columns a source file must carry. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 6] = [
    "InvoiceNo",
    "InvoiceDate",
    "ValueNp",
    "ClientType",
    "DistributorName",
    "ProductName",
];

/// One raw CSV row before coercion. Everything is a string at this stage;
/// date and amount parsing decide whether the row survives.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "InvoiceNo")]
    invoice_no: String,
    #[serde(rename = "InvoiceDate")]
    invoice_date: String,
    #[serde(rename = "ValueNp")]
    value: String,
    #[serde(rename = "ClientType")]
    client_type: String,
    #[serde(rename = "DistributorName")]
    distributor_name: String,
    #[serde(rename = "ProductName")]
    product_name: String,
}

/// Loads the invoice dataset from a CSV file on disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path)?;
    read_dataset(BufReader::new(file))
}

/// Reads the invoice dataset from any CSV source.
///
/// Rows whose date or amount fail coercion are dropped, never repaired.
/// A missing required column fails the whole load; a malformed row only
/// loses that row.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in rdr.deserialize::<RawRow>() {
        let raw = match row {
            Ok(raw) => raw,
            Err(err) => {
                // Structurally broken rows get the same treatment as
                // uncoercible ones: dropped at row granularity.
                tracing::debug!(%err, "dropping malformed csv row");
                dropped += 1;
                continue;
            }
        };

        match coerce(raw) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = records.len(), "dropped rows failing coercion");
    }

    Ok(Dataset::new(records))
}

/// Applies the column coercions. `None` means the row is dropped.
fn coerce(raw: RawRow) -> Option<InvoiceRecord> {
    let invoice_date = parse_date(raw.invoice_date.trim())?;
    let value = parse_value(raw.value.trim())?;

    Some(InvoiceRecord {
        invoice_no: raw.invoice_no,
        invoice_date,
        value,
        client_type: raw.client_type,
        distributor_name: raw.distributor_name,
        product_name: raw.product_name,
    })
}

/// Parses an invoice date, accepting the formats the source data is known
/// to carry. Timestamps are truncated to their date.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// Parses an invoice amount. Non-finite values count as uncoercible.
fn parse_value(s: &str) -> Option<f64> {
    let value: f64 = s.parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "InvoiceNo,InvoiceDate,ValueNp,ClientType,DistributorName,ProductName\n";

    #[test]
    fn loads_well_formed_rows_in_file_order() {
        let input = format!(
            "{HEADER}\
             INV-1,2024-01-05,120.50,Retail,Acme,Widget\n\
             INV-2,2024-01-06,80.00,Wholesale,Acme,Gadget\n"
        );

        let dataset = read_dataset(Cursor::new(input)).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].invoice_no, "INV-1");
        assert_eq!(dataset.records()[0].value, 120.50);
        assert_eq!(dataset.records()[1].client_type, "Wholesale");
    }

    #[test]
    fn drops_rows_with_uncoercible_date_or_value() {
        let input = format!(
            "{HEADER}\
             INV-1,2024-01-05,120.50,Retail,Acme,Widget\n\
             INV-2,not-a-date,80.00,Retail,Acme,Widget\n\
             INV-3,2024-01-07,not-a-number,Retail,Acme,Widget\n\
             INV-4,2024-01-08,NaN,Retail,Acme,Widget\n\
             INV-5,2024-01-09,42.00,Retail,Acme,Widget\n"
        );

        let dataset = read_dataset(Cursor::new(input)).unwrap();
        let kept: Vec<&str> = dataset.records().iter().map(|r| r.invoice_no.as_str()).collect();
        assert_eq!(kept, vec!["INV-1", "INV-5"]);
    }

    #[test]
    fn accepts_timestamp_and_day_first_date_formats() {
        let input = format!(
            "{HEADER}\
             INV-1,2024-01-05 13:45:10,10.0,Retail,Acme,Widget\n\
             INV-2,31/01/2024,20.0,Retail,Acme,Widget\n"
        );

        let dataset = read_dataset(Cursor::new(input)).unwrap();
        assert_eq!(
            dataset.records()[0].invoice_date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(
            dataset.records()[1].invoice_date,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn missing_required_column_fails_the_load() {
        let input = "InvoiceNo,InvoiceDate,ClientType,DistributorName,ProductName\n\
                     INV-1,2024-01-05,Retail,Acme,Widget\n";

        let err = read_dataset(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("ValueNp")));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let input = "Region,InvoiceNo,InvoiceDate,ValueNp,ClientType,DistributorName,ProductName\n\
                     North,INV-1,2024-01-05,120.50,Retail,Acme,Widget\n";

        let dataset = read_dataset(Cursor::new(input)).unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
