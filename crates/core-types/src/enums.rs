use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The dimension an aggregation groups invoice values by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKey {
    Distributor,
    ClientType,
    Product,
    /// Calendar month of the invoice date, truncated to the first day.
    Month,
}

impl FromStr for GroupKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distributor" => Ok(GroupKey::Distributor),
            "client-type" | "client_type" => Ok(GroupKey::ClientType),
            "product" => Ok(GroupKey::Product),
            "month" => Ok(GroupKey::Month),
            other => Err(CoreError::InvalidInput(
                "group key".to_string(),
                format!("unknown value '{other}'"),
            )),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKey::Distributor => "distributor",
            GroupKey::ClientType => "client-type",
            GroupKey::Product => "product",
            GroupKey::Month => "month",
        };
        f.write_str(name)
    }
}

/// Whether a series point is an observed month or a projected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Actual,
    Forecast,
}
