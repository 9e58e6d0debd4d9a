use serde::{Deserialize, Serialize};

/// Event record attached to a package; only `price` feeds the derived total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageEventEntity {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Number, numeric string, or junk; non-numeric values contribute zero.
    #[serde(default)]
    pub price: serde_json::Value,
}
