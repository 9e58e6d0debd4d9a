use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::embedded::Embedded;

/// Package (itinerary) record. Read-only on this side; several collections are
/// persisted as encoded text and arrive through the decode-with-fallback wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageEntity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub primary_destination: String,
    #[serde(default)]
    pub other_destinations: Embedded<Vec<String>>,
    #[serde(default)]
    pub num_days: Option<i64>,
    #[serde(default)]
    pub num_nights: Option<i64>,
    #[serde(default)]
    pub package_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub pickup_point: Option<String>,
    #[serde(default)]
    pub drop_point: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    /// `Active`, `Draft`, or whatever else the backend decides to store.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub adults: Option<i64>,
    #[serde(default)]
    pub children: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub marketplace_shared: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub package_itineraries: Embedded<Vec<PackageItineraryEntry>>,
    #[serde(default)]
    pub package_vehicles: Embedded<Vec<PackageVehicle>>,
    #[serde(default)]
    pub package_includes: Embedded<Vec<String>>,
    #[serde(default)]
    pub package_excludes: Embedded<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageItineraryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub day_number: Option<i64>,
    #[serde(default)]
    pub day_itinerary_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageVehicle {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub model: String,
    /// Number or numeric string depending on how the record was saved.
    #[serde(default)]
    pub price: serde_json::Value,
    #[serde(default)]
    pub ac_type: String,
}
