use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::record_statuses::RecordStatus;

/// Hotel record as served by the backend. `hotel_type` stays a plain string on
/// the wire; the fixed label catalog lives in `value_objects::enums::hotel_types`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelEntity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    /// 0 means unrated.
    #[serde(default)]
    pub star_rating: u8,
    #[serde(default)]
    pub hotel_type: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub check_in_time: String,
    #[serde(default)]
    pub check_out_time: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
