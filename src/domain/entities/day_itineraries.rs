use serde::{Deserialize, Serialize};

/// Reusable single-day template, referenced from package itinerary entries by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayItineraryEntity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub day_count: Option<i64>,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub day_plans: Vec<DayPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activity_ids: Vec<i64>,
    #[serde(default)]
    pub transfer_ids: Vec<i64>,
    #[serde(default)]
    pub meal_codes: Vec<String>,
    #[serde(default)]
    pub notes: String,
}
