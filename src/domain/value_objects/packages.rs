use serde::Serialize;

use crate::domain::entities::day_itineraries::DayItineraryEntity;
use crate::domain::entities::packages::PackageEntity;

pub const NOT_SELECTED_LABEL: &str = "Not selected";

/// Everything the package details screen holds between renders.
#[derive(Debug, Default, Serialize)]
pub struct PackageDetailsState {
    pub package: Option<PackageEntity>,
    /// Terminal: the record does not exist; the only recovery is navigating back.
    pub not_found: bool,
    /// Sum of the package's event prices; degrades to zero when the event fetch fails.
    pub total_price: f64,
    pub catalog: Vec<DayItineraryEntity>,
    pub catalog_loaded: bool,
    pub loading: bool,
}

/// One day of the composed itinerary view, joined against the template catalog.
#[derive(Debug, Serialize)]
pub struct ItineraryRow<'a> {
    pub day_number: Option<i64>,
    pub day_itinerary: Option<&'a DayItineraryEntity>,
}

impl ItineraryRow<'_> {
    /// Template name, or the placeholder when the reference has no match.
    pub fn label(&self) -> &str {
        self.day_itinerary
            .map(|template| template.name.as_str())
            .unwrap_or(NOT_SELECTED_LABEL)
    }
}
