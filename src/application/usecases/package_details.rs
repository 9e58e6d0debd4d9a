use std::sync::Arc;

use tracing::{error, info, warn};

use super::PanelError;
use crate::domain::entities::day_itineraries::DayItineraryEntity;
use crate::domain::entities::package_events::PackageEventEntity;
use crate::domain::entities::packages::PackageVehicle;
use crate::domain::repositories::day_itineraries::DayItineraryRepository;
use crate::domain::repositories::packages::PackageRepository;
use crate::domain::value_objects::embedded::numeric_price;
use crate::domain::value_objects::packages::{ItineraryRow, PackageDetailsState};

/// Read-only composed view of one package: the record itself, a derived price
/// total over its event list, and a day-by-day join against the day-itinerary
/// template catalog. The join is gated on both collections having loaded so a
/// partially resolved itinerary is never rendered.
pub struct PackageDetails<P, I>
where
    P: PackageRepository + Send + Sync + 'static,
    I: DayItineraryRepository + Send + Sync + 'static,
{
    package_repo: Arc<P>,
    day_itinerary_repo: Arc<I>,
    state: PackageDetailsState,
}

impl<P, I> PackageDetails<P, I>
where
    P: PackageRepository + Send + Sync + 'static,
    I: DayItineraryRepository + Send + Sync + 'static,
{
    pub fn new(package_repo: Arc<P>, day_itinerary_repo: Arc<I>) -> Self {
        Self {
            package_repo,
            day_itinerary_repo,
            state: PackageDetailsState::default(),
        }
    }

    pub fn state(&self) -> &PackageDetailsState {
        &self.state
    }

    /// Fetches the record, then its event list for the derived total. A
    /// missing record is a terminal not-found state, not an error; a failed
    /// event fetch degrades the total to zero without blocking the view.
    pub async fn load(&mut self, package_id: i64) -> Result<(), PanelError> {
        info!(package_id, "package details: loading record");
        self.state.loading = true;
        self.state.not_found = false;

        let package = match self.package_repo.find_by_id(package_id).await {
            Ok(found) => found,
            Err(err) => {
                self.state.loading = false;
                error!(package_id, error = ?err, "package details: fetch failed");
                return Err(PanelError::Internal(err));
            }
        };

        let Some(package) = package else {
            self.state.loading = false;
            self.state.not_found = true;
            warn!(package_id, "package details: record not found");
            return Ok(());
        };

        self.state.package = Some(package);

        self.state.total_price = match self.package_repo.list_events(package_id).await {
            Ok(events) => Self::sum_event_prices(&events),
            Err(err) => {
                warn!(
                    package_id,
                    error = ?err,
                    "package details: event fetch failed, total degrades to zero"
                );
                0.0
            }
        };

        self.state.loading = false;
        Ok(())
    }

    /// Loads the template catalog. Independent of the primary fetch; a failure
    /// leaves the join gated off rather than surfacing anything.
    pub async fn load_catalog(&mut self) {
        match self.day_itinerary_repo.list().await {
            Ok(catalog) => {
                info!(template_count = catalog.len(), "package details: catalog loaded");
                self.state.catalog = catalog;
                self.state.catalog_loaded = true;
            }
            Err(err) => {
                warn!(error = ?err, "package details: day-itinerary catalog fetch failed");
            }
        }
    }

    /// Keyed lookup into the loaded catalog; `None` renders as "Not selected".
    pub fn day_itinerary_for(&self, id: i64) -> Option<&DayItineraryEntity> {
        self.state
            .catalog
            .iter()
            .find(|template| template.id == id)
    }

    /// The joined day-by-day view. `None` until both the package and the
    /// catalog have loaded, or when the itinerary field failed to decode.
    pub fn itinerary_rows(&self) -> Option<Vec<ItineraryRow<'_>>> {
        if !self.state.catalog_loaded {
            return None;
        }
        let package = self.state.package.as_ref()?;
        let entries = package.package_itineraries.decoded()?;

        Some(
            entries
                .iter()
                .map(|entry| ItineraryRow {
                    day_number: entry.day_number,
                    day_itinerary: entry
                        .day_itinerary_id
                        .and_then(|id| self.day_itinerary_for(id)),
                })
                .collect(),
        )
    }

    /// `None` means the field kept its raw form and the section stays unrendered.
    pub fn inclusions(&self) -> Option<&[String]> {
        self.state
            .package
            .as_ref()
            .and_then(|package| package.package_includes.decoded())
            .map(|items| items.as_slice())
    }

    pub fn exclusions(&self) -> Option<&[String]> {
        self.state
            .package
            .as_ref()
            .and_then(|package| package.package_excludes.decoded())
            .map(|items| items.as_slice())
    }

    pub fn other_destinations(&self) -> Option<&[String]> {
        self.state
            .package
            .as_ref()
            .and_then(|package| package.other_destinations.decoded())
            .map(|items| items.as_slice())
    }

    pub fn vehicles(&self) -> Option<&[PackageVehicle]> {
        self.state
            .package
            .as_ref()
            .and_then(|package| package.package_vehicles.decoded())
            .map(|vehicles| vehicles.as_slice())
    }

    fn sum_event_prices(events: &[PackageEventEntity]) -> f64 {
        events.iter().map(|event| numeric_price(&event.price)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::packages::PackageEntity;
    use crate::domain::repositories::day_itineraries::MockDayItineraryRepository;
    use crate::domain::repositories::packages::MockPackageRepository;
    use serde_json::json;

    fn sample_package(value: serde_json::Value) -> PackageEntity {
        serde_json::from_value(value).unwrap()
    }

    fn sample_template(id: i64, name: &str) -> DayItineraryEntity {
        serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
    }

    fn package_repo_with(
        package: PackageEntity,
        events: Vec<PackageEventEntity>,
    ) -> MockPackageRepository {
        let mut package_repo = MockPackageRepository::new();
        package_repo.expect_find_by_id().returning(move |_| {
            let package = package.clone();
            Box::pin(async move { Ok(Some(package)) })
        });
        package_repo.expect_list_events().returning(move |_| {
            let events = events.clone();
            Box::pin(async move { Ok(events) })
        });
        package_repo
    }

    #[tokio::test]
    async fn total_price_coerces_strings_and_zeroes_junk() {
        let package = sample_package(json!({ "id": 12, "name": "Goa Getaway" }));
        let events: Vec<PackageEventEntity> = serde_json::from_value(json!([
            { "price": "100" },
            { "price": 50 },
            { "price": "bad" },
            { "price": null },
        ]))
        .unwrap();

        let mut view = PackageDetails::new(
            Arc::new(package_repo_with(package, events)),
            Arc::new(MockDayItineraryRepository::new()),
        );
        view.load(12).await.unwrap();

        assert_eq!(view.state().total_price, 150.0);
    }

    #[tokio::test]
    async fn event_fetch_failure_degrades_the_total_to_zero() {
        let package = sample_package(json!({ "id": 12, "name": "Goa Getaway" }));
        let mut package_repo = MockPackageRepository::new();
        package_repo.expect_find_by_id().returning(move |_| {
            let package = package.clone();
            Box::pin(async move { Ok(Some(package)) })
        });
        package_repo
            .expect_list_events()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("connection refused")) }));

        let mut view = PackageDetails::new(
            Arc::new(package_repo),
            Arc::new(MockDayItineraryRepository::new()),
        );
        view.load(12).await.unwrap();

        assert!(view.state().package.is_some());
        assert_eq!(view.state().total_price, 0.0);
    }

    #[tokio::test]
    async fn missing_record_is_a_terminal_not_found_state() {
        let mut package_repo = MockPackageRepository::new();
        package_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut view = PackageDetails::new(
            Arc::new(package_repo),
            Arc::new(MockDayItineraryRepository::new()),
        );
        view.load(99).await.unwrap();

        assert!(view.state().not_found);
        assert!(view.state().package.is_none());
    }

    #[tokio::test]
    async fn malformed_includes_renders_without_the_inclusions_section() {
        let package = sample_package(json!({
            "id": 12,
            "name": "Goa Getaway",
            "package_includes": "not valid json [",
            "package_excludes": "[\"Flights\"]",
        }));

        let mut view = PackageDetails::new(
            Arc::new(package_repo_with(package, Vec::new())),
            Arc::new(MockDayItineraryRepository::new()),
        );
        view.load(12).await.unwrap();

        assert_eq!(view.inclusions(), None);
        assert_eq!(view.exclusions().unwrap(), ["Flights".to_string()]);
    }

    #[tokio::test]
    async fn itinerary_rows_stay_gated_until_the_catalog_loads() {
        let package = sample_package(json!({
            "id": 12,
            "name": "Goa Getaway",
            "package_itineraries": [{ "dayNumber": 1, "dayItineraryId": 7 }],
        }));
        let mut day_itinerary_repo = MockDayItineraryRepository::new();
        day_itinerary_repo
            .expect_list()
            .returning(|| Box::pin(async { Ok(vec![sample_template(7, "Beach Day")]) }));

        let mut view = PackageDetails::new(
            Arc::new(package_repo_with(package, Vec::new())),
            Arc::new(day_itinerary_repo),
        );
        view.load(12).await.unwrap();

        assert!(view.itinerary_rows().is_none());

        view.load_catalog().await;

        let rows = view.itinerary_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label(), "Beach Day");
    }

    #[tokio::test]
    async fn unmatched_day_itinerary_reference_reads_not_selected() {
        let package = sample_package(json!({
            "id": 12,
            "name": "Goa Getaway",
            "package_itineraries": "[{\"dayNumber\":1,\"dayItineraryId\":99}]",
        }));
        let mut day_itinerary_repo = MockDayItineraryRepository::new();
        day_itinerary_repo
            .expect_list()
            .returning(|| Box::pin(async { Ok(vec![sample_template(7, "Beach Day")]) }));

        let mut view = PackageDetails::new(
            Arc::new(package_repo_with(package, Vec::new())),
            Arc::new(day_itinerary_repo),
        );
        view.load(12).await.unwrap();
        view.load_catalog().await;

        let rows = view.itinerary_rows().unwrap();
        assert_eq!(rows[0].label(), "Not selected");
        assert!(rows[0].day_itinerary.is_none());
    }

    #[tokio::test]
    async fn catalog_failure_leaves_the_join_gated_off() {
        let package = sample_package(json!({
            "id": 12,
            "name": "Goa Getaway",
            "package_itineraries": [{ "dayNumber": 1, "dayItineraryId": 7 }],
        }));
        let mut day_itinerary_repo = MockDayItineraryRepository::new();
        day_itinerary_repo
            .expect_list()
            .returning(|| Box::pin(async { Err(anyhow::anyhow!("connection refused")) }));

        let mut view = PackageDetails::new(
            Arc::new(package_repo_with(package, Vec::new())),
            Arc::new(day_itinerary_repo),
        );
        view.load(12).await.unwrap();
        view.load_catalog().await;

        assert!(view.itinerary_rows().is_none());
    }
}
