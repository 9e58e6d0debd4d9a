use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use travel_desk::application::usecases::destination_panel::DestinationPanel;
use travel_desk::application::usecases::hotel_panel::HotelPanel;
use travel_desk::config::config_loader;
use travel_desk::domain::repositories::day_itineraries::DayItineraryRepository;
use travel_desk::infrastructure::rest::api_client::ApiClient;
use travel_desk::infrastructure::rest::repositories::day_itineraries::RestDayItineraryRepository;
use travel_desk::infrastructure::rest::repositories::destinations::RestDestinationRepository;
use travel_desk::infrastructure::rest::repositories::hotels::RestHotelRepository;
use travel_desk::infrastructure::rest::repositories::states::RestStateRepository;
use travel_desk::observability;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("travel-desk exited with error: {}", error);
        std::process::exit(1);
    }
}

/// Mounts each screen once against the configured backend and reports what it
/// sees. Doubles as an end-to-end reachability check for the API.
async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("travel-desk")?;

    let config = config_loader::load()?;
    info!(base_url = %config.api.base_url, "ENV has been loaded");

    let api = Arc::new(ApiClient::new(config.api.base_url.clone()));

    let mut destinations = DestinationPanel::new(
        Arc::new(RestDestinationRepository::new(Arc::clone(&api))),
        Arc::new(RestStateRepository::new(Arc::clone(&api))),
    );
    destinations
        .load()
        .await
        .map_err(|err| anyhow::anyhow!(err.alert_text()))?;
    info!(
        destination_count = destinations.state().destinations.len(),
        state_count = destinations.state().states.len(),
        "destinations panel loaded"
    );

    let mut hotels = HotelPanel::new(
        Arc::new(RestHotelRepository::new(Arc::clone(&api))),
        Arc::new(RestDestinationRepository::new(Arc::clone(&api))),
        Arc::new(RestStateRepository::new(Arc::clone(&api))),
    );
    hotels
        .load()
        .await
        .map_err(|err| anyhow::anyhow!(err.alert_text()))?;
    info!(hotel_count = hotels.state().hotels.len(), "hotels panel loaded");

    let day_itineraries = RestDayItineraryRepository::new(Arc::clone(&api));
    let templates = day_itineraries.list().await?;
    info!(template_count = templates.len(), "day-itinerary catalog loaded");

    Ok(())
}
