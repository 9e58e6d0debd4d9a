use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::day_itineraries::DayItineraryEntity;
use crate::domain::repositories::day_itineraries::DayItineraryRepository;
use crate::infrastructure::rest::api_client::ApiClient;

pub struct RestDayItineraryRepository {
    api: Arc<ApiClient>,
}

impl RestDayItineraryRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DayItineraryRepository for RestDayItineraryRepository {
    async fn list(&self) -> Result<Vec<DayItineraryEntity>> {
        self.api.get_json("/api/day-itineraries", &[]).await
    }
}
