use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::day_itineraries::DayItineraryEntity;

#[async_trait]
#[automock]
pub trait DayItineraryRepository {
    async fn list(&self) -> Result<Vec<DayItineraryEntity>>;
}
