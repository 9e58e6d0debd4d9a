use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::destinations::DestinationEntity;
use crate::domain::value_objects::destinations::{DestinationDraft, DestinationListFilter};

/// Gateway to the destinations collection. Writes return the backend's
/// acknowledgment message.
#[async_trait]
#[automock]
pub trait DestinationRepository {
    async fn list(&self, filter: &DestinationListFilter) -> Result<Vec<DestinationEntity>>;

    async fn create(&self, draft: &DestinationDraft) -> Result<String>;

    async fn update(&self, id: i64, draft: &DestinationDraft) -> Result<String>;

    async fn delete(&self, id: i64) -> Result<String>;
}
