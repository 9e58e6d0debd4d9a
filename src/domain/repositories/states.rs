use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::states::StateEntity;

#[async_trait]
#[automock]
pub trait StateRepository {
    async fn list_states(&self) -> Result<Vec<StateEntity>>;
}
