use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::states::StateEntity;
use crate::domain::repositories::states::StateRepository;
use crate::infrastructure::rest::api_client::ApiClient;

pub struct RestStateRepository {
    api: Arc<ApiClient>,
}

impl RestStateRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StateRepository for RestStateRepository {
    async fn list_states(&self) -> Result<Vec<StateEntity>> {
        self.api.get_json("/api/states", &[]).await
    }
}
