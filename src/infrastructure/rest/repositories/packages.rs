use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::package_events::PackageEventEntity;
use crate::domain::entities::packages::PackageEntity;
use crate::domain::repositories::packages::PackageRepository;
use crate::infrastructure::rest::api_client::ApiClient;

pub struct RestPackageRepository {
    api: Arc<ApiClient>,
}

impl RestPackageRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PackageRepository for RestPackageRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<PackageEntity>> {
        self.api
            .get_optional_json(&format!("/api/itineraries/{}", id))
            .await
    }

    async fn list_events(&self, package_id: i64) -> Result<Vec<PackageEventEntity>> {
        self.api
            .get_json(&format!("/api/itineraries/{}/events", package_id), &[])
            .await
    }
}
