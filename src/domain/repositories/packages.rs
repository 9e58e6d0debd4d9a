use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::package_events::PackageEventEntity;
use crate::domain::entities::packages::PackageEntity;

#[async_trait]
#[automock]
pub trait PackageRepository {
    /// `Ok(None)` when the backend has no record under this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<PackageEntity>>;

    async fn list_events(&self, package_id: i64) -> Result<Vec<PackageEventEntity>>;
}
