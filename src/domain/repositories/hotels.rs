use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::hotels::HotelEntity;
use crate::domain::value_objects::hotels::{HotelDraft, HotelListFilter};

#[async_trait]
#[automock]
pub trait HotelRepository {
    async fn list(&self, filter: &HotelListFilter) -> Result<Vec<HotelEntity>>;

    async fn create(&self, draft: &HotelDraft) -> Result<String>;

    async fn update(&self, id: i64, draft: &HotelDraft) -> Result<String>;

    async fn delete(&self, id: i64) -> Result<String>;
}
