use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::domain::entities::hotels::HotelEntity;
use crate::domain::repositories::hotels::HotelRepository;
use crate::domain::value_objects::hotels::{HotelDraft, HotelListFilter};
use crate::infrastructure::rest::api_client::ApiClient;

const HOTELS_PATH: &str = "/api/hotels";

pub struct RestHotelRepository {
    api: Arc<ApiClient>,
}

impl RestHotelRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[derive(Serialize)]
struct HotelWriteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(flatten)]
    draft: &'a HotelDraft,
}

#[async_trait]
impl HotelRepository for RestHotelRepository {
    async fn list(&self, filter: &HotelListFilter) -> Result<Vec<HotelEntity>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(destination) = &filter.destination {
            query.push(("destination", destination.clone()));
        }
        if let Some(star_rating) = filter.star_rating {
            query.push(("star_rating", star_rating.to_string()));
        }
        if let Some(hotel_type) = filter.hotel_type {
            query.push(("hotel_type", hotel_type.label().to_string()));
        }
        if let Some(status) = filter.status {
            query.push(("status", status.to_string()));
        }

        self.api.get_json(HOTELS_PATH, &query).await
    }

    async fn create(&self, draft: &HotelDraft) -> Result<String> {
        self.api
            .send_write(Method::POST, HOTELS_PATH, &HotelWriteBody { id: None, draft })
            .await
    }

    async fn update(&self, id: i64, draft: &HotelDraft) -> Result<String> {
        self.api
            .send_write(
                Method::PUT,
                HOTELS_PATH,
                &HotelWriteBody { id: Some(id), draft },
            )
            .await
    }

    async fn delete(&self, id: i64) -> Result<String> {
        self.api
            .send_delete(HOTELS_PATH, &[("id", id.to_string())])
            .await
    }
}
