use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::domain::entities::destinations::DestinationEntity;
use crate::domain::repositories::destinations::DestinationRepository;
use crate::domain::value_objects::destinations::{DestinationDraft, DestinationListFilter};
use crate::infrastructure::rest::api_client::ApiClient;

const DESTINATIONS_PATH: &str = "/api/destinations";

pub struct RestDestinationRepository {
    api: Arc<ApiClient>,
}

impl RestDestinationRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Updates carry the record id in the body; creates omit it.
#[derive(Serialize)]
struct DestinationWriteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(flatten)]
    draft: &'a DestinationDraft,
}

#[async_trait]
impl DestinationRepository for RestDestinationRepository {
    async fn list(&self, filter: &DestinationListFilter) -> Result<Vec<DestinationEntity>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(state) = &filter.state {
            query.push(("state", state.clone()));
        }

        self.api.get_json(DESTINATIONS_PATH, &query).await
    }

    async fn create(&self, draft: &DestinationDraft) -> Result<String> {
        self.api
            .send_write(
                Method::POST,
                DESTINATIONS_PATH,
                &DestinationWriteBody { id: None, draft },
            )
            .await
    }

    async fn update(&self, id: i64, draft: &DestinationDraft) -> Result<String> {
        self.api
            .send_write(
                Method::PUT,
                DESTINATIONS_PATH,
                &DestinationWriteBody { id: Some(id), draft },
            )
            .await
    }

    async fn delete(&self, id: i64) -> Result<String> {
        self.api
            .send_delete(DESTINATIONS_PATH, &[("id", id.to_string())])
            .await
    }
}
