use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::destinations::DestinationEntity;
use crate::domain::repositories::destinations::DestinationRepository;
use crate::domain::value_objects::destinations::DestinationListFilter;

/// One-way parent-to-child cascade: a state selection narrows the destination
/// options. Changing the destination never touches the state.
pub struct DependentLookupResolver<D>
where
    D: DestinationRepository + Send + Sync + 'static,
{
    destination_repo: Arc<D>,
}

impl<D> DependentLookupResolver<D>
where
    D: DestinationRepository + Send + Sync + 'static,
{
    pub fn new(destination_repo: Arc<D>) -> Self {
        Self { destination_repo }
    }

    /// Replaces the option list wholesale. No parent value, or a failed fetch,
    /// empties it.
    pub async fn resolve(&self, state: Option<&str>) -> Vec<DestinationEntity> {
        let Some(state) = state.filter(|value| !value.is_empty()) else {
            return Vec::new();
        };

        let filter = DestinationListFilter {
            state: Some(state.to_string()),
        };
        match self.destination_repo.list(&filter).await {
            Ok(destinations) => destinations,
            Err(error) => {
                warn!(state, error = ?error, "dependent lookup: destination fetch failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::destinations::MockDestinationRepository;
    use mockall::predicate::eq;

    fn sample_destination(id: i64, name: &str, state: &str) -> DestinationEntity {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "state": state,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn no_parent_value_yields_empty_options_without_a_request() {
        let resolver = DependentLookupResolver::new(Arc::new(MockDestinationRepository::new()));

        assert!(resolver.resolve(None).await.is_empty());
        assert!(resolver.resolve(Some("")).await.is_empty());
    }

    #[tokio::test]
    async fn options_are_scoped_to_the_parent_state() {
        let mut destination_repo = MockDestinationRepository::new();
        destination_repo
            .expect_list()
            .with(eq(DestinationListFilter {
                state: Some("Goa".to_string()),
            }))
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![
                        sample_destination(1, "Palolem", "Goa"),
                        sample_destination(2, "Baga", "Goa"),
                    ])
                })
            });

        let resolver = DependentLookupResolver::new(Arc::new(destination_repo));
        let options = resolver.resolve(Some("Goa")).await;

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "Palolem");
    }

    #[tokio::test]
    async fn fetch_failure_empties_the_options() {
        let mut destination_repo = MockDestinationRepository::new();
        destination_repo
            .expect_list()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("connection refused")) }));

        let resolver = DependentLookupResolver::new(Arc::new(destination_repo));

        assert!(resolver.resolve(Some("Goa")).await.is_empty());
    }
}
