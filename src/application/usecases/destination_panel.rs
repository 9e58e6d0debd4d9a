use std::sync::Arc;

use tracing::{error, info, warn};

use super::PanelError;
use crate::domain::entities::destinations::DestinationEntity;
use crate::domain::repositories::destinations::DestinationRepository;
use crate::domain::repositories::states::StateRepository;
use crate::domain::value_objects::destinations::{
    DestinationDraft, DestinationEditor, DestinationListFilter, DestinationPanelState,
};
use crate::domain::value_objects::panels::PendingDelete;

/// The destinations master-data screen: a searchable table over the fetched
/// collection plus an add/edit side panel writing back through the same
/// collection endpoint. State resets on construction, one instance per mount.
pub struct DestinationPanel<D, S>
where
    D: DestinationRepository + Send + Sync + 'static,
    S: StateRepository + Send + Sync + 'static,
{
    destination_repo: Arc<D>,
    state_repo: Arc<S>,
    state: DestinationPanelState,
}

impl<D, S> DestinationPanel<D, S>
where
    D: DestinationRepository + Send + Sync + 'static,
    S: StateRepository + Send + Sync + 'static,
{
    pub fn new(destination_repo: Arc<D>, state_repo: Arc<S>) -> Self {
        Self {
            destination_repo,
            state_repo,
            state: DestinationPanelState::default(),
        }
    }

    pub fn state(&self) -> &DestinationPanelState {
        &self.state
    }

    /// Mount: the collection and the state lookup load concurrently. A failed
    /// fetch alerts and leaves whatever was previously displayed untouched.
    pub async fn load(&mut self) -> Result<(), PanelError> {
        info!("destinations: loading panel data");
        self.state.loading = true;

        let filter = DestinationListFilter::default();
        let (destinations, states) = tokio::join!(
            self.destination_repo.list(&filter),
            self.state_repo.list_states(),
        );
        self.state.loading = false;

        let mut first_error: Option<anyhow::Error> = None;

        match destinations {
            Ok(rows) => {
                info!(destination_count = rows.len(), "destinations: collection loaded");
                self.state.destinations = rows;
            }
            Err(err) => {
                error!(error = ?err, "destinations: failed to load collection");
                first_error = Some(err);
            }
        }

        match states {
            Ok(rows) => self.state.states = rows,
            Err(err) => {
                error!(error = ?err, "destinations: failed to load state lookup");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(PanelError::Internal(err)),
            None => Ok(()),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    /// Case-insensitive substring match, OR across name/state/country,
    /// re-evaluated on every keystroke. An empty term shows everything.
    pub fn visible_rows(&self) -> Vec<&DestinationEntity> {
        let term = self.state.search_term.trim().to_lowercase();
        self.state
            .destinations
            .iter()
            .filter(|destination| {
                if term.is_empty() {
                    return true;
                }
                [
                    destination.name.as_str(),
                    destination.state.as_str(),
                    destination.country.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn open_create(&mut self) {
        self.state.editor = Some(DestinationEditor {
            draft: DestinationDraft::default(),
            editing_id: None,
        });
    }

    pub fn open_edit(&mut self, id: i64) {
        match self.state.destinations.iter().find(|record| record.id == id) {
            Some(record) => {
                self.state.editor = Some(DestinationEditor {
                    draft: DestinationDraft::from_entity(record),
                    editing_id: Some(id),
                });
            }
            None => warn!(destination_id = id, "destinations: edit requested for unknown record"),
        }
    }

    pub fn close_editor(&mut self) {
        self.state.editor = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut DestinationDraft> {
        self.state.editor.as_mut().map(|editor| &mut editor.draft)
    }

    /// Save validates locally first; nothing reaches the network on a blank
    /// name. On success the collection refetches wholesale so server-assigned
    /// fields are never guessed at, the panel closes, and the backend's
    /// acknowledgment comes back. On failure the panel stays open with the
    /// draft intact.
    pub async fn save(&mut self) -> Result<String, PanelError> {
        let (draft, editing_id) = match self.state.editor.as_ref() {
            Some(editor) => (editor.draft.clone(), editor.editing_id),
            None => {
                return Err(PanelError::Validation(
                    "No destination form is open".to_string(),
                ));
            }
        };

        if draft.name.trim().is_empty() {
            warn!("destinations: save blocked, name is required");
            return Err(PanelError::Validation(
                "Destination name is required".to_string(),
            ));
        }

        self.state.saving = true;
        let result = match editing_id {
            Some(id) => self.destination_repo.update(id, &draft).await,
            None => self.destination_repo.create(&draft).await,
        };
        self.state.saving = false;

        let message = result.map_err(|err| {
            error!(error = ?err, "destinations: save failed");
            PanelError::Internal(err)
        })?;

        self.refetch_destinations().await;
        self.state.editor = None;
        info!(message = %message, "destinations: record saved");
        Ok(message)
    }

    /// Stages a delete and returns the confirmation prompt naming the record.
    pub fn request_delete(&mut self, id: i64) -> Option<String> {
        let record = self.state.destinations.iter().find(|record| record.id == id)?;
        let pending = PendingDelete {
            id,
            name: record.name.clone(),
        };
        let prompt = pending.prompt("destination");
        self.state.pending_delete = Some(pending);
        Some(prompt)
    }

    pub fn cancel_delete(&mut self) {
        self.state.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> Result<String, PanelError> {
        let pending = match self.state.pending_delete.take() {
            Some(pending) => pending,
            None => {
                return Err(PanelError::Validation(
                    "No delete is awaiting confirmation".to_string(),
                ));
            }
        };

        let message = self
            .destination_repo
            .delete(pending.id)
            .await
            .map_err(|err| {
                error!(destination_id = pending.id, error = ?err, "destinations: delete failed");
                PanelError::Internal(err)
            })?;

        self.refetch_destinations().await;
        info!(destination_id = pending.id, "destinations: record deleted");
        Ok(message)
    }

    async fn refetch_destinations(&mut self) {
        let filter = DestinationListFilter::default();
        match self.destination_repo.list(&filter).await {
            Ok(rows) => self.state.destinations = rows,
            Err(err) => error!(error = ?err, "destinations: refetch after write failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::GENERIC_FAILURE_ALERT;
    use crate::domain::repositories::destinations::MockDestinationRepository;
    use crate::domain::repositories::states::MockStateRepository;
    use crate::domain::value_objects::api_errors::ApiError;

    fn sample_destination(id: i64, name: &str, state: &str, country: &str) -> DestinationEntity {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "state": state,
            "country": country,
        }))
        .unwrap()
    }

    fn states_ok(state_repo: &mut MockStateRepository) {
        state_repo
            .expect_list_states()
            .returning(|| Box::pin(async { Ok(Vec::new()) }));
    }

    fn loaded_panel(
        rows: Vec<DestinationEntity>,
    ) -> DestinationPanel<MockDestinationRepository, MockStateRepository> {
        let mut destination_repo = MockDestinationRepository::new();
        let mut state_repo = MockStateRepository::new();
        destination_repo.expect_list().returning(move |_| {
            let rows = rows.clone();
            Box::pin(async move { Ok(rows) })
        });
        states_ok(&mut state_repo);
        DestinationPanel::new(Arc::new(destination_repo), Arc::new(state_repo))
    }

    #[tokio::test]
    async fn search_yields_the_case_insensitive_or_subset() {
        let mut panel = loaded_panel(vec![
            sample_destination(1, "Palolem", "Goa", "India"),
            sample_destination(2, "Munnar", "Kerala", "India"),
            sample_destination(3, "Pokhara", "Gandaki", "Nepal"),
        ]);
        panel.load().await.unwrap();

        panel.set_search_term("goa");
        let names: Vec<&str> = panel.visible_rows().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Palolem"]);

        panel.set_search_term("INDIA");
        assert_eq!(panel.visible_rows().len(), 2);

        panel.set_search_term("");
        assert_eq!(panel.visible_rows().len(), 3);
    }

    #[tokio::test]
    async fn saving_with_an_empty_name_performs_zero_network_requests() {
        // Mocks carry no expectations: any request would panic the test.
        let mut panel = DestinationPanel::new(
            Arc::new(MockDestinationRepository::new()),
            Arc::new(MockStateRepository::new()),
        );
        panel.open_create();

        let error = panel.save().await.unwrap_err();

        assert_eq!(error.alert_text(), "Destination name is required");
        assert!(panel.state().editor.is_some());
    }

    #[tokio::test]
    async fn successful_save_refetches_and_closes_the_panel() {
        let mut destination_repo = MockDestinationRepository::new();
        let mut state_repo = MockStateRepository::new();
        destination_repo
            .expect_create()
            .times(1)
            .returning(|_| Box::pin(async { Ok("Destination saved successfully".to_string()) }));
        destination_repo.expect_list().times(1).returning(|_| {
            Box::pin(async { Ok(vec![sample_destination(7, "Palolem", "Goa", "India")]) })
        });
        states_ok(&mut state_repo);

        let mut panel = DestinationPanel::new(Arc::new(destination_repo), Arc::new(state_repo));
        panel.open_create();
        panel.draft_mut().unwrap().name = "Palolem".to_string();

        let message = panel.save().await.unwrap();

        assert_eq!(message, "Destination saved successfully");
        assert!(panel.state().editor.is_none());
        assert_eq!(panel.state().destinations.len(), 1);
    }

    #[tokio::test]
    async fn failed_save_keeps_the_panel_open_and_surfaces_the_server_message() {
        let mut destination_repo = MockDestinationRepository::new();
        destination_repo.expect_create().returning(|_| {
            Box::pin(async {
                Err(anyhow::Error::new(ApiError::Server(
                    "Destination name already exists".to_string(),
                )))
            })
        });

        let mut panel = DestinationPanel::new(
            Arc::new(destination_repo),
            Arc::new(MockStateRepository::new()),
        );
        panel.open_create();
        panel.draft_mut().unwrap().name = "Palolem".to_string();

        let error = panel.save().await.unwrap_err();

        assert_eq!(error.alert_text(), "Destination name already exists");
        assert_eq!(
            panel.state().editor.as_ref().unwrap().draft.name,
            "Palolem"
        );
    }

    #[tokio::test]
    async fn transport_failure_surfaces_the_generic_alert() {
        let mut destination_repo = MockDestinationRepository::new();
        destination_repo
            .expect_create()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("connection refused")) }));

        let mut panel = DestinationPanel::new(
            Arc::new(destination_repo),
            Arc::new(MockStateRepository::new()),
        );
        panel.open_create();
        panel.draft_mut().unwrap().name = "Palolem".to_string();

        let error = panel.save().await.unwrap_err();

        assert_eq!(error.alert_text(), GENERIC_FAILURE_ALERT);
    }

    #[tokio::test]
    async fn delete_without_confirmation_performs_zero_network_requests() {
        let mut panel = loaded_panel(vec![sample_destination(1, "Palolem", "Goa", "India")]);
        panel.load().await.unwrap();

        let prompt = panel.request_delete(1).unwrap();
        assert_eq!(prompt, "Delete destination \"Palolem\"?");

        panel.cancel_delete();
        assert!(panel.state().pending_delete.is_none());

        // Confirming with nothing staged is a validation failure, not a request.
        assert!(panel.confirm_delete().await.is_err());
    }

    #[tokio::test]
    async fn confirmed_delete_refetches_the_collection() {
        let mut destination_repo = MockDestinationRepository::new();
        let mut state_repo = MockStateRepository::new();
        let mut rows = vec![vec![], vec![sample_destination(1, "Palolem", "Goa", "India")]];
        destination_repo.expect_list().times(2).returning(move |_| {
            let rows = rows.pop().unwrap();
            Box::pin(async move { Ok(rows) })
        });
        destination_repo
            .expect_delete()
            .times(1)
            .returning(|_| Box::pin(async { Ok("Destination deleted successfully".to_string()) }));
        states_ok(&mut state_repo);

        let mut panel = DestinationPanel::new(Arc::new(destination_repo), Arc::new(state_repo));
        panel.load().await.unwrap();
        panel.request_delete(1).unwrap();

        let message = panel.confirm_delete().await.unwrap();

        assert_eq!(message, "Destination deleted successfully");
        assert!(panel.state().destinations.is_empty());
    }

    #[tokio::test]
    async fn edit_populates_the_draft_with_form_defaults_for_absent_fields() {
        let mut panel = loaded_panel(vec![sample_destination(1, "Palolem", "Goa", "India")]);
        panel.load().await.unwrap();

        panel.open_edit(1);

        let editor = panel.state().editor.as_ref().unwrap();
        assert_eq!(editor.editing_id, Some(1));
        assert_eq!(editor.draft.name, "Palolem");
        assert_eq!(editor.draft.default_currency, "INR");
        assert_eq!(editor.draft.timezone, "Asia/Kolkata");
    }
}
