use std::sync::Arc;

use tracing::{error, info, warn};

use super::PanelError;
use super::dependent_lookup::DependentLookupResolver;
use crate::domain::entities::hotels::HotelEntity;
use crate::domain::repositories::destinations::DestinationRepository;
use crate::domain::repositories::hotels::HotelRepository;
use crate::domain::repositories::states::StateRepository;
use crate::domain::value_objects::hotels::{
    HotelDraft, HotelEditor, HotelListFilter, HotelPanelState,
};
use crate::domain::value_objects::panels::PendingDelete;

/// The hotels master-data screen. Same shape as the destinations panel plus
/// server-side filters and the state -> destination cascade on the form.
/// Server filters narrow what is fetched; the client search further narrows
/// what is rendered. The two compose and never replace each other.
pub struct HotelPanel<H, D, S>
where
    H: HotelRepository + Send + Sync + 'static,
    D: DestinationRepository + Send + Sync + 'static,
    S: StateRepository + Send + Sync + 'static,
{
    hotel_repo: Arc<H>,
    resolver: DependentLookupResolver<D>,
    state_repo: Arc<S>,
    state: HotelPanelState,
}

impl<H, D, S> HotelPanel<H, D, S>
where
    H: HotelRepository + Send + Sync + 'static,
    D: DestinationRepository + Send + Sync + 'static,
    S: StateRepository + Send + Sync + 'static,
{
    pub fn new(hotel_repo: Arc<H>, destination_repo: Arc<D>, state_repo: Arc<S>) -> Self {
        Self {
            hotel_repo,
            resolver: DependentLookupResolver::new(destination_repo),
            state_repo,
            state: HotelPanelState::default(),
        }
    }

    pub fn state(&self) -> &HotelPanelState {
        &self.state
    }

    pub async fn load(&mut self) -> Result<(), PanelError> {
        info!("hotels: loading panel data");
        self.state.loading = true;

        let filter = self.state.filters.clone();
        let (hotels, states) = tokio::join!(
            self.hotel_repo.list(&filter),
            self.state_repo.list_states(),
        );
        self.state.loading = false;

        let mut first_error: Option<anyhow::Error> = None;

        match hotels {
            Ok(rows) => {
                info!(hotel_count = rows.len(), "hotels: collection loaded");
                self.state.hotels = rows;
            }
            Err(err) => {
                error!(error = ?err, "hotels: failed to load collection");
                first_error = Some(err);
            }
        }

        match states {
            Ok(rows) => self.state.states = rows,
            Err(err) => {
                error!(error = ?err, "hotels: failed to load state lookup");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(PanelError::Internal(err)),
            None => Ok(()),
        }
    }

    /// Replaces the server-side filter set and re-triggers the primary fetch.
    /// A failed fetch keeps the previously displayed rows.
    pub async fn set_filters(&mut self, filters: HotelListFilter) -> Result<(), PanelError> {
        self.state.filters = filters;
        self.state.loading = true;
        let result = self.refetch_hotels().await;
        self.state.loading = false;
        result.map_err(|err| {
            error!(error = ?err, "hotels: filtered fetch failed");
            PanelError::Internal(err)
        })
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    /// Client-side search over the already-filtered fetch result.
    pub fn visible_rows(&self) -> Vec<&HotelEntity> {
        let term = self.state.search_term.trim().to_lowercase();
        self.state
            .hotels
            .iter()
            .filter(|hotel| {
                if term.is_empty() {
                    return true;
                }
                [
                    hotel.name.as_str(),
                    hotel.destination.as_str(),
                    hotel.city.as_str(),
                    hotel.hotel_type.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn open_create(&mut self) {
        self.state.editor = Some(HotelEditor {
            draft: HotelDraft::default(),
            editing_id: None,
        });
    }

    /// The destination options load for the record's state before the panel
    /// opens, so the dropdown agrees with the value being edited.
    pub async fn open_edit(&mut self, id: i64) {
        let Some(record) = self
            .state
            .hotels
            .iter()
            .find(|hotel| hotel.id == id)
            .cloned()
        else {
            warn!(hotel_id = id, "hotels: edit requested for unknown record");
            return;
        };

        let state_name = (!record.state.is_empty()).then(|| record.state.clone());
        self.state.destination_options = self.resolver.resolve(state_name.as_deref()).await;
        self.state.editor = Some(HotelEditor {
            draft: HotelDraft::from_entity(&record),
            editing_id: Some(id),
        });
    }

    pub fn close_editor(&mut self) {
        self.state.editor = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut HotelDraft> {
        self.state.editor.as_mut().map(|editor| &mut editor.draft)
    }

    /// Form cascade: picking a state clears the chosen destination and swaps
    /// the option list for the ones scoped to that state.
    pub async fn select_form_state(&mut self, state_name: Option<String>) {
        if self.state.editor.is_none() {
            return;
        }

        let options = self.resolver.resolve(state_name.as_deref()).await;
        if let Some(editor) = self.state.editor.as_mut() {
            editor.draft.state = state_name.unwrap_or_default();
            editor.draft.destination.clear();
        }
        self.state.destination_options = options;
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(editor) = self.state.editor.as_mut() {
            editor.draft.toggle_amenity(amenity);
        }
    }

    pub async fn save(&mut self) -> Result<String, PanelError> {
        let (draft, editing_id) = match self.state.editor.as_ref() {
            Some(editor) => (editor.draft.clone(), editor.editing_id),
            None => return Err(PanelError::Validation("No hotel form is open".to_string())),
        };

        if draft.name.trim().is_empty() {
            warn!("hotels: save blocked, name is required");
            return Err(PanelError::Validation("Hotel name is required".to_string()));
        }

        self.state.saving = true;
        let result = match editing_id {
            Some(id) => self.hotel_repo.update(id, &draft).await,
            None => self.hotel_repo.create(&draft).await,
        };
        self.state.saving = false;

        let message = result.map_err(|err| {
            error!(error = ?err, "hotels: save failed");
            PanelError::Internal(err)
        })?;

        if let Err(err) = self.refetch_hotels().await {
            error!(error = ?err, "hotels: refetch after write failed");
        }
        self.state.editor = None;
        info!(message = %message, "hotels: record saved");
        Ok(message)
    }

    pub fn request_delete(&mut self, id: i64) -> Option<String> {
        let record = self.state.hotels.iter().find(|hotel| hotel.id == id)?;
        let pending = PendingDelete {
            id,
            name: record.name.clone(),
        };
        let prompt = pending.prompt("hotel");
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

        let message = self.hotel_repo.delete(pending.id).await.map_err(|err| {
            error!(hotel_id = pending.id, error = ?err, "hotels: delete failed");
            PanelError::Internal(err)
        })?;

        if let Err(err) = self.refetch_hotels().await {
            error!(error = ?err, "hotels: refetch after delete failed");
        }
        info!(hotel_id = pending.id, "hotels: record deleted");
        Ok(message)
    }

    async fn refetch_hotels(&mut self) -> anyhow::Result<()> {
        let filter = self.state.filters.clone();
        let rows = self.hotel_repo.list(&filter).await?;
        self.state.hotels = rows;
        Ok(())
    }
}
