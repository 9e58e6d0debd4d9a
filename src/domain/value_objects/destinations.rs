use serde::{Deserialize, Serialize};

use crate::domain::entities::destinations::DestinationEntity;
use crate::domain::entities::states::StateEntity;
use crate::domain::value_objects::enums::record_statuses::RecordStatus;
use crate::domain::value_objects::panels::PendingDelete;

pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DestinationListFilter {
    pub state: Option<String>,
}

/// Form draft for the destination add/edit panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationDraft {
    pub name: String,
    pub status: RecordStatus,
    pub state: String,
    pub country: String,
    pub description: String,
    pub best_season: String,
    pub default_currency: String,
    pub timezone: String,
}

impl Default for DestinationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: RecordStatus::Active,
            state: String::new(),
            country: String::new(),
            description: String::new(),
            best_season: String::new(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl DestinationDraft {
    /// Populates the form from a record, falling back to form defaults for
    /// anything the record does not carry.
    pub fn from_entity(entity: &DestinationEntity) -> Self {
        let defaults = Self::default();
        Self {
            name: entity.name.clone(),
            status: entity.status,
            state: entity.state.clone(),
            country: entity.country.clone(),
            description: entity.description.clone().unwrap_or_default(),
            best_season: entity.best_season.clone().unwrap_or_default(),
            default_currency: entity
                .default_currency
                .clone()
                .unwrap_or(defaults.default_currency),
            timezone: entity.timezone.clone().unwrap_or(defaults.timezone),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationEditor {
    pub draft: DestinationDraft,
    /// `None` means create mode.
    pub editing_id: Option<i64>,
}

/// Everything the destinations screen holds between renders. Resets on mount.
#[derive(Debug, Default, Serialize)]
pub struct DestinationPanelState {
    pub destinations: Vec<DestinationEntity>,
    pub states: Vec<StateEntity>,
    pub search_term: String,
    pub editor: Option<DestinationEditor>,
    pub pending_delete: Option<PendingDelete>,
    pub loading: bool,
    pub saving: bool,
}
