use serde::{Deserialize, Serialize};

use crate::domain::entities::destinations::DestinationEntity;
use crate::domain::entities::hotels::HotelEntity;
use crate::domain::entities::states::StateEntity;
use crate::domain::value_objects::amenities::toggle_amenity;
use crate::domain::value_objects::enums::hotel_types::HotelType;
use crate::domain::value_objects::enums::record_statuses::RecordStatus;
use crate::domain::value_objects::panels::PendingDelete;

pub const DEFAULT_CHECK_IN_TIME: &str = "14:00";
pub const DEFAULT_CHECK_OUT_TIME: &str = "12:00";

pub const MAX_STAR_RATING: u8 = 5;

/// Server-side filters; changing any of them re-triggers the primary fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HotelListFilter {
    pub destination: Option<String>,
    pub star_rating: Option<u8>,
    pub hotel_type: Option<HotelType>,
    pub status: Option<RecordStatus>,
}

/// Form draft for the hotel add/edit panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelDraft {
    pub name: String,
    pub status: RecordStatus,
    pub destination: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub star_rating: u8,
    pub hotel_type: HotelType,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub amenities: Vec<String>,
    pub description: String,
}

impl Default for HotelDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: RecordStatus::Active,
            destination: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            star_rating: 0,
            hotel_type: HotelType::default(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            check_in_time: DEFAULT_CHECK_IN_TIME.to_string(),
            check_out_time: DEFAULT_CHECK_OUT_TIME.to_string(),
            amenities: Vec::new(),
            description: String::new(),
        }
    }
}

impl HotelDraft {
    pub fn from_entity(entity: &HotelEntity) -> Self {
        let defaults = Self::default();
        Self {
            name: entity.name.clone(),
            status: entity.status,
            destination: entity.destination.clone(),
            address: entity.address.clone().unwrap_or_default(),
            city: entity.city.clone(),
            state: entity.state.clone(),
            country: entity.country.clone(),
            star_rating: entity.star_rating.min(MAX_STAR_RATING),
            hotel_type: HotelType::from_label(&entity.hotel_type).unwrap_or_default(),
            contact_person: entity.contact_person.clone().unwrap_or_default(),
            email: entity.email.clone().unwrap_or_default(),
            phone: entity.phone.clone().unwrap_or_default(),
            website: entity.website.clone().unwrap_or_default(),
            check_in_time: if entity.check_in_time.is_empty() {
                defaults.check_in_time
            } else {
                entity.check_in_time.clone()
            },
            check_out_time: if entity.check_out_time.is_empty() {
                defaults.check_out_time
            } else {
                entity.check_out_time.clone()
            },
            amenities: entity.amenities.clone(),
            description: entity.description.clone().unwrap_or_default(),
        }
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        toggle_amenity(&mut self.amenities, amenity);
    }

    pub fn set_star_rating(&mut self, rating: u8) {
        self.star_rating = rating.min(MAX_STAR_RATING);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelEditor {
    pub draft: HotelDraft,
    /// `None` means create mode.
    pub editing_id: Option<i64>,
}

/// Everything the hotels screen holds between renders. Resets on mount.
#[derive(Debug, Default, Serialize)]
pub struct HotelPanelState {
    pub hotels: Vec<HotelEntity>,
    pub states: Vec<StateEntity>,
    /// Destination options scoped to the form's currently selected state.
    pub destination_options: Vec<DestinationEntity>,
    pub filters: HotelListFilter,
    pub search_term: String,
    pub editor: Option<HotelEditor>,
    pub pending_delete: Option<PendingDelete>,
    pub loading: bool,
    pub saving: bool,
}
