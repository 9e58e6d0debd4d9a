pub mod hotel_types;
pub mod record_statuses;
