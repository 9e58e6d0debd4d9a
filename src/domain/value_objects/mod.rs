pub mod amenities;
pub mod api_errors;
pub mod destinations;
pub mod embedded;
pub mod enums;
pub mod hotels;
pub mod packages;
pub mod panels;
