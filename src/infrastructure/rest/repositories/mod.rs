pub mod day_itineraries;
pub mod destinations;
pub mod hotels;
pub mod packages;
pub mod states;
