use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The twelve hotel categories the form offers. Records persist the label text.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum HotelType {
    Budget,
    #[default]
    Standard,
    Deluxe,
    Luxury,
    Boutique,
    Resort,
    Heritage,
    Homestay,
    Villa,
    #[serde(rename = "Guest House")]
    GuestHouse,
    Houseboat,
    #[serde(rename = "Tented Camp")]
    TentedCamp,
}

impl HotelType {
    pub const ALL: [HotelType; 12] = [
        HotelType::Budget,
        HotelType::Standard,
        HotelType::Deluxe,
        HotelType::Luxury,
        HotelType::Boutique,
        HotelType::Resort,
        HotelType::Heritage,
        HotelType::Homestay,
        HotelType::Villa,
        HotelType::GuestHouse,
        HotelType::Houseboat,
        HotelType::TentedCamp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HotelType::Budget => "Budget",
            HotelType::Standard => "Standard",
            HotelType::Deluxe => "Deluxe",
            HotelType::Luxury => "Luxury",
            HotelType::Boutique => "Boutique",
            HotelType::Resort => "Resort",
            HotelType::Heritage => "Heritage",
            HotelType::Homestay => "Homestay",
            HotelType::Villa => "Villa",
            HotelType::GuestHouse => "Guest House",
            HotelType::Houseboat => "Houseboat",
            HotelType::TentedCamp => "Tented Camp",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|hotel_type| hotel_type.label().eq_ignore_ascii_case(value))
    }
}

impl Display for HotelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
