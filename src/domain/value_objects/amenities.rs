/// The fixed amenity catalog offered by the hotel form; free additions are not
/// supported by the UI.
pub const AMENITY_CATALOG: [&str; 16] = [
    "Wi-Fi",
    "Parking",
    "Swimming Pool",
    "Gym",
    "Spa",
    "Restaurant",
    "Bar",
    "Room Service",
    "Air Conditioning",
    "Laundry",
    "Airport Shuttle",
    "Breakfast",
    "Conference Hall",
    "Kids Play Area",
    "Power Backup",
    "Doctor on Call",
];

/// Adds the amenity when absent, removes it when present. Membership is checked
/// before insertion, so the selection stays an ordered list without duplicates.
pub fn toggle_amenity(amenities: &mut Vec<String>, amenity: &str) {
    match amenities.iter().position(|existing| existing == amenity) {
        Some(index) => {
            amenities.remove(index);
        }
        None => amenities.push(amenity.to_string()),
    }
}
