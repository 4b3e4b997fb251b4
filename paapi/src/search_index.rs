//! Search index catalog.

/// Search index (category) names accepted by `ItemSearch`.
///
/// Frozen catalog; the service rejects anything else but this client does
/// not pre-validate against it.
pub static VALID_SEARCH_INDEXES: &[&str] = &[
    "All",
    "Apparel",
    "Appliances",
    "Automotive",
    "Baby",
    "Beauty",
    "Blended",
    "Books",
    "Classical",
    "DVD",
    "Electronics",
    "Grocery",
    "HealthPersonalCare",
    "HomeGarden",
    "HomeImprovement",
    "Jewelry",
    "KindleStore",
    "Kitchen",
    "Lighting",
    "Marketplace",
    "MP3Downloads",
    "Music",
    "MusicTracks",
    "MusicalInstruments",
    "OfficeProducts",
    "OutdoorLiving",
    "Outlet",
    "PetSupplies",
    "PCHardware",
    "Shoes",
    "Software",
    "SoftwareVideoGames",
    "SportingGoods",
    "Tools",
    "Toys",
    "VHS",
    "Video",
    "VideoGames",
    "Watches",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        assert_eq!(VALID_SEARCH_INDEXES.len(), 39);
        assert_eq!(VALID_SEARCH_INDEXES[0], "All");
        assert!(VALID_SEARCH_INDEXES.contains(&"Shoes"));
        assert!(VALID_SEARCH_INDEXES.contains(&"Watches"));
    }
}
