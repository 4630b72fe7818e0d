//! The static dealer directory behind the public locator.
//!
//! The showroom network changes a few times a year, so entries ship with
//! the binary and are updated by release rather than through an admin
//! surface. The locator ranks these records by distance but never mutates
//! them.

use std::sync::LazyLock;

use ironwood_core::{DealerId, DealerRecord, DealerTier};

static DIRECTORY: LazyLock<Vec<DealerRecord>> = LazyLock::new(|| {
    vec![
        DealerRecord {
            id: DealerId::new("d1"),
            name: "Lone Star Game Rooms".to_string(),
            address: "21540 Stagecoach Rd".to_string(),
            city: "Tomball".to_string(),
            state: "TX".to_string(),
            zip: "77377".to_string(),
            phone: "(281) 555-0114".to_string(),
            website: Some("https://lonestargamerooms.com".to_string()),
            lat: 30.0972,
            lng: -95.6161,
            tier: DealerTier::Premium,
        },
        DealerRecord {
            id: DealerId::new("d2"),
            name: "Bayou City Billiards".to_string(),
            address: "4412 W 34th St".to_string(),
            city: "Houston".to_string(),
            state: "TX".to_string(),
            zip: "77092".to_string(),
            phone: "(713) 555-0168".to_string(),
            website: Some("https://bayoucitybilliards.com".to_string()),
            lat: 29.8168,
            lng: -95.4949,
            tier: DealerTier::Premium,
        },
        DealerRecord {
            id: DealerId::new("d3"),
            name: "Cowtown Game Tables".to_string(),
            address: "3529 Bluebonnet Cir".to_string(),
            city: "Fort Worth".to_string(),
            state: "TX".to_string(),
            zip: "76109".to_string(),
            phone: "(817) 555-0142".to_string(),
            website: None,
            lat: 32.7113,
            lng: -97.3607,
            tier: DealerTier::Authorized,
        },
        DealerRecord {
            id: DealerId::new("d4"),
            name: "Hill Country Home Recreation".to_string(),
            address: "8650 Spicewood Springs Rd".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78759".to_string(),
            phone: "(512) 555-0131".to_string(),
            website: Some("https://hillcountryhomerec.com".to_string()),
            lat: 30.3942,
            lng: -97.7387,
            tier: DealerTier::Premium,
        },
        DealerRecord {
            id: DealerId::new("d5"),
            name: "North Loop Game Room Co".to_string(),
            address: "2919 Lyndale Ave S".to_string(),
            city: "Minneapolis".to_string(),
            state: "MN".to_string(),
            zip: "55408".to_string(),
            phone: "(612) 555-0177".to_string(),
            website: None,
            lat: 44.9487,
            lng: -93.2879,
            tier: DealerTier::Authorized,
        },
        DealerRecord {
            id: DealerId::new("d6"),
            name: "Desert Ridge Billiards".to_string(),
            address: "4747 E Thomas Rd".to_string(),
            city: "Phoenix".to_string(),
            state: "AZ".to_string(),
            zip: "85016".to_string(),
            phone: "(602) 555-0109".to_string(),
            website: None,
            lat: 33.4951,
            lng: -112.0378,
            tier: DealerTier::Authorized,
        },
        DealerRecord {
            id: DealerId::new("d7"),
            name: "Bay State Game Rooms".to_string(),
            address: "375 Broadway".to_string(),
            city: "Lynnfield".to_string(),
            state: "MA".to_string(),
            zip: "01940".to_string(),
            phone: "(781) 555-0125".to_string(),
            website: Some("https://baystategamerooms.com".to_string()),
            lat: 42.5385,
            lng: -71.0408,
            tier: DealerTier::Premium,
        },
        DealerRecord {
            id: DealerId::new("d8"),
            name: "Metroplex Billiards Supply".to_string(),
            address: "1820 W Crosby Rd".to_string(),
            city: "Carrollton".to_string(),
            state: "TX".to_string(),
            zip: "75006".to_string(),
            phone: "(972) 555-0153".to_string(),
            website: None,
            lat: 32.9702,
            lng: -96.8956,
            tier: DealerTier::Authorized,
        },
    ]
});

/// Every dealer in the directory, in release order.
#[must_use]
pub fn all() -> &'static [DealerRecord] {
    &DIRECTORY
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashSet;

    use ironwood_core::{Coordinate, nearest};

    use super::*;

    #[test]
    fn test_directory_has_unique_ids() {
        let ids: HashSet<&str> = all().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), all().len());
        assert_eq!(all().len(), 8);
    }

    #[test]
    fn test_search_from_a_dealer_location_finds_it_first() {
        let origin = Coordinate {
            lat: 30.0972,
            lng: -95.6161,
        };
        let results = nearest(origin, all(), 3);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].dealer.id.as_str(), "d1");
        assert_eq!(results[0].distance_miles, 0);
        // Houston is the next showroom out from Tomball.
        assert_eq!(results[1].dealer.id.as_str(), "d2");
        assert!(results[1].distance_miles <= results[2].distance_miles);
    }
}
