//! Great-circle distance and dealer ranking.

use crate::types::{Coordinate, DealerRecord, DistanceResult};

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two points in miles, via the haversine
/// formula.
///
/// The intermediate term is clamped to `[0, 1]` so antipodal points and
/// floating-point drift never push the square roots out of domain.
#[must_use]
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Rank `dealers` by distance from `origin` and keep the closest `limit`.
///
/// Distances are rounded to whole miles before ranking and the sort is
/// stable, so dealers that round to the same distance keep their directory
/// order. A `limit` of zero yields an empty list.
#[must_use]
pub fn nearest(origin: Coordinate, dealers: &[DealerRecord], limit: usize) -> Vec<DistanceResult> {
    let mut ranked: Vec<DistanceResult> = dealers
        .iter()
        .map(|dealer| DistanceResult {
            dealer: dealer.clone(),
            distance_miles: round_miles(haversine_miles(origin, dealer.coordinate())),
        })
        .collect();
    ranked.sort_by_key(|result| result.distance_miles);
    ranked.truncate(limit);
    ranked
}

// Haversine output is finite and non-negative, so the cast cannot wrap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_miles(miles: f64) -> u32 {
    miles.round() as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use crate::types::{DealerId, DealerTier};

    use super::*;

    fn dealer_at(id: &str, lat: f64, lng: f64) -> DealerRecord {
        DealerRecord {
            id: DealerId::new(id),
            name: format!("Dealer {id}"),
            address: "1 Main St".to_string(),
            city: "Tomball".to_string(),
            state: "TX".to_string(),
            zip: "77377".to_string(),
            phone: "(281) 555-0100".to_string(),
            website: None,
            lat,
            lng,
            tier: DealerTier::Authorized,
        }
    }

    const TOMBALL: Coordinate = Coordinate {
        lat: 30.0972,
        lng: -95.6161,
    };
    const HOUSTON: Coordinate = Coordinate {
        lat: 29.8168,
        lng: -95.4949,
    };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert!(haversine_miles(TOMBALL, TOMBALL).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = haversine_miles(TOMBALL, HOUSTON);
        let back = haversine_miles(HOUSTON, TOMBALL);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_tomball_to_houston_is_about_twenty_miles() {
        let miles = haversine_miles(TOMBALL, HOUSTON);
        assert!((20.0..22.0).contains(&miles), "got {miles}");
    }

    #[test]
    fn test_nearest_sorts_by_distance() {
        let dealers = vec![
            dealer_at("far", 44.9487, -93.2879),
            dealer_at("near", 29.8168, -95.4949),
            dealer_at("here", 30.0972, -95.6161),
        ];
        let ranked = nearest(TOMBALL, &dealers, 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].dealer.id.as_str(), "here");
        assert_eq!(ranked[0].distance_miles, 0);
        assert_eq!(ranked[1].dealer.id.as_str(), "near");
        assert_eq!(ranked[2].dealer.id.as_str(), "far");
    }

    #[test]
    fn test_ties_keep_directory_order() {
        // Same coordinates round to the same distance.
        let dealers = vec![
            dealer_at("first", 29.8168, -95.4949),
            dealer_at("second", 29.8168, -95.4949),
        ];
        let ranked = nearest(TOMBALL, &dealers, 2);

        assert_eq!(ranked[0].dealer.id.as_str(), "first");
        assert_eq!(ranked[1].dealer.id.as_str(), "second");
        assert_eq!(ranked[0].distance_miles, ranked[1].distance_miles);
    }

    #[test]
    fn test_limit_beyond_directory_returns_everything() {
        let dealers = vec![dealer_at("only", 29.8168, -95.4949)];
        assert_eq!(nearest(TOMBALL, &dealers, 10).len(), 1);
    }

    #[test]
    fn test_limit_zero_returns_nothing() {
        let dealers = vec![dealer_at("only", 29.8168, -95.4949)];
        assert!(nearest(TOMBALL, &dealers, 0).is_empty());
    }
}
