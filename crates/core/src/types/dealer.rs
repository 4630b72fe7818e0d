//! Dealer directory and locator types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::DealerId;

/// Dealer program tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DealerTier {
    #[default]
    Authorized,
    Premium,
}

impl std::fmt::Display for DealerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authorized => write!(f, "authorized"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// One entry in the public dealer directory.
///
/// Directory entries are static for the lifetime of the process; the
/// locator ranks them by distance but never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerRecord {
    pub id: DealerId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub tier: DealerTier,
}

impl DealerRecord {
    /// The dealer's location as a [`Coordinate`].
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A directory entry ranked by distance from a search origin.
///
/// The distance is rounded to whole miles before ranking, so two dealers
/// that round to the same value keep their directory order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    #[serde(flatten)]
    pub dealer: DealerRecord,
    pub distance_miles: u32,
}

/// The authenticated dealer's own account profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerProfile {
    pub id: DealerId,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub tier: DealerTier,
    pub member_since: NaiveDate,
    pub territory: String,
}
