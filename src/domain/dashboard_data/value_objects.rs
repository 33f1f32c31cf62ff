use derive_more::{Constructor, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - percentage share, e.g. BTC market dominance
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Percentage(f64);

impl Percentage {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Percentage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - milliseconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Constructor, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// City used when geolocation is denied or unavailable.
pub const FALLBACK_LOCATION: &str = "São Paulo";

/// Display name shown when the token is a raw coordinate pair.
pub const COORDINATE_LOCATION_NAME: &str = "Your location";

/// Location handed to the weather provider: either a place name or the
/// coordinates the browser reported.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationToken {
    Place(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl LocationToken {
    pub fn fallback() -> Self {
        Self::Place(FALLBACK_LOCATION.to_string())
    }

    /// Human-readable name for the weather card header.
    pub fn display_name(&self) -> String {
        match self {
            Self::Place(name) => name.clone(),
            Self::Coordinates { .. } => COORDINATE_LOCATION_NAME.to_string(),
        }
    }

    /// Query string a real weather API would accept.
    pub fn query(&self) -> String {
        match self {
            Self::Place(name) => name.clone(),
            Self::Coordinates { latitude, longitude } => {
                format!("{:.4},{:.4}", latitude, longitude)
            }
        }
    }
}

impl std::fmt::Display for LocationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_sao_paulo() {
        let token = LocationToken::fallback();
        assert_eq!(token.display_name(), "São Paulo");
        assert_eq!(token.query(), "São Paulo");
    }

    #[test]
    fn coordinates_format_as_pair() {
        let token = LocationToken::Coordinates { latitude: -23.5505, longitude: -46.6333 };
        assert_eq!(token.query(), "-23.5505,-46.6333");
        assert_eq!(token.display_name(), COORDINATE_LOCATION_NAME);
    }

    #[test]
    fn timestamps_order_by_value() {
        assert!(Timestamp::from_millis(1) < Timestamp::from_millis(2));
    }
}
