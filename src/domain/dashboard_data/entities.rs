use serde::{Deserialize, Serialize};

use super::value_objects::{Percentage, Timestamp};

/// One tracked asset as reported by the markets endpoint. Field names
/// follow the CoinGecko `/coins/markets` payload so the struct
/// deserializes straight off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoAsset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    /// CoinGecko returns null for assets without 24h history.
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: f64,
    pub image: String,
}

impl CryptoAsset {
    pub fn change_24h(&self) -> f64 {
        self.price_change_percentage_24h.unwrap_or(0.0)
    }

    pub fn is_up(&self) -> bool {
        self.change_24h() >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub condition: WeatherCondition,
    pub humidity: u32,
    pub wind_kph: f64,
}

/// Single current-conditions value; the weather card renders exactly this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub name: String,
}

/// One headline. Serde names match the NewsAPI article shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub source: NewsSource,
}

/// Feed keeps the editorial order the source supplied; never re-sorted.
pub type NewsFeed = Vec<NewsItem>;

/// One point of the dominance trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominanceSample {
    pub time: Timestamp,
    pub value: Percentage,
}

/// Trailing 24 hours of dominance at hourly granularity, oldest first.
/// Regenerated wholesale on every poll; never accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceSeries(Vec<DominanceSample>);

impl DominanceSeries {
    pub const HOURLY_POINTS: usize = 24;

    pub fn new(samples: Vec<DominanceSample>) -> Self {
        Self(samples)
    }

    pub fn samples(&self) -> &[DominanceSample] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when timestamps strictly increase from oldest to newest.
    pub fn is_chronological(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].time < pair[1].time)
    }

    pub fn latest(&self) -> Option<&DominanceSample> {
        self.0.last()
    }
}

/// Output of the dominance adapter: the current share plus its trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BtcDominance {
    pub dominance: Percentage,
    pub history: DominanceSeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(change: Option<f64>) -> CryptoAsset {
        CryptoAsset {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            current_price: 64000.0,
            price_change_percentage_24h: change,
            market_cap: 1.2e12,
            image: String::new(),
        }
    }

    #[test]
    fn missing_change_counts_as_flat() {
        assert_eq!(asset(None).change_24h(), 0.0);
        assert!(asset(None).is_up());
        assert!(!asset(Some(-3.2)).is_up());
    }

    #[test]
    fn series_chronology() {
        let mk = |t| DominanceSample {
            time: Timestamp::from_millis(t),
            value: Percentage::new(50.0),
        };
        assert!(DominanceSeries::new(vec![mk(1), mk(2), mk(3)]).is_chronological());
        assert!(!DominanceSeries::new(vec![mk(2), mk(2)]).is_chronological());
    }
}
