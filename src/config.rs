use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::domain::errors::{DataError, DataResult};

/// Whether an adapter is backed by a live network client or the built-in
/// mock generator. Crypto ships with both; the other sources fall back to
/// mock until a live provider is wired in at deployment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum DataMode {
    #[default]
    #[strum(serialize = "live")]
    #[serde(rename = "live")]
    Live,
    #[strum(serialize = "mock")]
    #[serde(rename = "mock")]
    Mock,
}

/// Asset ids tracked by the crypto card, in the source's market-cap order.
pub const DEFAULT_ASSET_IDS: [&str; 15] = [
    "bitcoin",
    "ethereum",
    "binancecoin",
    "ripple",
    "cardano",
    "solana",
    "chainlink",
    "polkadot",
    "dogecoin",
    "avalanche-2",
    "shiba-inu",
    "polygon",
    "uniswap",
    "litecoin",
    "cosmos",
];

/// Runtime configuration handed in at mount. Everything has a default so
/// an empty JSON object (or no config at all) yields the stock setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend selection for the crypto adapter.
    pub crypto_mode: DataMode,
    /// CoinGecko asset ids shown on the crypto card.
    pub tracked_assets: Vec<String>,
    /// Quote currency for prices and market caps.
    pub vs_currency: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            crypto_mode: DataMode::Live,
            tracked_assets: DEFAULT_ASSET_IDS.iter().map(|id| id.to_string()).collect(),
            vs_currency: "usd".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> DataResult<Self> {
        serde_json::from_str(json).map_err(|e| DataError::Parse(format!("config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.crypto_mode, DataMode::Live);
        assert_eq!(cfg.tracked_assets.len(), 15);
        assert_eq!(cfg.tracked_assets[0], "bitcoin");
        assert_eq!(cfg.vs_currency, "usd");
    }

    #[test]
    fn empty_json_is_default() {
        let cfg = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn partial_json_overrides() {
        let cfg = DashboardConfig::from_json(r#"{"crypto_mode":"mock","vs_currency":"eur"}"#).unwrap();
        assert_eq!(cfg.crypto_mode, DataMode::Mock);
        assert_eq!(cfg.vs_currency, "eur");
        assert_eq!(cfg.tracked_assets.len(), 15);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            DashboardConfig::from_json("not json"),
            Err(crate::domain::errors::DataError::Parse(_))
        ));
    }
}
