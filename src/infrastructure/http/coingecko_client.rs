use gloo_net::http::Request;

use crate::application::adapters::CryptoProvider;
use crate::config::DashboardConfig;
use crate::domain::dashboard_data::CryptoAsset;
use crate::domain::errors::{DataError, DataResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Live crypto provider over the public CoinGecko markets endpoint.
#[derive(Clone)]
pub struct CoinGeckoClient {
    vs_currency: String,
    ids: Vec<String>,
}

impl CoinGeckoClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            vs_currency: config.vs_currency.clone(),
            ids: config.tracked_assets.clone(),
        }
    }

    fn base_url(&self) -> String {
        "https://api.coingecko.com/api/v3".to_string()
    }

    pub fn markets_url(&self) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1&ids={}",
            self.base_url(),
            self.vs_currency,
            self.ids.len(),
            self.ids.join(","),
        )
    }
}

impl CryptoProvider for CoinGeckoClient {
    async fn markets(&self) -> DataResult<Vec<CryptoAsset>> {
        let url = self.markets_url();
        log_debug!(LogComponent::Net("coingecko"), "fetching markets from {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataError::Network(format!("request failed: {e:?}")))?;

        if !response.ok() {
            return Err(DataError::Network(format!("HTTP {}", response.status())));
        }

        let assets: Vec<CryptoAsset> = response
            .json()
            .await
            .map_err(|e| DataError::Parse(format!("markets body: {e:?}")))?;

        log_debug!(
            LogComponent::Net("coingecko"),
            "received {} market rows",
            assets.len()
        );
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markets_url_has_the_full_default_query() {
        let client = CoinGeckoClient::new(&DashboardConfig::default());
        let url = client.markets_url();
        assert!(url.starts_with(
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=15&page=1&ids=bitcoin,ethereum,"
        ));
        assert!(url.ends_with("litecoin,cosmos"));
    }

    #[test]
    fn url_respects_config_overrides() {
        let mut config = DashboardConfig::default();
        config.vs_currency = "eur".to_string();
        config.tracked_assets = vec!["bitcoin".to_string()];
        let url = CoinGeckoClient::new(&config).markets_url();
        assert!(url.contains("vs_currency=eur"));
        assert!(url.contains("per_page=1"));
        assert!(url.ends_with("ids=bitcoin"));
    }
}
