use std::time::Duration;

use leptos::{RwSignal, SignalGetUntracked};

use crate::application::polling::DataSource;
use crate::domain::dashboard_data::{
    BtcDominance, CryptoAsset, LocationToken, NewsFeed, WeatherSnapshot,
};
use crate::domain::errors::{DataError, DataResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Refresh periods, ordered by expected source volatility: prices move
/// faster than dominance or headlines, weather barely moves at all.
pub const CRYPTO_POLL_INTERVAL: Duration = Duration::from_secs(15);
pub const DOMINANCE_POLL_INTERVAL: Duration = Duration::from_secs(300);
pub const NEWS_POLL_INTERVAL: Duration = Duration::from_secs(300);
pub const WEATHER_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Fixed user-facing failure messages, one per card.
pub const CRYPTO_LOAD_ERROR: &str = "Failed to load crypto data";
pub const WEATHER_LOAD_ERROR: &str = "Failed to load weather data";
pub const DOMINANCE_LOAD_ERROR: &str = "Failed to load BTC dominance";
pub const NEWS_LOAD_ERROR: &str = "Failed to load news";

/// Provider seams. Each adapter talks to one of these; mock and live
/// implementations are interchangeable behind them.
#[allow(async_fn_in_trait)]
pub trait CryptoProvider: Clone + 'static {
    async fn markets(&self) -> DataResult<Vec<CryptoAsset>>;
}

#[allow(async_fn_in_trait)]
pub trait WeatherProvider: Clone + 'static {
    async fn current(&self, location: &LocationToken) -> DataResult<WeatherSnapshot>;
}

#[allow(async_fn_in_trait)]
pub trait DominanceProvider: Clone + 'static {
    async fn snapshot(&self) -> DataResult<BtcDominance>;
}

#[allow(async_fn_in_trait)]
pub trait NewsProvider: Clone + 'static {
    async fn headlines(&self) -> DataResult<NewsFeed>;
}

/// Log the underlying failure, surface only the card's fixed message.
/// Failures never escape an adapter as anything but that string.
fn flatten_error(name: &'static str, message: &'static str, err: DataError) -> DataError {
    log_debug!(LogComponent::Data(name), "provider failure: {err}");
    DataError::Source(message.to_string())
}

#[derive(Clone)]
pub struct CryptoAdapter<P: CryptoProvider> {
    provider: P,
}

impl<P: CryptoProvider> CryptoAdapter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: CryptoProvider> DataSource for CryptoAdapter<P> {
    type Output = Vec<CryptoAsset>;

    fn name(&self) -> &'static str {
        "crypto"
    }

    fn poll_interval(&self) -> Duration {
        CRYPTO_POLL_INTERVAL
    }

    async fn fetch(&self) -> DataResult<Self::Output> {
        self.provider
            .markets()
            .await
            .map_err(|err| flatten_error("crypto", CRYPTO_LOAD_ERROR, err))
    }
}

/// Weather reads the location signal on every fetch, so a geolocation
/// answer arriving between polls is picked up by the next one (or by the
/// refetch issued when the resolver settles).
#[derive(Clone)]
pub struct WeatherAdapter<P: WeatherProvider> {
    provider: P,
    location: RwSignal<LocationToken>,
}

impl<P: WeatherProvider> WeatherAdapter<P> {
    pub fn new(provider: P, location: RwSignal<LocationToken>) -> Self {
        Self { provider, location }
    }
}

impl<P: WeatherProvider> DataSource for WeatherAdapter<P> {
    type Output = WeatherSnapshot;

    fn name(&self) -> &'static str {
        "weather"
    }

    fn poll_interval(&self) -> Duration {
        WEATHER_POLL_INTERVAL
    }

    async fn fetch(&self) -> DataResult<Self::Output> {
        let location = self.location.get_untracked();
        self.provider
            .current(&location)
            .await
            .map_err(|err| flatten_error("weather", WEATHER_LOAD_ERROR, err))
    }
}

#[derive(Clone)]
pub struct DominanceAdapter<P: DominanceProvider> {
    provider: P,
}

impl<P: DominanceProvider> DominanceAdapter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: DominanceProvider> DataSource for DominanceAdapter<P> {
    type Output = BtcDominance;

    fn name(&self) -> &'static str {
        "btc-dominance"
    }

    fn poll_interval(&self) -> Duration {
        DOMINANCE_POLL_INTERVAL
    }

    async fn fetch(&self) -> DataResult<Self::Output> {
        self.provider
            .snapshot()
            .await
            .map_err(|err| flatten_error("btc-dominance", DOMINANCE_LOAD_ERROR, err))
    }
}

#[derive(Clone)]
pub struct NewsAdapter<P: NewsProvider> {
    provider: P,
}

impl<P: NewsProvider> NewsAdapter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: NewsProvider> DataSource for NewsAdapter<P> {
    type Output = NewsFeed;

    fn name(&self) -> &'static str {
        "news"
    }

    fn poll_interval(&self) -> Duration {
        NEWS_POLL_INTERVAL
    }

    async fn fetch(&self) -> DataResult<Self::Output> {
        self.provider
            .headlines()
            .await
            .map_err(|err| flatten_error("news", NEWS_LOAD_ERROR, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_reflect_source_volatility() {
        assert!(CRYPTO_POLL_INTERVAL < DOMINANCE_POLL_INTERVAL);
        assert_eq!(DOMINANCE_POLL_INTERVAL, NEWS_POLL_INTERVAL);
        assert!(NEWS_POLL_INTERVAL < WEATHER_POLL_INTERVAL);
        assert_eq!(CRYPTO_POLL_INTERVAL, Duration::from_secs(15));
    }
}
