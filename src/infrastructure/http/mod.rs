pub mod coingecko_client;

pub use coingecko_client::CoinGeckoClient;
