use crate::application::adapters::CryptoProvider;
use crate::domain::dashboard_data::CryptoAsset;
use crate::domain::errors::DataResult;

/// Baseline rows for the mock market: (id, name, symbol, price, supply).
/// Same asset set the live client tracks.
const BASELINE: [(&str, &str, &str, f64, f64); 15] = [
    ("bitcoin", "Bitcoin", "btc", 64000.0, 19.7e6),
    ("ethereum", "Ethereum", "eth", 3100.0, 120.0e6),
    ("binancecoin", "BNB", "bnb", 580.0, 147.0e6),
    ("ripple", "XRP", "xrp", 0.52, 55.0e9),
    ("cardano", "Cardano", "ada", 0.45, 35.0e9),
    ("solana", "Solana", "sol", 145.0, 460.0e6),
    ("chainlink", "Chainlink", "link", 14.0, 600.0e6),
    ("polkadot", "Polkadot", "dot", 6.8, 1.4e9),
    ("dogecoin", "Dogecoin", "doge", 0.12, 144.0e9),
    ("avalanche-2", "Avalanche", "avax", 35.0, 395.0e6),
    ("shiba-inu", "Shiba Inu", "shib", 0.000024, 589.0e12),
    ("polygon", "Polygon", "matic", 0.71, 9.9e9),
    ("uniswap", "Uniswap", "uni", 7.6, 600.0e6),
    ("litecoin", "Litecoin", "ltc", 84.0, 74.0e6),
    ("cosmos", "Cosmos", "atom", 8.2, 390.0e6),
];

/// Jitter each baseline price by up to ±2% and draw a 24h change in
/// [-10, 10). `rng` yields [0, 1).
pub fn generate_market(mut rng: impl FnMut() -> f64) -> Vec<CryptoAsset> {
    BASELINE
        .iter()
        .map(|(id, name, symbol, base_price, supply)| {
            let price = base_price * (0.98 + rng() * 0.04);
            CryptoAsset {
                id: id.to_string(),
                name: name.to_string(),
                symbol: symbol.to_string(),
                current_price: price,
                price_change_percentage_24h: Some(-10.0 + rng() * 20.0),
                market_cap: price * supply,
                image: format!("https://assets.coingecko.com/coins/images/{id}/large.png"),
            }
        })
        .collect()
}

/// Randomized market stand-in, same shape and asset set as the live
/// CoinGecko client.
#[derive(Clone)]
pub struct MockCryptoSource;

impl CryptoProvider for MockCryptoSource {
    async fn markets(&self) -> DataResult<Vec<CryptoAsset>> {
        Ok(generate_market(js_sys::Math::random))
    }
}
