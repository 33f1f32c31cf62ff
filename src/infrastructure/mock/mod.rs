pub mod crypto;
pub mod dominance;
pub mod news;
pub mod weather;

pub use crypto::MockCryptoSource;
pub use dominance::MockDominanceSource;
pub use news::MockNewsSource;
pub use weather::MockWeatherSource;
