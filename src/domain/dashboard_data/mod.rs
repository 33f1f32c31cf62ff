pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{
    BtcDominance, CryptoAsset, CurrentConditions, DominanceSample, DominanceSeries, Location,
    NewsFeed, NewsItem, NewsSource, WeatherCondition, WeatherSnapshot,
};
pub use value_objects::{LocationToken, Percentage, Timestamp, FALLBACK_LOCATION};
