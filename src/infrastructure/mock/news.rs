use crate::application::adapters::NewsProvider;
use crate::domain::dashboard_data::{NewsFeed, NewsItem, NewsSource};
use crate::domain::errors::DataResult;
use wasm_bindgen::JsValue;

const MINUTE_MS: u64 = 60 * 1000;

/// Editorial fixtures: (title, description, url, image, age in minutes,
/// source name). Order is the feed order.
const EDITORIAL: [(&str, &str, &str, &str, u64, &str); 5] = [
    (
        "Bitcoin ETFs see $2.4B inflow in single day",
        "Institutional adoption accelerates as major investment firms pour billions into Bitcoin ETFs following regulatory clarity.",
        "https://www.coindesk.com/",
        "https://images.unsplash.com/photo-1621761191319-c6fb62004040?w=400&h=200&fit=crop",
        0,
        "@WatcherGuru",
    ),
    (
        "Ethereum staking rewards hit 5.2% as network upgrades boost efficiency",
        "Latest protocol improvements drive validator returns to multi-year highs, attracting institutional stakers.",
        "https://www.bloomberg.com/crypto",
        "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=400&h=200&fit=crop",
        30,
        "Bloomberg Crypto",
    ),
    (
        "XRP price surges 15% following Ripple partnership with major banks",
        "Cross-border payment adoption accelerates as three major European banks integrate RippleNet infrastructure.",
        "https://www.coindesk.com/",
        "https://images.unsplash.com/photo-1518544801976-3e159e50e5bb?w=400&h=200&fit=crop",
        60,
        "CoinDesk",
    ),
    (
        "Solana DeFi TVL breaks $4B milestone amid ecosystem growth",
        "New DeFi protocols and institutional adoption drive Solana Total Value Locked to all-time highs.",
        "https://www.bloomberg.com/crypto",
        "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=400&h=200&fit=crop",
        90,
        "@WatcherGuru",
    ),
    (
        "Chainlink CCIP enables $500M in cross-chain transactions",
        "Cross-Chain Interoperability Protocol processes record volume as major DeFi platforms integrate Chainlink infrastructure.",
        "https://www.coindesk.com/",
        "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=400&h=200&fit=crop",
        120,
        "CoinDesk",
    ),
];

/// Build the fixed feed with publication times counted back from `now_ms`.
/// The timestamp formatter is injected so this stays testable off-browser.
pub fn editorial_feed(now_ms: u64, format_iso: impl Fn(u64) -> String) -> NewsFeed {
    EDITORIAL
        .iter()
        .map(|(title, description, url, image, age_minutes, source)| NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            url_to_image: image.to_string(),
            published_at: format_iso(now_ms.saturating_sub(age_minutes * MINUTE_MS)),
            source: NewsSource { name: source.to_string() },
        })
        .collect()
}

/// Fixed editorial feed; a real deployment swaps in a live news API behind
/// the same provider trait.
#[derive(Clone)]
pub struct MockNewsSource;

impl NewsProvider for MockNewsSource {
    async fn headlines(&self) -> DataResult<NewsFeed> {
        let now_ms = js_sys::Date::now() as u64;
        Ok(editorial_feed(now_ms, |ms| {
            js_sys::Date::new(&JsValue::from_f64(ms as f64))
                .to_iso_string()
                .into()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_keeps_editorial_order() {
        let feed = editorial_feed(10_000_000, |ms| ms.to_string());
        assert_eq!(feed.len(), 5);
        assert!(feed[0].title.starts_with("Bitcoin ETFs"));
        assert!(feed[4].title.starts_with("Chainlink CCIP"));
        assert_eq!(feed[1].source.name, "Bloomberg Crypto");
    }

    #[test]
    fn publication_times_count_back_from_now() {
        let now = 2 * 60 * 60 * 1000 + 5;
        let feed = editorial_feed(now, |ms| ms.to_string());
        assert_eq!(feed[0].published_at, now.to_string());
        assert_eq!(feed[1].published_at, (now - 30 * MINUTE_MS).to_string());
        assert_eq!(feed[4].published_at, "5".to_string());
    }
}
