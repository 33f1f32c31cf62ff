use super::entities::{CryptoAsset, DominanceSample, DominanceSeries};
use super::value_objects::{Percentage, Timestamp};

/// Dominance values are drawn from [floor, floor + span).
pub const DOMINANCE_FLOOR: f64 = 45.0;
pub const DOMINANCE_SPAN: f64 = 10.0;

const HOUR_MS: u64 = 60 * 60 * 1000;

/// Draw one dominance percentage from the mock range. `rng` yields [0, 1).
pub fn random_dominance(rng: &mut impl FnMut() -> f64) -> Percentage {
    Percentage::new(DOMINANCE_FLOOR + rng() * DOMINANCE_SPAN)
}

/// Build the trailing 24-hour dominance series ending at `now`, one sample
/// per hour, oldest first, each value drawn independently. The caller
/// supplies time and randomness so this stays testable off-browser.
pub fn generate_dominance_series(now: Timestamp, mut rng: impl FnMut() -> f64) -> DominanceSeries {
    let start = now.value().saturating_sub((DominanceSeries::HOURLY_POINTS as u64 - 1) * HOUR_MS);
    let samples = (0..DominanceSeries::HOURLY_POINTS)
        .map(|i| DominanceSample {
            time: Timestamp::from_millis(start + i as u64 * HOUR_MS),
            value: random_dominance(&mut rng),
        })
        .collect();
    DominanceSeries::new(samples)
}

/// Presentation-layer ordering for the crypto card: most expensive first.
/// The stored adapter data keeps the source order.
pub fn sorted_by_price_desc(assets: &[CryptoAsset]) -> Vec<CryptoAsset> {
    let mut sorted = assets.to_vec();
    sorted.sort_by(|a, b| {
        b.current_price
            .partial_cmp(&a.current_price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn fixed_rng(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v.abs().fract()
        }
    }

    #[test]
    fn series_has_24_hourly_points() {
        let now = Timestamp::from_millis(1_700_000_000_000);
        let series = generate_dominance_series(now, fixed_rng(vec![0.5]));
        assert_eq!(series.len(), 24);
        assert!(series.is_chronological());
        assert_eq!(series.latest().unwrap().time, now);
        let first = series.samples()[0].time.value();
        assert_eq!(now.value() - first, 23 * HOUR_MS);
    }

    #[quickcheck]
    fn series_values_stay_in_range(seed: Vec<f64>, now_ms: u64) -> bool {
        let seed = if seed.iter().all(|v| v.is_finite()) && !seed.is_empty() {
            seed
        } else {
            vec![0.25]
        };
        let series = generate_dominance_series(Timestamp::from_millis(now_ms), fixed_rng(seed));
        series.len() == 24
            && series
                .samples()
                .iter()
                .all(|s| s.value.value() >= DOMINANCE_FLOOR && s.value.value() < DOMINANCE_FLOOR + DOMINANCE_SPAN)
    }

    #[test]
    fn price_sort_is_descending_and_non_destructive() {
        let mk = |id: &str, price: f64| CryptoAsset {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_string(),
            current_price: price,
            price_change_percentage_24h: Some(0.0),
            market_cap: 0.0,
            image: String::new(),
        };
        let original = vec![mk("ada", 0.5), mk("btc", 64000.0), mk("eth", 3100.0)];
        let sorted = sorted_by_price_desc(&original);
        assert_eq!(sorted[0].id, "btc");
        assert_eq!(sorted[2].id, "ada");
        // source order untouched
        assert_eq!(original[0].id, "ada");
    }
}
