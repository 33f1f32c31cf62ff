use crate::application::adapters::DominanceProvider;
use crate::domain::dashboard_data::entities::BtcDominance;
use crate::domain::dashboard_data::services::{generate_dominance_series, random_dominance};
use crate::domain::dashboard_data::Timestamp;
use crate::domain::errors::DataResult;

/// Randomized dominance stand-in. The history is regenerated wholesale on
/// every call; nothing accumulates between polls.
#[derive(Clone)]
pub struct MockDominanceSource;

impl DominanceProvider for MockDominanceSource {
    async fn snapshot(&self) -> DataResult<BtcDominance> {
        let now = Timestamp::from_millis(js_sys::Date::now() as u64);
        let mut rng = js_sys::Math::random;
        Ok(BtcDominance {
            dominance: random_dominance(&mut rng),
            history: generate_dominance_series(now, rng),
        })
    }
}
