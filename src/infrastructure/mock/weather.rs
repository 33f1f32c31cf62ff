use crate::application::adapters::WeatherProvider;
use crate::domain::dashboard_data::{
    CurrentConditions, Location, LocationToken, WeatherCondition, WeatherSnapshot,
};
use crate::domain::errors::DataResult;

const CONDITION_TEXT: &str = "Partly cloudy";
const CONDITION_ICON: &str = "//cdn.weatherapi.com/weather/64x64/day/116.png";

/// Randomized current conditions: 20-35 °C, 40-80 % humidity,
/// 5-25 km/h wind. `rng` yields [0, 1); values are floored to whole
/// numbers so readings look like real station output.
pub fn generate_snapshot(location: &LocationToken, mut rng: impl FnMut() -> f64) -> WeatherSnapshot {
    WeatherSnapshot {
        location: Location {
            name: location.display_name(),
            country: "Brazil".to_string(),
        },
        current: CurrentConditions {
            temp_c: (rng() * 15.0).floor() + 20.0,
            condition: WeatherCondition {
                text: CONDITION_TEXT.to_string(),
                icon: CONDITION_ICON.to_string(),
            },
            humidity: (rng() * 40.0).floor() as u32 + 40,
            wind_kph: (rng() * 20.0).floor() + 5.0,
        },
    }
}

/// Mock weather backend; a live API client replaces this behind the same
/// provider trait.
#[derive(Clone)]
pub struct MockWeatherSource;

impl WeatherProvider for MockWeatherSource {
    async fn current(&self, location: &LocationToken) -> DataResult<WeatherSnapshot> {
        Ok(generate_snapshot(location, js_sys::Math::random))
    }
}
