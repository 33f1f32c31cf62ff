use std::time::Duration;

use crypto_dashboard_wasm::application::adapters::{WeatherAdapter, WeatherProvider};
use crypto_dashboard_wasm::application::polling::DataSource;
use crypto_dashboard_wasm::domain::dashboard_data::LocationToken;
use crypto_dashboard_wasm::infrastructure::mock::MockWeatherSource;
use leptos::create_rw_signal;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn denied_geolocation_means_sao_paulo() {
    // the resolver's denial path yields the fallback token; the adapter
    // must surface its literal name
    let location = create_rw_signal(LocationToken::fallback());
    let adapter = WeatherAdapter::new(MockWeatherSource, location);

    let snapshot = adapter.fetch().await.unwrap();
    assert_eq!(snapshot.location.name, "São Paulo");
    assert_eq!(adapter.poll_interval(), Duration::from_secs(600));
}

#[wasm_bindgen_test(async)]
async fn coordinates_render_as_your_location() {
    let token = LocationToken::Coordinates { latitude: -23.5505, longitude: -46.6333 };
    let snapshot = MockWeatherSource.current(&token).await.unwrap();
    assert_eq!(snapshot.location.name, "Your location");
    assert!((20.0..=35.0).contains(&snapshot.current.temp_c));
    assert!((40..=80).contains(&snapshot.current.humidity));
    assert!((5.0..=25.0).contains(&snapshot.current.wind_kph));
}
