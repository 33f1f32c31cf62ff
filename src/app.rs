use leptos::*;

use crate::application::adapters::{
    CryptoAdapter, DominanceAdapter, NewsAdapter, WeatherAdapter,
};
use crate::application::layout_store::{GridModeController, LayoutStore};
use crate::application::polling::{use_polling, PollHandle};
use crate::config::{DashboardConfig, DataMode};
use crate::domain::dashboard_data::services::sorted_by_price_desc;
use crate::domain::dashboard_data::{
    BtcDominance, CryptoAsset, DominanceSeries, LocationToken, NewsFeed, WeatherSnapshot,
};
use crate::domain::layout::{Breakpoint, CardId, ROW_HEIGHT_PX};
use crate::domain::logging::LogComponent;
use crate::infrastructure::geolocation::resolve_location;
use crate::infrastructure::http::CoinGeckoClient;
use crate::infrastructure::mock::{
    MockCryptoSource, MockDominanceSource, MockNewsSource, MockWeatherSource,
};
use crate::log_info;

/// Dashboard root: styles plus the grid.
#[component]
pub fn App(#[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    view! {
        <style>
            {r#"
            .dashboard {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .dashboard-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 16px 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .dashboard-header h1 {
                margin: 0;
                font-size: 24px;
            }

            .dashboard-header p {
                margin: 4px 0 0;
                font-size: 13px;
                color: #c8d2e0;
            }

            .header-controls {
                display: flex;
                align-items: center;
                gap: 8px;
            }

            .badge {
                padding: 4px 10px;
                border-radius: 10px;
                font-size: 12px;
                background: #4a5d73;
            }

            .badge.badge-edit { background: #f39c12; }
            .badge.badge-stale { background: #c0392b; margin-left: 8px; }

            .header-btn, .refresh-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 6px 12px;
                border-radius: 6px;
                cursor: pointer;
                font-size: 13px;
            }

            .header-btn:hover, .refresh-btn:hover { background: #5a6d83; }
            .refresh-btn { padding: 2px 8px; margin-left: auto; }

            .grid {
                display: grid;
                grid-template-columns: repeat(12, 1fr);
                gap: 16px;
            }

            .grid.edit-mode .card { outline: 2px dashed #f39c12; }

            .card {
                background: rgba(0, 0, 0, 0.35);
                border: 1px solid #4a5d73;
                border-radius: 10px;
                padding: 14px;
                overflow-y: auto;
                height: 100%;
            }

            .card-header {
                display: flex;
                align-items: center;
                margin-bottom: 10px;
            }

            .card-header h2 {
                margin: 0;
                font-size: 16px;
                color: #72c685;
            }

            .skeleton {
                color: #a0a0a0;
                font-size: 13px;
                animation: pulse 1.2s ease-in-out infinite;
            }

            @keyframes pulse { 50% { opacity: 0.4; } }

            .error-panel {
                background: rgba(192, 57, 43, 0.25);
                border: 1px solid #c0392b;
                border-radius: 6px;
                padding: 10px;
                font-size: 13px;
            }

            .asset-row {
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 4px 0;
                font-size: 13px;
                border-bottom: 1px solid rgba(255, 255, 255, 0.06);
            }

            .asset-row img { width: 20px; height: 20px; }
            .asset-symbol { color: #a0a0a0; text-transform: uppercase; font-size: 11px; }
            .asset-price { margin-left: auto; font-family: 'Courier New', monospace; }
            .change-up { color: #72c685; }
            .change-down { color: #e74c3c; }

            .dominance-value {
                font-size: 32px;
                font-weight: 700;
                color: #f39c12;
                text-align: center;
                margin: 8px 0;
            }

            .sparkline { width: 100%; height: 80px; }

            .news-item { padding: 6px 0; border-bottom: 1px solid rgba(255,255,255,0.06); }
            .news-item a { color: #e0e0e0; text-decoration: none; font-size: 13px; }
            .news-item a:hover { text-decoration: underline; }
            .news-meta { font-size: 11px; color: #a0a0a0; }

            .weather-temp { font-size: 30px; font-weight: 700; }
            .weather-detail { font-size: 13px; color: #c8d2e0; margin-top: 6px; }

            .analytics-grid {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 10px;
                text-align: center;
            }

            .analytics-cell {
                background: rgba(255, 255, 255, 0.08);
                border-radius: 8px;
                padding: 10px;
            }

            .analytics-cell .value { font-size: 20px; font-weight: 700; color: #72c685; }
            .analytics-cell .label { font-size: 11px; color: #a0a0a0; }

            .edit-hint {
                margin-top: 16px;
                border: 1px solid #f39c12;
                background: rgba(243, 156, 18, 0.12);
                border-radius: 10px;
                padding: 12px;
                font-size: 13px;
            }

            .dashboard footer {
                margin-top: 24px;
                text-align: center;
                font-size: 12px;
                color: #a0a0a0;
            }
            "#}
        </style>
        <div class="dashboard">
            <DashboardGrid config/>
        </div>
    }
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0)
}

/// The rearrangeable card grid: owns the layout store, the mode
/// controller, and one polling handle per card. Every controller's
/// lifetime is tied to this component's scope, not to any global.
#[component]
fn DashboardGrid(config: DashboardConfig) -> impl IntoView {
    let mode = GridModeController::new();
    let store = LayoutStore::new(mode);

    let location = create_rw_signal(LocationToken::fallback());

    let crypto = match config.crypto_mode {
        DataMode::Live => use_polling(CryptoAdapter::new(CoinGeckoClient::new(&config))),
        DataMode::Mock => use_polling(CryptoAdapter::new(MockCryptoSource)),
    };
    let weather = use_polling(WeatherAdapter::new(MockWeatherSource, location));
    let dominance = use_polling(DominanceAdapter::new(MockDominanceSource));
    let news = use_polling(NewsAdapter::new(MockNewsSource));

    // One-shot location lookup; the weather card refreshes as soon as an
    // answer lands instead of waiting out its 10-minute interval.
    {
        let weather = weather.clone();
        spawn_local(async move {
            let token = resolve_location().await;
            location.set(token);
            weather.refetch();
        });
    }

    let breakpoint = create_rw_signal(Breakpoint::for_width(viewport_width()));
    window_event_listener(ev::resize, move |_| {
        breakpoint.set(Breakpoint::for_width(viewport_width()));
    });

    log_info!(LogComponent::Ui("DashboardGrid"), "dashboard mounted");

    let layouts = store.layouts();
    let place = move |id: CardId| {
        layouts.with(|set| {
            set.entry(breakpoint.get(), id)
                .map(|e| {
                    format!(
                        "grid-column: {} / span {}; grid-row: {} / span {};",
                        e.x + 1,
                        e.w,
                        e.y + 1,
                        e.h
                    )
                })
                .unwrap_or_default()
        })
    };

    let refresh_all = {
        let crypto = crypto.clone();
        let weather = weather.clone();
        let dominance = dominance.clone();
        let news = news.clone();
        move |_| {
            crypto.refetch();
            weather.refetch();
            dominance.refetch();
            news.refetch();
        }
    };

    view! {
        <div class="dashboard-header">
            <div>
                <h1>"CryptoVision"</h1>
                <p>"Live crypto prices, BTC dominance, weather and headlines in one grid"</p>
            </div>
            <div class="header-controls">
                <span class="badge" class:badge-edit=move || mode.is_edit()>
                    {move || if mode.is_edit() { "Edit mode" } else { "View mode" }}
                </span>
                <button class="header-btn" on:click=move |_| mode.toggle()>
                    {move || if mode.is_edit() { "Finish" } else { "Edit layout" }}
                </button>
                <button class="header-btn" on:click=move |_| store.reset()>"Reset"</button>
                <button class="header-btn" on:click=refresh_all>"Refresh"</button>
            </div>
        </div>

        <div
            class="grid"
            class:edit-mode=move || mode.is_edit()
            style=format!("grid-auto-rows: {}px;", ROW_HEIGHT_PX)
        >
            <div style=move || place(CardId::Crypto)>
                <CryptoCard handle=crypto/>
            </div>
            <div style=move || place(CardId::BtcDominance)>
                <DominanceCard handle=dominance/>
            </div>
            <div style=move || place(CardId::News)>
                <NewsCard handle=news/>
            </div>
            <div style=move || place(CardId::Weather)>
                <WeatherCard handle=weather/>
            </div>
            <div style=move || place(CardId::Analytics)>
                <AnalyticsCard/>
            </div>
        </div>

        <Show when=move || mode.is_edit()>
            <div class="edit-hint">
                "Edit mode is active: drag cards to rearrange, resize from the corners, "
                "then press Finish. Reset restores the default arrangement."
            </div>
        </Show>

        <footer>
            <p>"Data refreshes automatically; each card can also be refreshed by hand."</p>
        </footer>
    }
}

/// Badge shown next to a card title when stale data is on screen together
/// with a fetch error.
fn stale_badge<T: Clone + 'static>(handle: &PollHandle<T>) -> impl Fn() -> Option<View> + use<T> {
    let state = handle.state;
    move || {
        state.with(|s| {
            (s.has_data() && s.error.is_some())
                .then(|| view! { <span class="badge badge-stale">"stale"</span> }.into_view())
        })
    }
}

#[component]
fn CryptoCard(handle: PollHandle<Vec<CryptoAsset>>) -> impl IntoView {
    let state = handle.state;
    let refetch = handle.clone();
    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Crypto Prices"</h2>
                {stale_badge(&handle)}
                <button class="refresh-btn" on:click=move |_| refetch.refetch()>"↻"</button>
            </div>
            {move || state.with(|s| match (&s.data, &s.error) {
                (Some(assets), _) => {
                    // Sort is presentational only; the stored data keeps
                    // the source order.
                    sorted_by_price_desc(assets)
                        .into_iter()
                        .map(|asset| {
                            let change = asset.change_24h();
                            view! {
                                <div class="asset-row">
                                    <img src=asset.image.clone() alt=asset.name.clone()/>
                                    <span>{asset.name.clone()}</span>
                                    <span class="asset-symbol">{asset.symbol.clone()}</span>
                                    <span class="asset-price">
                                        {format!("${:.2}", asset.current_price)}
                                        <span class=if asset.is_up() { "change-up" } else { "change-down" }>
                                            {format!(" {:+.2}%", change)}
                                        </span>
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_view()
                }
                (None, Some(err)) => view! { <div class="error-panel">{err.clone()}</div> }.into_view(),
                (None, None) => view! { <div class="skeleton">"Loading prices…"</div> }.into_view(),
            })}
        </div>
    }
}

/// Polyline points for the dominance sparkline, mapped into a 100x100
/// viewBox with the mock range [45, 55) as the vertical extent.
fn sparkline_points(series: &DominanceSeries) -> String {
    let n = series.len();
    if n < 2 {
        return String::new();
    }
    series
        .samples()
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let x = i as f64 / (n - 1) as f64 * 100.0;
            let y = 100.0 - ((sample.value.value() - 45.0) / 10.0 * 100.0).clamp(0.0, 100.0);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn DominanceCard(handle: PollHandle<BtcDominance>) -> impl IntoView {
    let state = handle.state;
    let refetch = handle.clone();
    view! {
        <div class="card">
            <div class="card-header">
                <h2>"BTC Dominance"</h2>
                {stale_badge(&handle)}
                <button class="refresh-btn" on:click=move |_| refetch.refetch()>"↻"</button>
            </div>
            {move || state.with(|s| match (&s.data, &s.error) {
                (Some(snapshot), _) => view! {
                    <div class="dominance-value">
                        {format!("{:.2}%", snapshot.dominance.value())}
                    </div>
                    <svg class="sparkline" viewBox="0 0 100 100" preserveAspectRatio="none">
                        <polyline
                            points=sparkline_points(&snapshot.history)
                            fill="none"
                            stroke="#f39c12"
                            stroke-width="2"
                        />
                    </svg>
                    <div class="news-meta">"Trailing 24h, hourly"</div>
                }.into_view(),
                (None, Some(err)) => view! { <div class="error-panel">{err.clone()}</div> }.into_view(),
                (None, None) => view! { <div class="skeleton">"Loading dominance…"</div> }.into_view(),
            })}
        </div>
    }
}

#[component]
fn NewsCard(handle: PollHandle<NewsFeed>) -> impl IntoView {
    let state = handle.state;
    let refetch = handle.clone();
    view! {
        <div class="card">
            <div class="card-header">
                <h2>"News"</h2>
                {stale_badge(&handle)}
                <button class="refresh-btn" on:click=move |_| refetch.refetch()>"↻"</button>
            </div>
            {move || state.with(|s| match (&s.data, &s.error) {
                (Some(items), _) => items
                    .iter()
                    .map(|item| view! {
                        <div class="news-item">
                            <a href=item.url.clone() target="_blank" rel="noreferrer">
                                {item.title.clone()}
                            </a>
                            <div class="news-meta">
                                {item.source.name.clone()} " · " {item.description.clone()}
                            </div>
                        </div>
                    })
                    .collect_view()
                    .into_view(),
                (None, Some(err)) => view! { <div class="error-panel">{err.clone()}</div> }.into_view(),
                (None, None) => view! { <div class="skeleton">"Loading headlines…"</div> }.into_view(),
            })}
        </div>
    }
}

#[component]
fn WeatherCard(handle: PollHandle<WeatherSnapshot>) -> impl IntoView {
    let state = handle.state;
    let refetch = handle.clone();
    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Weather"</h2>
                {stale_badge(&handle)}
                <button class="refresh-btn" on:click=move |_| refetch.refetch()>"↻"</button>
            </div>
            {move || state.with(|s| match (&s.data, &s.error) {
                (Some(snapshot), _) => view! {
                    <div>
                        <div class="weather-temp">
                            {format!("{:.0}°C", snapshot.current.temp_c)}
                        </div>
                        <div class="weather-detail">
                            {snapshot.location.name.clone()} ", " {snapshot.location.country.clone()}
                        </div>
                        <div class="weather-detail">
                            <img src=format!("https:{}", snapshot.current.condition.icon)
                                alt=snapshot.current.condition.text.clone()/>
                            {snapshot.current.condition.text.clone()}
                        </div>
                        <div class="weather-detail">
                            {format!(
                                "Humidity {}% · Wind {:.0} km/h",
                                snapshot.current.humidity, snapshot.current.wind_kph
                            )}
                        </div>
                    </div>
                }.into_view(),
                (None, Some(err)) => view! { <div class="error-panel">{err.clone()}</div> }.into_view(),
                (None, None) => view! { <div class="skeleton">"Loading weather…"</div> }.into_view(),
            })}
        </div>
    }
}

/// Static demo card; it exists so the grid exercises all five layout ids.
#[component]
fn AnalyticsCard() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Analytics"</h2>
                <span class="badge">"Demo"</span>
            </div>
            <div class="analytics-grid">
                <div class="analytics-cell">
                    <div class="value">"1.2K"</div>
                    <div class="label">"Views"</div>
                </div>
                <div class="analytics-cell">
                    <div class="value">"+15%"</div>
                    <div class="label">"Growth"</div>
                </div>
                <div class="analytics-cell">
                    <div class="value">"24h"</div>
                    <div class="label">"Uptime"</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::sparkline_points;
    use crate::domain::dashboard_data::{DominanceSample, DominanceSeries, Percentage, Timestamp};

    #[test]
    fn sparkline_spans_the_viewbox() {
        let samples = (0..24)
            .map(|i| DominanceSample {
                time: Timestamp::from_millis(i),
                value: Percentage::new(45.0 + (i % 10) as f64),
            })
            .collect();
        let points = sparkline_points(&DominanceSeries::new(samples));
        assert!(points.starts_with("0.0,"));
        // last sample: i=23, value 48.0 -> y = 100 - 30 = 70
        assert!(points.ends_with("100.0,70.0"));
        assert_eq!(points.split(' ').count(), 24);
    }

    #[test]
    fn sparkline_needs_two_points() {
        let one = DominanceSeries::new(vec![DominanceSample {
            time: Timestamp::from_millis(0),
            value: Percentage::new(50.0),
        }]);
        assert!(sparkline_points(&one).is_empty());
    }
}
