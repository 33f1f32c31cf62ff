use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError};

use crate::domain::dashboard_data::LocationToken;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info};

/// One-shot best-effort browser location lookup. Denial, failure, or a
/// missing geolocation API all resolve to the fixed fallback place. No
/// application-level timeout: if the platform never answers, this future
/// never resolves and the caller keeps its last-set default.
pub async fn resolve_location() -> LocationToken {
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        log_debug!(LogComponent::Geo("resolver"), "geolocation API unavailable");
        return LocationToken::fallback();
    };

    let (tx, rx) = oneshot::channel::<LocationToken>();
    // Both callbacks race for the same sender; the browser fires one of
    // them at most once.
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
            let coords = position.coords();
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(LocationToken::Coordinates {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                });
            }
        })
    };
    let on_error = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(GeolocationPositionError)>::new(move |_err: GeolocationPositionError| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(LocationToken::fallback());
            }
        })
    };

    let issued = geolocation.get_current_position_with_error_callback(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    );
    if issued.is_err() {
        return LocationToken::fallback();
    }

    // The callbacks must outlive this function; the platform invokes them
    // exactly once, so the leak is bounded.
    on_success.forget();
    on_error.forget();

    let token = rx.await.unwrap_or_else(|_| LocationToken::fallback());
    log_info!(
        LogComponent::Geo("resolver"),
        "location resolved to {}",
        token.display_name()
    );
    token
}
