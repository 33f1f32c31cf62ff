use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crypto_dashboard_wasm::application::polling::{DataSource, PollingController};
use crypto_dashboard_wasm::domain::errors::{DataError, DataResult};
use gloo_timers::future::sleep;
use leptos::SignalWithUntracked;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Succeeds on every attempt except the second one.
#[derive(Clone)]
struct FlakySource {
    attempts: Rc<Cell<u32>>,
}

impl DataSource for FlakySource {
    type Output = u32;

    fn name(&self) -> &'static str {
        "flaky"
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(60)
    }

    async fn fetch(&self) -> DataResult<u32> {
        let n = self.attempts.get() + 1;
        self.attempts.set(n);
        if n == 2 {
            Err(DataError::Source("Failed to load crypto data".to_string()))
        } else {
            Ok(n)
        }
    }
}

#[wasm_bindgen_test(async)]
async fn failure_keeps_stale_data_and_success_clears_the_error() {
    let controller = PollingController::new(FlakySource { attempts: Rc::new(Cell::new(0)) });
    controller.start();
    sleep(Duration::from_millis(10)).await;

    let state = controller.state();
    assert_eq!(state.with_untracked(|s| s.data), Some(1));
    assert!(state.with_untracked(|s| s.error.is_none()));
    assert!(!state.with_untracked(|s| s.loading), "loading settles after success");

    // second attempt fails: stale data survives, error is recorded
    controller.refetch();
    sleep(Duration::from_millis(10)).await;
    assert_eq!(state.with_untracked(|s| s.data), Some(1));
    assert_eq!(
        state.with_untracked(|s| s.error.clone()).as_deref(),
        Some("Failed to load crypto data")
    );
    assert!(!state.with_untracked(|s| s.loading), "loading settles after failure");

    // third attempt succeeds and clears the error
    controller.refetch();
    sleep(Duration::from_millis(10)).await;
    assert_eq!(state.with_untracked(|s| s.data), Some(3));
    assert!(state.with_untracked(|s| s.error.is_none()));

    controller.dispose();
}
