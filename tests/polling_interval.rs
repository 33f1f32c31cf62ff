use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crypto_dashboard_wasm::application::polling::{DataSource, PollingController};
use crypto_dashboard_wasm::domain::errors::DataResult;
use gloo_timers::future::sleep;
use leptos::SignalWithUntracked;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone)]
struct CountingSource {
    calls: Rc<Cell<usize>>,
}

impl DataSource for CountingSource {
    type Output = usize;

    fn name(&self) -> &'static str {
        "counting"
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_millis(20)
    }

    async fn fetch(&self) -> DataResult<usize> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.calls.get())
    }
}

#[wasm_bindgen_test(async)]
async fn one_tick_means_one_extra_fetch() {
    let calls = Rc::new(Cell::new(0));
    let controller = PollingController::new(CountingSource { calls: Rc::clone(&calls) });

    controller.start();
    sleep(Duration::from_millis(5)).await;
    assert_eq!(calls.get(), 1, "start issues exactly one immediate fetch");

    // one interval period elapses -> exactly one more fetch
    sleep(Duration::from_millis(25)).await;
    assert_eq!(calls.get(), 2);
    assert_eq!(controller.state().with_untracked(|s| s.data), Some(2));

    controller.dispose();
    sleep(Duration::from_millis(50)).await;
    assert_eq!(calls.get(), 2, "no fetches after dispose");
}

#[wasm_bindgen_test(async)]
async fn start_is_idempotent_while_armed() {
    let calls = Rc::new(Cell::new(0));
    let controller = PollingController::new(CountingSource { calls: Rc::clone(&calls) });

    controller.start();
    controller.start();
    sleep(Duration::from_millis(5)).await;
    assert_eq!(calls.get(), 1, "second start must not double-fetch or double-arm");

    controller.dispose();
}
