use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use leptos::{create_rw_signal, on_cleanup, RwSignal, SignalUpdate};
use wasm_bindgen_futures::spawn_local;

use crate::domain::errors::DataResult;
use crate::domain::fetch::FetchState;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

/// A concrete data source binding: fetch behavior, polling period, and
/// result shape. Adapters implement this; the controller never knows
/// whether a mock generator or a live client sits behind it.
#[allow(async_fn_in_trait)]
pub trait DataSource: Clone + 'static {
    type Output: Clone + 'static;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Fixed refresh period; also the only retry mechanism.
    fn poll_interval(&self) -> Duration;

    async fn fetch(&self) -> DataResult<Self::Output>;
}

/// Drives one data source: an immediate fetch on `start`, refreshes on a
/// fixed interval, manual `refetch`, and an idempotent `dispose` that
/// cancels the timer and discards any resolution still in flight.
pub struct PollingController<S: DataSource> {
    source: S,
    state: RwSignal<FetchState<S::Output>>,
    alive: Rc<Cell<bool>>,
    timer: Rc<RefCell<Option<Interval>>>,
}

/// Issue one fetch against `source` and settle `state` when it resolves.
/// The `alive` flag is checked again after the await so nothing is
/// written once the owning controller was disposed.
fn run_fetch<S: DataSource>(
    source: S,
    state: RwSignal<FetchState<S::Output>>,
    alive: Rc<Cell<bool>>,
) {
    if !alive.get() {
        return;
    }
    state.update(|s| s.begin());
    spawn_local(async move {
        let result = source.fetch().await;
        if !alive.get() {
            log_debug!(
                LogComponent::Data(source.name()),
                "dropping fetch result that resolved after dispose"
            );
            return;
        }
        match result {
            Ok(value) => state.update(|s| s.succeed(value)),
            Err(err) => {
                log_warn!(LogComponent::Data(source.name()), "fetch failed: {err}");
                state.update(|s| s.fail(err.to_string()));
            }
        }
    });
}

impl<S: DataSource> PollingController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: create_rw_signal(FetchState::idle()),
            alive: Rc::new(Cell::new(true)),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Signal carrying `{data, loading, error}` for the rendering layer.
    pub fn state(&self) -> RwSignal<FetchState<S::Output>> {
        self.state
    }

    /// Trigger the initial fetch and arm the recurring timer. A second
    /// call while the timer is live is a no-op: at most one timer per
    /// controller.
    pub fn start(&self) {
        if !self.alive.get() || self.timer.borrow().is_some() {
            return;
        }
        run_fetch(self.source.clone(), self.state, Rc::clone(&self.alive));

        let millis = self.source.poll_interval().as_millis() as u32;
        let source = self.source.clone();
        let state = self.state;
        let alive = Rc::clone(&self.alive);
        let interval = Interval::new(millis, move || {
            run_fetch(source.clone(), state, Rc::clone(&alive));
        });
        *self.timer.borrow_mut() = Some(interval);
        log_debug!(
            LogComponent::Data(self.source.name()),
            "polling armed every {millis}ms"
        );
    }

    /// Manual refresh outside the timer schedule; the timer phase is not
    /// reset.
    pub fn refetch(&self) {
        run_fetch(self.source.clone(), self.state, Rc::clone(&self.alive));
    }

    /// Cancel the timer and mark the controller dead. Safe to call twice;
    /// a fetch already in flight resolves into the void.
    pub fn dispose(&self) {
        self.alive.set(false);
        if self.timer.borrow_mut().take().is_some() {
            log_debug!(LogComponent::Data(self.source.name()), "polling disposed");
        }
    }
}

/// What a card receives: the fetch-state signal plus a type-erased manual
/// refresh. Cloneable so cards can hand the refetch to button handlers.
#[derive(Clone)]
pub struct PollHandle<T: Clone + 'static> {
    pub state: RwSignal<FetchState<T>>,
    refetch: Rc<dyn Fn()>,
}

impl<T: Clone + 'static> PollHandle<T> {
    pub fn refetch(&self) {
        (self.refetch)()
    }
}

/// Mount a polling controller owned by the current reactive scope: starts
/// immediately and is disposed when the scope is cleaned up, so unmounting
/// a card cannot leave an orphaned timer behind.
pub fn use_polling<S: DataSource>(source: S) -> PollHandle<S::Output> {
    let controller = Rc::new(PollingController::new(source));
    controller.start();

    let state = controller.state();
    let refetch: Rc<dyn Fn()> = {
        let controller = Rc::clone(&controller);
        Rc::new(move || controller.refetch())
    };
    on_cleanup(move || controller.dispose());

    PollHandle { state, refetch }
}
