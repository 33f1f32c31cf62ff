/// Reactive fetch state for one data source.
///
/// The triple every card consumes: current data (if any), whether a fetch
/// is in flight, and the last failure message. Transitions are
/// stale-while-revalidate: starting a new fetch clears nothing, and a
/// failure keeps whatever data the previous success produced.
///
/// Only the owning `PollingController` mutates this; cards read it through
/// a signal.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> FetchState<T> {
    /// State before the first fetch is issued.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A fetch was issued. Prior data and error stay visible until the
    /// fetch settles.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// The fetch settled successfully.
    pub fn succeed(&mut self, value: T) {
        self.data = Some(value);
        self.error = None;
        self.loading = false;
    }

    /// The fetch settled with a failure. Data is left untouched so the UI
    /// may keep showing the last good value.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// True once at least one fetch has succeeded.
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}
