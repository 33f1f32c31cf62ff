use leptos::{create_rw_signal, RwSignal, SignalGet, SignalSet, SignalUpdate};

use crate::domain::layout::{default_layouts, GridMode, LayoutSet};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Flips the grid between view and edit mode. The mode gates drag/resize
/// affordance on the rendering collaborator only; it never touches the
/// layout store itself.
#[derive(Clone, Copy)]
pub struct GridModeController {
    mode: RwSignal<GridMode>,
}

impl GridModeController {
    pub fn new() -> Self {
        Self { mode: create_rw_signal(GridMode::View) }
    }

    pub fn signal(&self) -> RwSignal<GridMode> {
        self.mode
    }

    pub fn current(&self) -> GridMode {
        self.mode.get()
    }

    pub fn is_edit(&self) -> bool {
        self.mode.get().is_edit()
    }

    pub fn toggle(&self) {
        self.mode.update(|m| *m = m.toggled());
    }

    pub fn set_view(&self) {
        self.mode.set(GridMode::View);
    }
}

impl Default for GridModeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the per-breakpoint layout arrays shared by every card. Writes go
/// through exactly two operations: wholesale replacement from a
/// layout-change event, and reset to the hardcoded default.
#[derive(Clone, Copy)]
pub struct LayoutStore {
    layouts: RwSignal<LayoutSet>,
    mode: GridModeController,
}

impl LayoutStore {
    pub fn new(mode: GridModeController) -> Self {
        Self { layouts: create_rw_signal(default_layouts()), mode }
    }

    pub fn layouts(&self) -> RwSignal<LayoutSet> {
        self.layouts
    }

    pub fn mode(&self) -> GridModeController {
        self.mode
    }

    /// Replace the whole set; last event wins, no merging. The store
    /// trusts the caller: the mode gates interactivity in the UI, not this
    /// write path, so an event arriving in view mode is still applied.
    pub fn on_layout_change(&self, next: LayoutSet) {
        if !self.mode.is_edit() {
            log_debug!(
                LogComponent::Grid("store"),
                "layout change applied while in view mode"
            );
        }
        self.layouts.set(next);
    }

    /// Back to the hardcoded default, and edit mode is closed.
    pub fn reset(&self) {
        self.layouts.set(default_layouts());
        self.mode.set_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::{Breakpoint, CardId};
    use leptos::{create_runtime, SignalGetUntracked};

    fn moved_set() -> LayoutSet {
        let mut set = default_layouts();
        set.lg[0].x = 4;
        set.lg[0].y = 2;
        set
    }

    #[test]
    fn reset_restores_the_exact_default() {
        let runtime = create_runtime();
        let store = LayoutStore::new(GridModeController::new());
        store.mode().toggle();
        store.on_layout_change(moved_set());
        assert_ne!(store.layouts().get_untracked(), default_layouts());

        store.reset();
        assert_eq!(store.layouts().get_untracked(), default_layouts());
        assert_eq!(store.mode().current(), GridMode::View);
        runtime.dispose();
    }

    #[test]
    fn layout_change_is_idempotent() {
        let runtime = create_runtime();
        let store = LayoutStore::new(GridModeController::new());
        let next = moved_set();
        store.on_layout_change(next.clone());
        let once = store.layouts().get_untracked();
        store.on_layout_change(next);
        assert_eq!(store.layouts().get_untracked(), once);
        runtime.dispose();
    }

    #[test]
    fn store_accepts_events_in_both_modes() {
        let runtime = create_runtime();
        let store = LayoutStore::new(GridModeController::new());

        store.mode().toggle();
        assert!(store.mode().is_edit());
        store.on_layout_change(moved_set());
        assert_eq!(store.layouts().get_untracked().lg[0].x, 4);

        store.mode().toggle();
        assert!(!store.mode().is_edit());
        let mut again = moved_set();
        again.lg[0].x = 6;
        store.on_layout_change(again);
        assert_eq!(store.layouts().get_untracked().lg[0].x, 6);
        runtime.dispose();
    }

    #[test]
    fn toggle_leaves_layouts_alone() {
        let runtime = create_runtime();
        let store = LayoutStore::new(GridModeController::new());
        let before = store.layouts().get_untracked();
        store.mode().toggle();
        store.mode().toggle();
        assert_eq!(store.layouts().get_untracked(), before);
        runtime.dispose();
    }

    #[test]
    fn default_set_positions_all_cards() {
        let set = default_layouts();
        assert!(set.is_complete());
        assert!(set.entry(Breakpoint::Lg, CardId::Weather).is_some());
    }
}
