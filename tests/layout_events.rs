use crypto_dashboard_wasm::application::layout_store::{GridModeController, LayoutStore};
use crypto_dashboard_wasm::domain::layout::{default_layouts, GridMode, LayoutSet};
use leptos::SignalGetUntracked;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn dragged() -> LayoutSet {
    let mut set = default_layouts();
    set.lg[0].x = 4;
    set.md[0].y = 12;
    set
}

#[wasm_bindgen_test]
fn mode_gates_interactivity_not_the_write_path() {
    let store = LayoutStore::new(GridModeController::new());

    // edit mode on, drag lands
    store.mode().toggle();
    assert!(store.mode().is_edit());
    store.on_layout_change(dragged());
    assert_eq!(store.layouts().get_untracked().lg[0].x, 4);

    // back to view mode: the store still accepts events, only the UI
    // affordance is gated
    store.mode().toggle();
    assert_eq!(store.mode().current(), GridMode::View);
    let mut next = dragged();
    next.lg[0].x = 2;
    store.on_layout_change(next);
    assert_eq!(store.layouts().get_untracked().lg[0].x, 2);
}

#[wasm_bindgen_test]
fn reset_restores_default_and_closes_edit_mode() {
    let store = LayoutStore::new(GridModeController::new());
    store.mode().toggle();
    store.on_layout_change(dragged());

    store.reset();
    assert_eq!(store.layouts().get_untracked(), default_layouts());
    assert_eq!(store.mode().current(), GridMode::View);
    assert!(store.layouts().get_untracked().is_complete());
}
