//! Browser glue for the studio panel layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `PanelLayout` in a context signal, restores the saved split on mount,
//! and feeds window resizes into the layout. Components call the action
//! helpers here so persistence failures are logged in one place.
//!
//! TRADE-OFFS
//! ==========
//! Resize events are debounced: only the last width in a burst is applied, so
//! dragging a window edge does not re-render the studio on every frame.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use leptos::prelude::*;

use crate::config::StudioConfig;
use crate::state::panels::{PanelLayout, PanelSide, PanelSizes};
use crate::util::ui_persistence::{LocalStorageStore, PersistError};

/// Shared layout signal from context.
///
/// # Panics
///
/// Panics when called outside a tree that ran `provide_panels`.
pub fn use_panels() -> RwSignal<PanelLayout> {
    expect_context::<RwSignal<PanelLayout>>()
}

/// Store for the persisted panel-size triple.
pub fn sizes_store(config: &StudioConfig) -> LocalStorageStore<PanelSizes> {
    LocalStorageStore::new(config.panel_sizes_storage_key)
}

/// Create the layout signal, restore saved sizes, and track the viewport.
pub fn provide_panels(config: &StudioConfig) -> RwSignal<PanelLayout> {
    let panels = RwSignal::new(PanelLayout::new(config));
    let store = sizes_store(config);
    Effect::new(move || {
        panels.update(|p| {
            p.hydrate(&store);
            if let Some(width) = current_viewport_width() {
                p.set_viewport_width(width);
            }
        });
    });
    install_resize_listener(panels, config);
    provide_context(panels);
    panels
}

fn current_viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn install_resize_listener(panels: RwSignal<PanelLayout>, config: &StudioConfig) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;

        let debounce_ms = u32::try_from(config.resize_debounce.as_millis()).unwrap_or(u32::MAX);
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let timeout = Timeout::new(debounce_ms, move || {
                if let Some(width) = current_viewport_width() {
                    panels.update(|p| p.set_viewport_width(width));
                }
            });
            // Replacing the previous timeout drops (cancels) it.
            pending.borrow_mut().replace(timeout);
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (panels, config);
    }
}

fn report(action: &str, store: &LocalStorageStore<PanelSizes>, result: Result<(), PersistError>) {
    if let Err(e) = result {
        leptos::logging::warn!("{action}: {} not saved: {e}", store.key());
    }
}

/// Collapse or expand a side pane.
pub fn toggle_panel(panels: RwSignal<PanelLayout>, side: PanelSide, config: &StudioConfig) {
    let store = sizes_store(config);
    if let Some(result) = panels.try_update(|p| p.toggle_panel(side, &store)) {
        report("toggle panel", &store, result);
    }
}

/// Enter or leave fullscreen.
pub fn toggle_fullscreen(panels: RwSignal<PanelLayout>) {
    panels.update(PanelLayout::toggle_fullscreen);
}

/// Pop the preview pane out of, or back into, the studio row.
pub fn toggle_preview_detached(panels: RwSignal<PanelLayout>, config: &StudioConfig) {
    let store = sizes_store(config);
    if let Some(result) = panels.try_update(|p| p.toggle_preview_detached(&store)) {
        report("detach preview", &store, result);
    }
}

/// Apply a drag-resize result.
pub fn handle_panel_resize(panels: RwSignal<PanelLayout>, sizes: [f64; 3], config: &StudioConfig) {
    let store = sizes_store(config);
    if let Some(result) = panels.try_update(|p| p.handle_panel_resize(sizes, &store)) {
        report("resize", &store, result);
    }
}
