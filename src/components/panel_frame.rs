//! Three-pane studio row with draggable dividers.
//!
//! ARCHITECTURE
//! ============
//! The frame only renders. Sizes come from `PanelLayout::effective_sizes`
//! (responsive preset applied) and fullscreen is interpreted here as
//! center-only. Dividers exist only on the desktop layout, where the rendered
//! split is the stored one; drags update the signal live and persist once, on
//! pointer release. On tablets the tools pane opens as a drawer over the
//! editor instead of taking a column.

#[cfg(test)]
#[path = "panel_frame_test.rs"]
mod panel_frame_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::config::StudioConfig;
use crate::state::panels::{PanelLayout, PanelSizes};
use crate::util::panels::{handle_panel_resize, use_panels};

/// Smallest share a pane can be dragged down to.
pub const MIN_PANE_PERCENT: f64 = 10.0;

/// Divider between two adjacent panes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Divider {
    LeftCenter,
    CenterRight,
}

/// New split after dragging `divider` by `delta_percent` from `start`.
///
/// Only the two panes touching the divider change; their combined share is
/// preserved and neither drops below `MIN_PANE_PERCENT`.
pub fn drag_sizes(start: PanelSizes, divider: Divider, delta_percent: f64) -> [f64; 3] {
    let split = |a: f64, b: f64| {
        let pair = a + b;
        let max = (pair - MIN_PANE_PERCENT).max(MIN_PANE_PERCENT);
        let next = (a + delta_percent).max(MIN_PANE_PERCENT).min(max);
        (next, pair - next)
    };
    match divider {
        Divider::LeftCenter => {
            let (left, center) = split(start.left, start.center);
            [left, center, start.right]
        }
        Divider::CenterRight => {
            let (center, right) = split(start.center, start.right);
            [start.left, center, right]
        }
    }
}

/// Sizes to render, with fullscreen collapsing everything but the center.
pub fn rendered_sizes(layout: &PanelLayout) -> PanelSizes {
    if layout.state.fullscreen {
        PanelSizes { left: 0.0, center: 100.0, right: 0.0 }
    } else {
        layout.effective_sizes()
    }
}

/// Split a divider drag starts from, or `None` when dragging is disabled
/// (tablet and mobile presets, fullscreen).
pub fn drag_origin(layout: &PanelLayout) -> Option<PanelSizes> {
    let active = layout.active_config();
    (active.resizable() && !layout.state.fullscreen).then(|| rendered_sizes(layout))
}

/// Inline style for a pane occupying `percent` of the row.
pub fn pane_style(percent: f64) -> String {
    format!("flex: 0 0 {percent:.2}%;")
}

/// Studio row: tools, editor, preview.
#[component]
pub fn PanelFrame(
    #[prop(into)] left: ViewFn,
    #[prop(into)] center: ViewFn,
    #[prop(into)] right: ViewFn,
) -> impl IntoView {
    let panels = use_panels();
    let config = expect_context::<StudioConfig>();
    let frame_ref = NodeRef::<leptos::html::Div>::new();

    let dragging = RwSignal::new(None::<Divider>);
    let drag_start_x = RwSignal::new(0.0_f64);
    let drag_start_sizes = RwSignal::new(PanelSizes::default());

    let sizes = Memo::new(move |_| panels.with(rendered_sizes));
    let left_drawer = left.clone();
    let resizable = Memo::new(move |_| panels.with(|p| drag_origin(p).is_some()));
    let drawer_open = Memo::new(move |_| panels.with(|p| p.active_config().left_drawer_open && !p.state.fullscreen));
    let show_left = move || sizes.get().left > 0.0;
    let show_right = move || sizes.get().right > 0.0;

    let frame_width = move || {
        #[cfg(feature = "hydrate")]
        {
            frame_ref.get().map_or(0.0, |el| f64::from(el.client_width()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    };

    let start_drag = move |divider: Divider, ev: leptos::ev::PointerEvent| {
        let Some(origin) = panels.with_untracked(drag_origin) else {
            return;
        };
        dragging.set(Some(divider));
        drag_start_x.set(f64::from(ev.client_x()));
        drag_start_sizes.set(origin);
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some(divider) = dragging.get() else {
            return;
        };
        let width = frame_width();
        if width <= 0.0 {
            return;
        }
        let delta = (f64::from(ev.client_x()) - drag_start_x.get()) / width * 100.0;
        let next = drag_sizes(drag_start_sizes.get(), divider, delta);
        panels.update(|p| p.sizes = PanelSizes::from_array(next));
    };

    let on_pointer_up = {
        let config = config.clone();
        move |_ev: leptos::ev::PointerEvent| {
            if dragging.get().is_none() {
                return;
            }
            dragging.set(None);
            let final_sizes = panels.with_untracked(|p| p.sizes.to_array());
            handle_panel_resize(panels, final_sizes, &config);
        }
    };

    view! {
        <div
            class="studio-frame"
            class:studio-frame--fullscreen=move || panels.with(|p| p.state.fullscreen)
            node_ref=frame_ref
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up.clone()
            on:pointercancel=on_pointer_up
        >
            <Show when=move || drawer_open.get()>
                <aside class="studio-frame__drawer studio-frame__drawer--left">{left_drawer.run()}</aside>
            </Show>
            <Show when=show_left>
                <section class="studio-frame__pane studio-frame__pane--left" style=move || pane_style(sizes.get().left)>
                    {left.run()}
                </section>
                <Show when=move || resizable.get()>
                    <div
                        class="studio-frame__divider"
                        on:pointerdown=move |ev| start_drag(Divider::LeftCenter, ev)
                    ></div>
                </Show>
            </Show>
            <section class="studio-frame__pane studio-frame__pane--center" style=move || pane_style(sizes.get().center)>
                {center.run()}
            </section>
            <Show when=show_right>
                <Show when=move || resizable.get()>
                    <div
                        class="studio-frame__divider"
                        on:pointerdown=move |ev| start_drag(Divider::CenterRight, ev)
                    ></div>
                </Show>
                <section class="studio-frame__pane studio-frame__pane--right" style=move || pane_style(sizes.get().right)>
                    {right.run()}
                </section>
            </Show>
        </div>
    }
}
