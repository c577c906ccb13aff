//! Three-pane studio layout (left tools, center editor, right preview).
//!
//! DESIGN
//! ======
//! `PanelSizes` is the user's chosen split and is the only part persisted.
//! Collapse/detach toggles rebuild the split from a fixed rule: unavailable
//! side panes get 0, available ones get `side_percent`, and the center takes
//! the remainder. The viewport width is tracked separately and only shapes the
//! *effective* sizes, so visiting a phone-sized window does not overwrite the
//! desktop layout.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use serde::{Deserialize, Serialize};

use crate::config::{Breakpoints, StudioConfig};
use crate::util::ui_persistence::{PersistError, SnapshotStore};

/// Pane widths in percent of the studio row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelSizes {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl Default for PanelSizes {
    fn default() -> Self {
        Self { left: 25.0, center: 50.0, right: 25.0 }
    }
}

impl PanelSizes {
    pub fn from_array([left, center, right]: [f64; 3]) -> Self {
        Self { left, center, right }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.left, self.center, self.right]
    }
}

/// Collapse/fullscreen/detach flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub left_collapsed: bool,
    pub right_collapsed: bool,
    pub fullscreen: bool,
    pub preview_detached: bool,
}

/// A collapsible side pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSide {
    Left,
    Right,
}

/// Responsive layout class of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn for_width(width: f64, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.tablet_min {
            Self::Mobile
        } else if width < breakpoints.desktop_min {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Layout preset for one breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveConfig {
    pub breakpoint: Breakpoint,
    pub sizes: PanelSizes,
    /// Side panes render as toggleable drawers instead of fixed columns.
    pub collapsible_sides: bool,
    /// The tools pane floats over the editor as an open drawer.
    pub left_drawer_open: bool,
}

impl ResponsiveConfig {
    /// Dividers can be dragged only on the desktop layout.
    pub fn resizable(&self) -> bool {
        self.breakpoint == Breakpoint::Desktop
    }
}

/// Studio layout model, provided to components as `RwSignal<PanelLayout>`.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    pub sizes: PanelSizes,
    pub state: PanelState,
    /// Last applied window width; `None` until the browser reports one.
    pub viewport_width: Option<f64>,
    side_percent: f64,
    tablet_center_percent: f64,
    breakpoints: Breakpoints,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new(&StudioConfig::default())
    }
}

impl PanelLayout {
    pub fn new(config: &StudioConfig) -> Self {
        let side = config.side_pane_percent;
        Self {
            sizes: PanelSizes { left: side, center: 100.0 - 2.0 * side, right: side },
            state: PanelState::default(),
            viewport_width: None,
            side_percent: side,
            tablet_center_percent: config.tablet_center_percent,
            breakpoints: config.breakpoints,
        }
    }

    /// Replace the sizes with a persisted snapshot, keeping defaults when the
    /// snapshot is absent or malformed.
    pub fn hydrate(&mut self, store: &impl SnapshotStore<PanelSizes>) {
        if let Some(sizes) = store.load() {
            self.sizes = sizes;
        }
    }

    /// Right pane shows in the row (not collapsed, not popped out).
    pub fn right_available(&self) -> bool {
        !self.state.right_collapsed && !self.state.preview_detached
    }

    /// Flip a side pane's collapsed flag and rebuild the split.
    ///
    /// # Errors
    ///
    /// Returns an error if the new sizes could not be persisted; the in-memory
    /// layout is updated regardless.
    pub fn toggle_panel(&mut self, side: PanelSide, store: &impl SnapshotStore<PanelSizes>) -> Result<(), PersistError> {
        match side {
            PanelSide::Left => self.state.left_collapsed = !self.state.left_collapsed,
            PanelSide::Right => self.state.right_collapsed = !self.state.right_collapsed,
        }
        self.redistribute();
        store.save(&self.sizes)
    }

    /// Flip fullscreen. Sizes are left for the view to interpret.
    pub fn toggle_fullscreen(&mut self) {
        self.state.fullscreen = !self.state.fullscreen;
    }

    /// Pop the preview out of (or back into) the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the new sizes could not be persisted.
    pub fn toggle_preview_detached(&mut self, store: &impl SnapshotStore<PanelSizes>) -> Result<(), PersistError> {
        self.state.preview_detached = !self.state.preview_detached;
        self.redistribute();
        store.save(&self.sizes)
    }

    /// Store a drag-resize result verbatim as left/center/right.
    ///
    /// # Errors
    ///
    /// Returns an error if the new sizes could not be persisted.
    pub fn handle_panel_resize(&mut self, sizes: [f64; 3], store: &impl SnapshotStore<PanelSizes>) -> Result<(), PersistError> {
        self.sizes = PanelSizes::from_array(sizes);
        store.save(&self.sizes)
    }

    /// Layout preset for a viewport `width` given the current flags.
    ///
    /// Mobile shows the editor alone. Tablet keeps the tools pane out of the
    /// row (it opens as a drawer unless collapsed) and gives the preview its
    /// fixed share while it is available. Desktop uses the stored split.
    pub fn responsive_config(&self, width: f64) -> ResponsiveConfig {
        let breakpoint = Breakpoint::for_width(width, &self.breakpoints);
        match breakpoint {
            Breakpoint::Mobile => ResponsiveConfig {
                breakpoint,
                sizes: PanelSizes { left: 0.0, center: 100.0, right: 0.0 },
                collapsible_sides: false,
                left_drawer_open: false,
            },
            Breakpoint::Tablet => {
                let right = if self.right_available() { 100.0 - self.tablet_center_percent } else { 0.0 };
                ResponsiveConfig {
                    breakpoint,
                    sizes: PanelSizes { left: 0.0, center: 100.0 - right, right },
                    collapsible_sides: true,
                    left_drawer_open: !self.state.left_collapsed,
                }
            }
            Breakpoint::Desktop => ResponsiveConfig {
                breakpoint,
                sizes: self.sizes,
                collapsible_sides: false,
                left_drawer_open: false,
            },
        }
    }

    /// Preset for the tracked viewport, assuming desktop until one is known.
    pub fn active_config(&self) -> ResponsiveConfig {
        let width = self.viewport_width.unwrap_or(self.breakpoints.desktop_min);
        self.responsive_config(width)
    }

    /// Record the window width reported by a (debounced) resize event.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = Some(width);
    }

    /// Sizes to render: the responsive preset once the viewport is known.
    pub fn effective_sizes(&self) -> PanelSizes {
        self.active_config().sizes
    }

    /// Breakpoint of the tracked viewport, assuming desktop until known.
    pub fn breakpoint(&self) -> Breakpoint {
        self.active_config().breakpoint
    }

    fn redistribute(&mut self) {
        let left = if self.state.left_collapsed { 0.0 } else { self.side_percent };
        let right = if self.right_available() { self.side_percent } else { 0.0 };
        self.sizes = PanelSizes { left, center: 100.0 - left - right, right };
    }
}
