//! Static client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides a single `StudioConfig` via context so state operations and
//! browser glue read storage keys, simulated latencies, and layout breakpoints
//! from one place instead of scattering constants through components.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Storage key for the persisted signed-in user snapshot.
pub const USER_STORAGE_KEY: &str = "studio_ui_user";
/// Storage key for the persisted panel-size triple.
pub const PANEL_SIZES_STORAGE_KEY: &str = "studio_ui_panel_sizes";

/// Client-wide tunables.
#[derive(Clone, Debug, PartialEq)]
pub struct StudioConfig {
    pub user_storage_key: &'static str,
    pub panel_sizes_storage_key: &'static str,
    /// Simulated latency of a provider login.
    pub login_delay: Duration,
    /// Simulated latency of linking an external platform.
    pub connect_delay: Duration,
    pub breakpoints: Breakpoints,
    /// Width given to an available side pane, in percent.
    pub side_pane_percent: f64,
    /// Center share on tablet viewports while the preview is docked.
    pub tablet_center_percent: f64,
    /// Quiet period before a window resize is applied.
    pub resize_debounce: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            user_storage_key: USER_STORAGE_KEY,
            panel_sizes_storage_key: PANEL_SIZES_STORAGE_KEY,
            login_delay: Duration::from_secs(2),
            connect_delay: Duration::from_secs(1),
            breakpoints: Breakpoints::default(),
            side_pane_percent: 25.0,
            tablet_center_percent: 70.0,
            resize_debounce: Duration::from_millis(150),
        }
    }
}

/// Viewport widths (CSS pixels) separating the responsive layouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    /// Widths strictly below this are mobile.
    pub tablet_min: f64,
    /// Widths at or above this are desktop.
    pub desktop_min: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { tablet_min: 768.0, desktop_min: 1024.0 }
    }
}
