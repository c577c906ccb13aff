//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `badge`, `button`, and `card` are stateless variant-driven primitives.
//! The remaining components render studio chrome while reading/writing shared
//! state from Leptos context providers.

pub mod badge;
pub mod button;
pub mod card;
pub mod panel_frame;
pub mod platform_list;
pub mod toolbar;
