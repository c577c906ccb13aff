//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `panels`) so individual components can
//! depend on small focused models. Each model is a plain struct; `App` wraps
//! it in an `RwSignal` and provides it via context.

pub mod auth;
pub mod panels;
