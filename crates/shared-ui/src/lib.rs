//! Shared UI components for the ForumKit front-end.
//!
//! Standalone pieces styled through the app stylesheet; only the toast
//! stack wraps dioxus-primitives.

pub mod components;

pub use components::*;
