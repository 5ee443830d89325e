//! Browser-side theme synchronization.
//!
//! The logic is platform-agnostic: browser storage, the document root, the OS
//! color-scheme query and the server endpoint are reached through traits so the same
//! state machine drives a WASM front end or a test double.

pub mod error;
pub mod remote;
pub mod theme;
