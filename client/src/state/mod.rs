//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds the store slice and its intents; `dispatch` is the capability
//! components use to request changes to it.

pub mod dispatch;
pub mod ui;
