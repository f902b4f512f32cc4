//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are parameterless leaves. Anything they need from outside
//! (dispatcher, clock) comes from Leptos context providers set up in `app`.

pub mod banner;
pub mod footer;
pub mod icon;
