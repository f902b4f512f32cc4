//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment concerns (wall clock) from component
//! logic to keep rendering testable.

pub mod clock;
