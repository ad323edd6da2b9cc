//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod chart;
pub mod classes;
pub mod clock;
pub mod dark_mode;
pub mod export;
pub mod page_data;
