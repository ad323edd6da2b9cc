//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render sleep-log widgets and page chrome while reading/writing
//! shared state from Leptos context providers or signals passed as props.

pub mod clock;
pub mod duration_display;
pub mod export_buttons;
pub mod notification_stack;
pub mod quality_indicator;
pub mod recommendation_card;
pub mod sleep_chart;
pub mod theme_toggle;
