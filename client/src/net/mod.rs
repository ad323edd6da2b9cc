//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the two same-origin HTTP endpoints the UI consumes and `types`
//! defines their payloads.

pub mod api;
pub mod types;
