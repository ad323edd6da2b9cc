//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome, the `sleep_form` draft, the
//! `recommendations` list) so components depend on small focused models.

pub mod recommendations;
pub mod sleep_form;
pub mod ui;
