//! # Screens
//!
//! One module per [`crate::app::View`]. Screens edit the form buffers of a
//! state snapshot and report user intent as [`super::UiAction`]s; they never
//! call the controller directly.

pub mod create;
pub mod dashboard;
pub mod login;
