//! # Reusable Widgets
//!
//! - [`forms`]: labelled inputs, submit buttons, cards
//! - [`status_banner`]: success/error banner for the last operation

pub mod forms;
pub mod status_banner;
