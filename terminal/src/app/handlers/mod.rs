//! # Event Handlers
//!
//! User action handlers, split by screen.
//!
//! - [`auth`]: login and create-account forms, switching between them
//! - [`account`]: dashboard actions (deposit, withdraw, refresh, logout)

pub mod account;
pub mod auth;
