//! # Async Tasks
//!
//! Spawns account service requests and reports their outcome on the event
//! channel.

pub mod request;

pub(crate) use request::spawn_request;
