//! Core domain + application logic for the Chisa group chat bot.
//!
//! This crate is intentionally framework-agnostic. The messaging network,
//! media transcoding, and link-download collaborators live behind ports
//! (traits) implemented by adapter code.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod game;
pub mod handlers;
pub mod logging;
pub mod messages;
pub mod messaging;
pub mod ports;
pub mod ratelimit;
pub mod registry;
pub mod router;
pub mod store;

pub use errors::{Error, Result};
