//! Core domain + application logic for the Reliable Outsorsing Company menu bot.
//!
//! This crate is framework-agnostic. Telegram lives behind the messaging port
//! implemented in the `rocbot-telegram` adapter crate.

pub mod config;
pub mod context;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod menu;
pub mod messaging;
pub mod rate_limit;

pub use errors::{Error, Result};
