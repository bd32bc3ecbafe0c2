//! Core module - session, configuration and logging

pub mod config;
pub mod logging;
pub mod session;

pub use config::{Config, ConfigError, ConnectionProfile};
pub use session::{ImsSession, Protocol, SessionError};
