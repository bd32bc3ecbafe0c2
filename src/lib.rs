//! IMS Connect CLI
//!
//! Start, stop and query IMS transactions, programs and regions through the
//! IMS Operations REST API.

pub mod api;
pub mod cli;
pub mod core;
