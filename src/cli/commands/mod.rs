//! CLI command implementations

pub mod completions;
pub mod profiles;
pub mod query;
pub mod start;
pub mod stop;
