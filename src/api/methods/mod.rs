//! IMS operations: one function per command
//!
//! Each validates its parameters, builds the resource path and query, and
//! makes a single call on the supplied client. The client's content or error
//! is returned as-is.

pub mod query;
pub mod start;
pub mod stop;

pub use query::{query_program, query_region, query_transaction};
pub use start::{start_program, start_region, start_transaction};
pub use stop::{stop_program, stop_region, stop_transaction};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::ImsSession;

    pub fn dummy_session() -> ImsSession {
        ImsSession {
            user: Some("fake".into()),
            password: Some("fake".into()),
            ims_connect_host: Some("fake".into()),
            ims_connect_port: Some(9999),
            plex: Some("fake".into()),
            ..ImsSession::new("fake", 8080)
        }
    }
}
