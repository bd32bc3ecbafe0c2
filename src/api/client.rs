//! REST client used by the request builders
//!
//! The request builders only see the `ImsRestClient` trait. `HttpRestClient`
//! is the real implementation; tests substitute a recording mock.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::ImsSession;

/// Errors returned by a REST client
#[derive(Debug, Error)]
pub enum RestError {
    #[error("Could not create HTTP client: {0}")]
    Client(String),

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("IMS Connect returned HTTP {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("Response from {url} is not valid JSON: {message}")]
    InvalidJson { url: String, message: String },
}

/// HTTP verbs the IMS operations need
///
/// `resource` is the path plus query string, e.g. `/transaction?names=A`.
/// `headers` are sent in addition to the session's own headers.
pub trait ImsRestClient {
    fn put_expect_json(
        &self,
        session: &ImsSession,
        resource: &str,
        headers: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, RestError>;

    fn get_expect_json(
        &self,
        session: &ImsSession,
        resource: &str,
        headers: &[(String, String)],
    ) -> Result<Value, RestError>;
}

/// Blocking `reqwest` implementation of `ImsRestClient`
#[derive(Debug, Default, Clone)]
pub struct HttpRestClient;

impl HttpRestClient {
    pub fn new() -> Self {
        Self
    }

    fn send(
        &self,
        session: &ImsSession,
        method: Method,
        resource: &str,
        headers: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, RestError> {
        let url = session.url_for(resource);

        let client = Client::builder()
            .danger_accept_invalid_certs(!session.reject_unauthorized)
            .build()
            .map_err(|e| RestError::Client(e.to_string()))?;

        debug!(%method, %url, "sending IMS request");

        let mut request = client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in session.ims_connect_headers() {
            request = request.header(name, value);
        }
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(user) = &session.user {
            request = request.basic_auth(user, session.password.as_ref());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| RestError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().map_err(|e| RestError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;
        debug!(status = status.as_u16(), bytes = text.len(), "IMS response received");

        if !status.is_success() {
            return Err(RestError::Status {
                url,
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| RestError::InvalidJson {
            url,
            message: e.to_string(),
        })
    }
}

impl ImsRestClient for HttpRestClient {
    fn put_expect_json(
        &self,
        session: &ImsSession,
        resource: &str,
        headers: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, RestError> {
        self.send(session, Method::PUT, resource, headers, body)
    }

    fn get_expect_json(
        &self,
        session: &ImsSession,
        resource: &str,
        headers: &[(String, String)],
    ) -> Result<Value, RestError> {
        self.send(session, Method::GET, resource, headers, None)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording client for request builder tests

    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Call {
        pub verb: &'static str,
        pub resource: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<Value>,
    }

    /// Returns `content` for every call, or fails with HTTP `fail_status`
    pub struct RecordingClient {
        pub content: Value,
        pub fail_status: Option<u16>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl RecordingClient {
        pub fn returning(content: Value) -> Self {
            Self {
                content,
                fail_status: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                fail_status: Some(status),
                ..Self::returning(Value::Null)
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(
            &self,
            verb: &'static str,
            resource: &str,
            headers: &[(String, String)],
            body: Option<&Value>,
        ) -> Result<Value, RestError> {
            self.calls.borrow_mut().push(Call {
                verb,
                resource: resource.to_string(),
                headers: headers.to_vec(),
                body: body.cloned(),
            });
            match self.fail_status {
                Some(status) => Err(RestError::Status {
                    url: resource.to_string(),
                    status,
                    body: "mock failure".to_string(),
                }),
                None => Ok(self.content.clone()),
            }
        }
    }

    impl ImsRestClient for RecordingClient {
        fn put_expect_json(
            &self,
            _session: &ImsSession,
            resource: &str,
            headers: &[(String, String)],
            body: Option<&Value>,
        ) -> Result<Value, RestError> {
            self.record("PUT", resource, headers, body)
        }

        fn get_expect_json(
            &self,
            _session: &ImsSession,
            resource: &str,
            headers: &[(String, String)],
        ) -> Result<Value, RestError> {
            self.record("GET", resource, headers, None)
        }
    }
}
