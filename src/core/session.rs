//! Connection session for one IMS Connect endpoint

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::constants;
use crate::core::config::ConnectionProfile;

/// Port used when neither profile nor flags give one
pub const DEFAULT_PORT: u16 = 8080;

/// Transport protocol of the REST endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

/// Errors that can occur while building a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No IMS host configured. Pass --host, set IMS_HOST, or create a profile")]
    MissingHost,

    #[error("A password was given without a user name")]
    PasswordWithoutUser,
}

/// Connection and credential bundle passed to every IMS operation
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImsSession {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    /// Path prefix of the REST API on the host, e.g. `/ims/api/v1`
    pub base_path: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Verify the server's TLS certificate
    pub reject_unauthorized: bool,
    /// IMS Connect host the REST server forwards commands to
    pub ims_connect_host: Option<String>,
    pub ims_connect_port: Option<u16>,
    /// IMSplex name
    pub plex: Option<String>,
}

impl ImsSession {
    /// Minimal session for `host:port`, all other fields defaulted
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: Protocol::default(),
            host: host.into(),
            port,
            base_path: None,
            user: None,
            password: None,
            reject_unauthorized: true,
            ims_connect_host: None,
            ims_connect_port: None,
            plex: None,
        }
    }

    /// Build a session from a fully merged profile
    pub fn from_profile(profile: &ConnectionProfile) -> Result<Self, SessionError> {
        let host = profile
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(SessionError::MissingHost)?;

        if profile.password.is_some() && profile.user.is_none() {
            return Err(SessionError::PasswordWithoutUser);
        }

        Ok(Self {
            protocol: profile.protocol.unwrap_or_default(),
            host: host.to_string(),
            port: profile.port.unwrap_or(DEFAULT_PORT),
            base_path: profile.base_path.clone().filter(|p| !p.trim().is_empty()),
            user: profile.user.clone(),
            password: profile.password.clone(),
            reject_unauthorized: profile.reject_unauthorized.unwrap_or(true),
            ims_connect_host: profile.ims_connect_host.clone(),
            ims_connect_port: profile.ims_connect_port,
            plex: profile.plex.clone(),
        })
    }

    /// Absolute URL for a resource such as `/transaction?names=A`
    pub fn url_for(&self, resource: &str) -> String {
        let base = self
            .base_path
            .as_deref()
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
            .map(|p| format!("/{}", p))
            .unwrap_or_default();
        let resource = if resource.starts_with('/') {
            resource.to_string()
        } else {
            format!("/{}", resource)
        };
        format!(
            "{}://{}:{}{}{}",
            self.protocol, self.host, self.port, base, resource
        )
    }

    /// Headers telling the REST server which IMS Connect to talk to
    pub fn ims_connect_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(host) = &self.ims_connect_host {
            headers.push((constants::HEADER_HOSTNAME, host.clone()));
        }
        if let Some(port) = self.ims_connect_port {
            headers.push((constants::HEADER_PORT, port.to_string()));
        }
        if let Some(plex) = &self.plex {
            headers.push((constants::HEADER_PLEX, plex.clone()));
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(host: &str) -> ConnectionProfile {
        ConnectionProfile {
            host: Some(host.to_string()),
            ..ConnectionProfile::default()
        }
    }

    #[test]
    fn test_from_profile_applies_defaults() {
        let session = ImsSession::from_profile(&profile("zos.example.com")).unwrap();
        assert_eq!(session.host, "zos.example.com");
        assert_eq!(session.port, DEFAULT_PORT);
        assert_eq!(session.protocol, Protocol::Https);
        assert!(session.reject_unauthorized);
    }

    #[test]
    fn test_from_profile_requires_host() {
        let err = ImsSession::from_profile(&profile("  ")).unwrap_err();
        assert!(matches!(err, SessionError::MissingHost));
        let err = ImsSession::from_profile(&ConnectionProfile::default()).unwrap_err();
        assert!(matches!(err, SessionError::MissingHost));
    }

    #[test]
    fn test_password_needs_user() {
        let mut p = profile("h");
        p.password = Some("secret".into());
        let err = ImsSession::from_profile(&p).unwrap_err();
        assert!(matches!(err, SessionError::PasswordWithoutUser));
    }

    #[test]
    fn test_url_for_joins_base_path() {
        let mut session = ImsSession::new("h", 9443);
        assert_eq!(
            session.url_for("/transaction?names=A"),
            "https://h:9443/transaction?names=A"
        );

        session.base_path = Some("/ims/api/v1/".into());
        session.protocol = Protocol::Http;
        assert_eq!(
            session.url_for("/program"),
            "http://h:9443/ims/api/v1/program"
        );
        assert_eq!(session.url_for("region"), "http://h:9443/ims/api/v1/region");
    }

    #[test]
    fn test_ims_connect_headers_only_when_set() {
        let mut session = ImsSession::new("h", 1);
        assert!(session.ims_connect_headers().is_empty());

        session.ims_connect_host = Some("ic.example.com".into());
        session.ims_connect_port = Some(9999);
        session.plex = Some("PLEX1".into());
        assert_eq!(
            session.ims_connect_headers(),
            vec![
                ("hostname", "ic.example.com".to_string()),
                ("port", "9999".to_string()),
                ("plex", "PLEX1".to_string()),
            ]
        );
    }
}
