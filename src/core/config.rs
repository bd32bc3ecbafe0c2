//! Configuration file with named connection profiles
//!
//! Sources are layered, later ones winning:
//! 1. Built-in defaults
//! 2. The selected profile in `config.yaml` (`~/.config/ims/config.yaml`)
//! 3. `IMS_*` environment variables
//! 4. Command-line flags
//!
//! Layers 3 and 4 are resolved by clap; this module owns 1 and 2.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::session::Protocol;

/// Errors that can occur while reading or editing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Profile '{0}' does not exist")]
    UnknownProfile(String),

    #[error("Profile '{0}' already exists (use --overwrite to replace it)")]
    ProfileExists(String),
}

/// Connection settings; every field optional so profiles can be layered
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_unauthorized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ims_connect_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ims_connect_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plex: Option<String>,
}

impl ConnectionProfile {
    /// Merge another profile into this one (other takes precedence)
    pub fn merge(&mut self, other: ConnectionProfile) {
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.port.is_some() {
            self.port = other.port;
        }
        if other.user.is_some() {
            self.user = other.user;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        if other.protocol.is_some() {
            self.protocol = other.protocol;
        }
        if other.base_path.is_some() {
            self.base_path = other.base_path;
        }
        if other.reject_unauthorized.is_some() {
            self.reject_unauthorized = other.reject_unauthorized;
        }
        if other.ims_connect_host.is_some() {
            self.ims_connect_host = other.ims_connect_host;
        }
        if other.ims_connect_port.is_some() {
            self.ims_connect_port = other.ims_connect_port;
        }
        if other.plex.is_some() {
            self.plex = other.plex;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ConnectionProfile::default()
    }

    /// Copy safe to print, with the password masked
    pub fn redacted(&self) -> ConnectionProfile {
        ConnectionProfile {
            password: self.password.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}

/// Contents of `config.yaml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Profile used when `--ims-profile` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,

    pub profiles: BTreeMap<String, ConnectionProfile>,
}

impl Config {
    /// Path of the per-user config file
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        directories::ProjectDirs::from("", "", "ims")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load a config file; a missing file yields an empty config
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the config file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let yaml = serde_yml::to_string(self).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, yaml).map_err(io_err)
    }

    /// Look up the profile to use
    ///
    /// An explicit name must exist. Without one, the default profile is used
    /// if set; otherwise there is no profile layer.
    pub fn select_profile(
        &self,
        name: Option<&str>,
    ) -> Result<Option<(&str, &ConnectionProfile)>, ConfigError> {
        let Some(name) = name.or(self.default_profile.as_deref()) else {
            return Ok(None);
        };

        self.profiles
            .get_key_value(name)
            .map(|(k, v)| Some((k.as_str(), v)))
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    /// Add or replace a profile
    pub fn insert_profile(
        &mut self,
        name: &str,
        profile: ConnectionProfile,
        overwrite: bool,
    ) -> Result<(), ConfigError> {
        if self.profiles.contains_key(name) && !overwrite {
            return Err(ConfigError::ProfileExists(name.to_string()));
        }
        self.profiles.insert(name.to_string(), profile);
        Ok(())
    }

    /// Remove a profile, clearing the default if it pointed at it
    pub fn remove_profile(&mut self, name: &str) -> Result<ConnectionProfile, ConfigError> {
        let removed = self
            .profiles
            .remove(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;

        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        Ok(removed)
    }

    pub fn set_default_profile(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.profiles.contains_key(name) {
            return Err(ConfigError::UnknownProfile(name.to_string()));
        }
        self.default_profile = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_profile(host: &str) -> ConnectionProfile {
        ConnectionProfile {
            host: Some(host.to_string()),
            port: Some(9443),
            user: Some("ibmuser".to_string()),
            password: Some("secret".to_string()),
            plex: Some("PLEX1".to_string()),
            ..ConnectionProfile::default()
        }
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let mut base = sample_profile("a.example.com");
        base.merge(ConnectionProfile {
            host: Some("b.example.com".into()),
            ims_connect_port: Some(9999),
            ..ConnectionProfile::default()
        });
        assert_eq!(base.host.as_deref(), Some("b.example.com"));
        assert_eq!(base.port, Some(9443));
        assert_eq!(base.ims_connect_port, Some(9999));
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let tmp = tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested/config.yaml");

        let mut config = Config::default();
        config
            .insert_profile("dev", sample_profile("dev.example.com"), false)
            .unwrap();
        config.set_default_profile("dev").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("default_profile: dev"));
        assert!(!contents.contains("base_path"));
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "profiles: [not, a, map").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_select_profile() {
        let mut config = Config::default();
        assert!(config.select_profile(None).unwrap().is_none());

        config
            .insert_profile("dev", sample_profile("dev"), false)
            .unwrap();
        config
            .insert_profile("prod", sample_profile("prod"), false)
            .unwrap();
        config.set_default_profile("dev").unwrap();

        let (name, _) = config.select_profile(None).unwrap().unwrap();
        assert_eq!(name, "dev");
        let (name, profile) = config.select_profile(Some("prod")).unwrap().unwrap();
        assert_eq!(name, "prod");
        assert_eq!(profile.host.as_deref(), Some("prod"));

        let err = config.select_profile(Some("qa")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(ref n) if n == "qa"));
    }

    #[test]
    fn test_insert_refuses_overwrite_by_default() {
        let mut config = Config::default();
        config.insert_profile("dev", sample_profile("a"), false).unwrap();
        let err = config
            .insert_profile("dev", sample_profile("b"), false)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ProfileExists(_)));

        config.insert_profile("dev", sample_profile("b"), true).unwrap();
        assert_eq!(config.profiles["dev"].host.as_deref(), Some("b"));
    }

    #[test]
    fn test_remove_default_profile_clears_default() {
        let mut config = Config::default();
        config.insert_profile("dev", sample_profile("a"), false).unwrap();
        config.set_default_profile("dev").unwrap();
        config.remove_profile("dev").unwrap();
        assert!(config.default_profile.is_none());
        assert!(config.remove_profile("dev").is_err());
    }

    #[test]
    fn test_redacted_masks_password() {
        let redacted = sample_profile("a").redacted();
        assert_eq!(redacted.password.as_deref(), Some("********"));
        assert_eq!(redacted.user.as_deref(), Some("ibmuser"));
        assert!(ConnectionProfile::default().redacted().password.is_none());
    }
}
