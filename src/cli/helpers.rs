//! Shared helper functions for CLI commands
//!
//! Resolves the config file and the connection session every IMS command
//! runs against.

use miette::Result;
use std::path::PathBuf;
use tracing::info;

use crate::cli::GlobalOpts;
use crate::core::{Config, ConnectionProfile, ImsSession};

/// Config file selected by `--config` / `IMS_CONFIG`, or the per-user default
pub fn config_path(global: &GlobalOpts) -> Result<PathBuf> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => Config::default_path().map_err(|e| miette::miette!("{}", e)),
    }
}

/// Merge the selected profile with flags and environment into a session
pub fn resolve_session(global: &GlobalOpts) -> Result<ImsSession> {
    let path = config_path(global)?;
    let config = Config::load_from(&path).map_err(|e| miette::miette!("{}", e))?;
    let profile = merged_profile(&config, global)?;
    ImsSession::from_profile(&profile).map_err(|e| miette::miette!("{}", e))
}

/// Profile layer first, then flags/environment on top
pub fn merged_profile(config: &Config, global: &GlobalOpts) -> Result<ConnectionProfile> {
    let mut merged = match config
        .select_profile(global.ims_profile.as_deref())
        .map_err(|e| miette::miette!("{}", e))?
    {
        Some((name, profile)) => {
            info!(profile = name, "using connection profile");
            profile.clone()
        }
        None => ConnectionProfile::default(),
    };
    merged.merge(global.connection.to_profile());
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ConnectionOpts, OutputFormat};

    fn global(profile: Option<&str>, connection: ConnectionOpts) -> GlobalOpts {
        GlobalOpts {
            format: OutputFormat::Auto,
            quiet: false,
            verbose: false,
            ims_profile: profile.map(str::to_string),
            config: None,
            connection,
        }
    }

    fn config_with_dev() -> Config {
        let mut config = Config::default();
        config
            .insert_profile(
                "dev",
                ConnectionProfile {
                    host: Some("dev.example.com".into()),
                    port: Some(9443),
                    user: Some("ibmuser".into()),
                    ..ConnectionProfile::default()
                },
                false,
            )
            .unwrap();
        config
    }

    #[test]
    fn test_flags_override_profile() {
        let config = config_with_dev();
        let flags = ConnectionOpts {
            port: Some(8443),
            plex: Some("PLEX1".into()),
            ..ConnectionOpts::default()
        };

        let merged = merged_profile(&config, &global(Some("dev"), flags)).unwrap();

        assert_eq!(merged.host.as_deref(), Some("dev.example.com"));
        assert_eq!(merged.port, Some(8443));
        assert_eq!(merged.user.as_deref(), Some("ibmuser"));
        assert_eq!(merged.plex.as_deref(), Some("PLEX1"));
    }

    #[test]
    fn test_default_profile_used_when_none_named() {
        let mut config = config_with_dev();
        config.set_default_profile("dev").unwrap();

        let merged = merged_profile(&config, &global(None, ConnectionOpts::default())).unwrap();

        assert_eq!(merged.host.as_deref(), Some("dev.example.com"));
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let config = config_with_dev();
        let err = merged_profile(&config, &global(Some("prod"), ConnectionOpts::default()))
            .unwrap_err();
        assert!(err.to_string().contains("Profile 'prod' does not exist"));
    }
}
