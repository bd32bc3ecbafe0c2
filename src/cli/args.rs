//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, profiles::ProfilesCommands, query::QueryCommands,
    start::StartCommands, stop::StopCommands,
};
use crate::core::{ConnectionProfile, Protocol};

#[derive(Parser)]
#[command(name = "ims")]
#[command(author, version, about = "IMS Connect command-line client")]
#[command(long_about = "Start, stop and query IMS transactions, programs and regions through the IMS Operations REST API.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Connection profile to use (default: the profile marked default)
    #[arg(long, global = true, env = "IMS_PROFILE")]
    pub ims_profile: Option<String>,

    /// Config file (default: ~/.config/ims/config.yaml)
    #[arg(long, global = true, env = "IMS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionOpts,
}

/// Connection flags; each overrides the selected profile
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ConnectionOpts {
    /// Host name of the IMS Operations REST API
    #[arg(long, short = 'H', global = true, env = "IMS_HOST")]
    pub host: Option<String>,

    /// Port of the IMS Operations REST API
    #[arg(long, short = 'P', global = true, env = "IMS_PORT")]
    pub port: Option<u16>,

    /// User name for basic authentication
    #[arg(long, short = 'u', global = true, env = "IMS_USER")]
    pub user: Option<String>,

    /// Password for basic authentication
    #[arg(long, visible_alias = "pw", global = true, env = "IMS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Protocol of the REST API
    #[arg(long, global = true, env = "IMS_PROTOCOL")]
    pub protocol: Option<Protocol>,

    /// Path prefix of the REST API on the host
    #[arg(long, global = true, env = "IMS_BASE_PATH")]
    pub base_path: Option<String>,

    /// Reject self-signed or otherwise untrusted certificates
    #[arg(long, global = true, env = "IMS_REJECT_UNAUTHORIZED")]
    pub reject_unauthorized: Option<bool>,

    /// Host name of the IMS Connect instance commands are routed to
    #[arg(long, visible_alias = "ich", global = true, env = "IMS_CONNECT_HOST")]
    pub ims_connect_host: Option<String>,

    /// Port of the IMS Connect instance
    #[arg(long, visible_alias = "icp", global = true, env = "IMS_CONNECT_PORT")]
    pub ims_connect_port: Option<u16>,

    /// IMSplex name
    #[arg(long, short = 'x', global = true, env = "IMS_PLEX")]
    pub plex: Option<String>,
}

impl ConnectionOpts {
    /// Flags as a profile layer
    pub fn to_profile(&self) -> ConnectionProfile {
        ConnectionProfile {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
            protocol: self.protocol,
            base_path: self.base_path.clone(),
            reject_unauthorized: self.reject_unauthorized,
            ims_connect_host: self.ims_connect_host.clone(),
            ims_connect_port: self.ims_connect_port,
            plex: self.plex.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start transactions, programs or regions
    #[command(subcommand)]
    Start(StartCommands),

    /// Stop transactions, programs or regions
    #[command(subcommand)]
    Stop(StopCommands),

    /// Query transactions, programs or regions
    #[command(subcommand)]
    Query(QueryCommands),

    /// Manage connection profiles
    #[command(subcommand)]
    Profiles(ProfilesCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Same as yaml
    #[default]
    Auto,
    /// Response rows as YAML, preceded by one status line per IMS member
    Yaml,
    /// Full response as JSON
    Json,
    /// Response rows as a table
    Table,
}
