//! `ims profiles` command - Connection profile management
//!
//! Profiles are stored in the config file and hold the connection flags of
//! one IMS Connect endpoint. Creating a profile captures the connection
//! flags given on the same command line.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::config_path;
use crate::cli::GlobalOpts;
use crate::core::{Config, ConnectionProfile};

#[derive(Subcommand, Debug)]
pub enum ProfilesCommands {
    /// List profiles
    List,

    /// Show one profile (default: the default profile)
    Show(ShowArgs),

    /// Create a profile from the connection flags
    Create(CreateArgs),

    /// Delete a profile
    Delete(NameArgs),

    /// Make a profile the default
    SetDefault(NameArgs),

    /// Show the path of the config file
    Path,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Profile name
    pub name: Option<String>,

    /// Print the password instead of masking it
    #[arg(long)]
    pub show_secrets: bool,
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Profile name
    pub name: String,

    /// Replace an existing profile of the same name
    #[arg(long)]
    pub overwrite: bool,

    /// Also make this the default profile
    #[arg(long = "set-default")]
    pub set_default: bool,
}

#[derive(clap::Args, Debug)]
pub struct NameArgs {
    /// Profile name
    pub name: String,
}

/// Run a profiles subcommand
pub fn run(cmd: ProfilesCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProfilesCommands::List => run_list(global),
        ProfilesCommands::Show(args) => run_show(args, global),
        ProfilesCommands::Create(args) => run_create(args, global),
        ProfilesCommands::Delete(args) => run_delete(args, global),
        ProfilesCommands::SetDefault(args) => run_set_default(args, global),
        ProfilesCommands::Path => {
            println!("{}", config_path(global)?.display());
            Ok(())
        }
    }
}

fn load(global: &GlobalOpts) -> Result<(std::path::PathBuf, Config)> {
    let path = config_path(global)?;
    let config = Config::load_from(&path).map_err(|e| miette::miette!("{}", e))?;
    Ok((path, config))
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let (_, config) = load(global)?;

    if config.profiles.is_empty() {
        if !global.quiet {
            println!(
                "{}",
                style("No profiles. Use 'ims profiles create <name> --host ...' to add one.").dim()
            );
        }
        return Ok(());
    }

    for (name, profile) in &config.profiles {
        let marker = if config.default_profile.as_deref() == Some(name.as_str()) {
            style("*").green().to_string()
        } else {
            " ".to_string()
        };
        let target = format!(
            "{}:{}",
            profile.host.as_deref().unwrap_or("?"),
            profile
                .port
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        println!("{} {:<20} {}", marker, style(name).cyan(), style(target).dim());
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (_, config) = load(global)?;
    let requested = args.name.as_deref().or(global.ims_profile.as_deref());

    let Some((name, profile)) = config
        .select_profile(requested)
        .map_err(|e| miette::miette!("{}", e))?
    else {
        return Err(miette::miette!(
            "No profile given and no default profile set"
        ));
    };

    let shown = if args.show_secrets {
        profile.clone()
    } else {
        profile.redacted()
    };

    if !global.quiet {
        println!("{} {}", style("Profile:").bold(), style(name).cyan());
    }
    print!("{}", serde_yml::to_string(&shown).into_diagnostic()?);
    Ok(())
}

fn run_create(args: CreateArgs, global: &GlobalOpts) -> Result<()> {
    let (path, mut config) = load(global)?;

    let profile: ConnectionProfile = global.connection.to_profile();
    if profile.host.is_none() {
        return Err(miette::miette!(
            "A profile needs at least --host (or IMS_HOST)"
        ));
    }

    config
        .insert_profile(&args.name, profile, args.overwrite)
        .map_err(|e| miette::miette!("{}", e))?;
    if args.set_default || config.default_profile.is_none() {
        config
            .set_default_profile(&args.name)
            .map_err(|e| miette::miette!("{}", e))?;
    }
    config.save_to(&path).map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Created profile {} in {}",
            style("✓").green(),
            style(&args.name).cyan(),
            path.display()
        );
    }
    Ok(())
}

fn run_delete(args: NameArgs, global: &GlobalOpts) -> Result<()> {
    let (path, mut config) = load(global)?;

    config
        .remove_profile(&args.name)
        .map_err(|e| miette::miette!("{}", e))?;
    config.save_to(&path).map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Deleted profile {}",
            style("✓").green(),
            style(&args.name).cyan()
        );
    }
    Ok(())
}

fn run_set_default(args: NameArgs, global: &GlobalOpts) -> Result<()> {
    let (path, mut config) = load(global)?;

    config
        .set_default_profile(&args.name)
        .map_err(|e| miette::miette!("{}", e))?;
    config.save_to(&path).map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Default profile is now {}",
            style("✓").green(),
            style(&args.name).cyan()
        );
    }
    Ok(())
}
