//! `ims start` command - Start transactions, programs and regions

use clap::Subcommand;
use miette::Result;

use crate::api::{
    self, HttpRestClient, ProgramStartAction, StartRegionParms, TransactionStartAction,
    UpdateProgramParms, UpdateTransactionParms,
};
use crate::cli::helpers::resolve_session;
use crate::cli::output::print_response;
use crate::cli::GlobalOpts;

#[derive(Subcommand, Debug)]
pub enum StartCommands {
    /// Start one or more transactions
    #[command(visible_alias = "tran")]
    Transaction(StartTransactionArgs),

    /// Start one or more programs
    #[command(visible_alias = "pgm")]
    Program(StartProgramArgs),

    /// Start a dependent region
    #[command(visible_alias = "reg")]
    Region(StartRegionArgs),
}

#[derive(clap::Args, Debug)]
pub struct StartTransactionArgs {
    /// Transaction names (space or comma separated)
    #[arg(required = true, value_delimiter = ',')]
    pub names: Vec<String>,

    /// What to start (default: SCHD)
    #[arg(long, value_delimiter = ',', ignore_case = true)]
    pub start: Vec<TransactionStartAction>,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct StartProgramArgs {
    /// Program names (space or comma separated)
    #[arg(required = true, value_delimiter = ',')]
    pub names: Vec<String>,

    /// What to start (default: SCHD)
    #[arg(long, value_delimiter = ',', ignore_case = true)]
    pub start: Vec<ProgramStartAction>,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct StartRegionArgs {
    /// PROCLIB member containing the region JCL
    #[arg(long, short = 'm')]
    pub member_name: String,

    /// Override the job name in the member
    #[arg(long, short = 'j')]
    pub job_name: Option<String>,

    /// Start the region on the local IMS only
    #[arg(long, short = 'l')]
    pub local: bool,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

/// Run a start subcommand
pub fn run(cmd: StartCommands, global: &GlobalOpts) -> Result<()> {
    let session = resolve_session(global)?;
    let client = HttpRestClient::new();

    let response = match cmd {
        StartCommands::Transaction(args) => {
            let parms = UpdateTransactionParms::new(args.names)
                .with_start(args.start)
                .with_route(args.route);
            api::start_transaction(&client, &session, &parms)
        }
        StartCommands::Program(args) => {
            let parms = UpdateProgramParms::new(args.names)
                .with_start(args.start)
                .with_route(args.route);
            api::start_program(&client, &session, &parms)
        }
        StartCommands::Region(args) => {
            let parms = StartRegionParms {
                member_name: Some(args.member_name),
                job_name: args.job_name,
                local: args.local.then_some(true),
                route: args.route,
            };
            api::start_region(&client, &session, &parms)
        }
    }
    .map_err(|e| miette::miette!("{}", e))?;

    print_response(&response, global)
}
