//! `ims stop` command - Stop transactions, programs and regions

use clap::Subcommand;
use miette::Result;

use crate::api::{
    self, HttpRestClient, ProgramStopAction, StopRegionParms, TransactionStopAction,
    UpdateProgramParms, UpdateTransactionParms,
};
use crate::cli::helpers::resolve_session;
use crate::cli::output::print_response;
use crate::cli::GlobalOpts;

#[derive(Subcommand, Debug)]
pub enum StopCommands {
    /// Stop one or more transactions
    #[command(visible_alias = "tran")]
    Transaction(StopTransactionArgs),

    /// Stop one or more programs
    #[command(visible_alias = "pgm")]
    Program(StopProgramArgs),

    /// Stop dependent regions by region number or job name
    #[command(visible_alias = "reg")]
    Region(StopRegionArgs),
}

#[derive(clap::Args, Debug)]
pub struct StopTransactionArgs {
    /// Transaction names (space or comma separated)
    #[arg(required = true, value_delimiter = ',')]
    pub names: Vec<String>,

    /// What to stop (default: SCHD)
    #[arg(long, value_delimiter = ',', ignore_case = true)]
    pub stop: Vec<TransactionStopAction>,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct StopProgramArgs {
    /// Program names (space or comma separated)
    #[arg(required = true, value_delimiter = ',')]
    pub names: Vec<String>,

    /// What to stop (default: SCHD)
    #[arg(long, value_delimiter = ',', ignore_case = true)]
    pub stop: Vec<ProgramStopAction>,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct StopRegionArgs {
    /// Region numbers to stop
    #[arg(long, value_delimiter = ',', conflicts_with = "job_name")]
    pub region_ids: Vec<u32>,

    /// Job name of the region to stop
    #[arg(long, short = 'j')]
    pub job_name: Option<String>,

    /// Abnormally terminate the region with a dump
    #[arg(long, conflicts_with = "cancel")]
    pub abdump: bool,

    /// Cancel a region that did not stop normally
    #[arg(long)]
    pub cancel: bool,

    /// Stop the region only while it processes this transaction
    #[arg(long)]
    pub transaction: Option<String>,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

/// Run a stop subcommand
pub fn run(cmd: StopCommands, global: &GlobalOpts) -> Result<()> {
    let session = resolve_session(global)?;
    let client = HttpRestClient::new();

    let response = match cmd {
        StopCommands::Transaction(args) => {
            let parms = UpdateTransactionParms::new(args.names)
                .with_stop(args.stop)
                .with_route(args.route);
            api::stop_transaction(&client, &session, &parms)
        }
        StopCommands::Program(args) => {
            let parms = UpdateProgramParms::new(args.names)
                .with_stop(args.stop)
                .with_route(args.route);
            api::stop_program(&client, &session, &parms)
        }
        StopCommands::Region(args) => {
            let parms = StopRegionParms {
                reg_num: args.region_ids,
                job_name: args.job_name,
                abdump: args.abdump,
                cancel: args.cancel,
                transaction: args.transaction,
                route: args.route,
            };
            api::stop_region(&client, &session, &parms)
        }
    }
    .map_err(|e| miette::miette!("{}", e))?;

    print_response(&response, global)
}
