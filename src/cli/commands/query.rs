//! `ims query` command - Show the status of transactions, programs and regions

use clap::Subcommand;
use miette::Result;

use crate::api::{
    self, HttpRestClient, QueryProgramParms, QueryRegionParms, QueryTransactionParms,
    QueueCountComparison,
};
use crate::cli::helpers::resolve_session;
use crate::cli::output::print_response;
use crate::cli::GlobalOpts;

#[derive(Subcommand, Debug)]
pub enum QueryCommands {
    /// Query transactions (default: all)
    #[command(visible_alias = "tran")]
    Transaction(QueryTransactionArgs),

    /// Query programs (default: all)
    #[command(visible_alias = "pgm")]
    Program(QueryProgramArgs),

    /// Query dependent regions
    #[command(visible_alias = "reg")]
    Region(QueryRegionArgs),
}

#[derive(clap::Args, Debug)]
pub struct QueryTransactionArgs {
    /// Transaction names or masks (default: *)
    #[arg(value_delimiter = ',')]
    pub names: Vec<String>,

    /// Attributes to show (default: ALL)
    #[arg(long, value_delimiter = ',')]
    pub attributes: Vec<String>,

    /// Only show transactions in these states
    #[arg(long, value_delimiter = ',')]
    pub status: Vec<String>,

    /// Only show transactions of this class (1-999)
    #[arg(long)]
    pub class: Option<u16>,

    /// Queue count comparison, used with --queue-count
    #[arg(long, ignore_case = true, requires = "queue_count")]
    pub queue_count_op: Option<QueueCountComparison>,

    /// Queue count to compare against
    #[arg(long, requires = "queue_count_op")]
    pub queue_count: Option<u32>,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct QueryProgramArgs {
    /// Program names or masks (default: *)
    #[arg(value_delimiter = ',')]
    pub names: Vec<String>,

    /// Attributes to show (default: ALL)
    #[arg(long, value_delimiter = ',')]
    pub attributes: Vec<String>,

    /// Only show programs in these states
    #[arg(long, value_delimiter = ',')]
    pub status: Vec<String>,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct QueryRegionArgs {
    /// Show DC (communication) status
    #[arg(long)]
    pub dc: bool,

    /// Show region status (default when --dc is not given)
    #[arg(long)]
    pub region: bool,

    /// IMS members to route the command to
    #[arg(long, value_delimiter = ',')]
    pub route: Vec<String>,
}

/// Run a query subcommand
pub fn run(cmd: QueryCommands, global: &GlobalOpts) -> Result<()> {
    let session = resolve_session(global)?;
    let client = HttpRestClient::new();

    let response = match cmd {
        QueryCommands::Transaction(args) => {
            let parms = QueryTransactionParms {
                names: args.names,
                attributes: args.attributes,
                status: args.status,
                class: args.class,
                queue_count: args.queue_count_op.zip(args.queue_count),
                route: args.route,
            };
            api::query_transaction(&client, &session, &parms)
        }
        QueryCommands::Program(args) => {
            let parms = QueryProgramParms {
                names: args.names,
                attributes: args.attributes,
                status: args.status,
                route: args.route,
            };
            api::query_program(&client, &session, &parms)
        }
        QueryCommands::Region(args) => {
            let parms = QueryRegionParms {
                dc: args.dc,
                region: args.region,
                route: args.route,
            };
            api::query_region(&client, &session, &parms)
        }
    }
    .map_err(|e| miette::miette!("{}", e))?;

    print_response(&response, global)
}
