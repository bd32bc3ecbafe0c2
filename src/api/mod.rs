//! IMS Operations REST API: parameter records, validation, request
//! builders and the REST client seam

pub mod client;
pub mod constants;
pub mod error;
pub mod methods;
pub mod parms;
pub mod query;
pub mod response;
pub mod validate;

pub use client::{HttpRestClient, ImsRestClient, RestError};
pub use error::ApiError;
pub use methods::{
    query_program, query_region, query_transaction, start_program, start_region,
    start_transaction, stop_program, stop_region, stop_transaction,
};
pub use parms::{
    ProgramStartAction, ProgramStopAction, QueryProgramParms, QueryRegionParms,
    QueryTransactionParms, QueueCountComparison, StartRegionParms, StopRegionParms,
    TransactionStartAction, TransactionStopAction, UpdateProgramParms, UpdateTransactionParms,
};
pub use response::ImsResponse;
