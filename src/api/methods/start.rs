//! Start transactions, programs and regions

use serde_json::Value;
use tracing::debug;

use crate::api::client::ImsRestClient;
use crate::api::parms::{StartRegionParms, UpdateProgramParms, UpdateTransactionParms};
use crate::api::query::QueryString;
use crate::api::{constants, validate, ApiError};
use crate::core::ImsSession;

/// Start one or more transactions (`PUT /transaction?names=..&start=..`)
pub fn start_transaction<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &UpdateTransactionParms,
) -> Result<Value, ApiError> {
    validate::resource_names(&parms.names, "Transaction")?;

    let mut query = QueryString::new();
    query
        .push_list(constants::NAMES, &parms.names)
        .push_list(constants::START, parms.start_actions())
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::TRANSACTION);
    debug!(%resource, "start transaction");
    Ok(client.put_expect_json(session, &resource, &[], None)?)
}

/// Start one or more programs (`PUT /program?names=..&start=..`)
pub fn start_program<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &UpdateProgramParms,
) -> Result<Value, ApiError> {
    validate::resource_names(&parms.names, "Program")?;

    let mut query = QueryString::new();
    query
        .push_list(constants::NAMES, &parms.names)
        .push_list(constants::START, parms.start_actions())
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::PROGRAM);
    debug!(%resource, "start program");
    Ok(client.put_expect_json(session, &resource, &[], None)?)
}

/// Start a dependent region from a PROCLIB member
pub fn start_region<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &StartRegionParms,
) -> Result<Value, ApiError> {
    validate::required_value(
        parms.member_name.as_ref(),
        "IMS region member name is required",
    )?;
    validate::required_not_blank(
        parms.member_name.as_slice(),
        "IMS Region member name",
    )?;

    let mut query = QueryString::new();
    query
        .push_list(constants::MEMBER, parms.member_name.as_slice())
        .push_opt(constants::LOCAL, parms.local)
        .push_opt(constants::JOB_NAME, parms.job_name.as_deref())
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::REGION_START);
    debug!(%resource, "start region");
    Ok(client.put_expect_json(session, &resource, &[], None)?)
}
