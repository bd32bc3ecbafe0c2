//! Query transactions, programs and regions

use serde_json::Value;
use tracing::debug;

use crate::api::client::ImsRestClient;
use crate::api::parms::{QueryProgramParms, QueryRegionParms, QueryTransactionParms};
use crate::api::query::QueryString;
use crate::api::{constants, validate, ApiError};
use crate::core::ImsSession;

/// Names to query, `*` when none given
fn names_or_wildcard(names: &[String]) -> Vec<&str> {
    if names.is_empty() {
        vec![constants::DEFAULT_NAME]
    } else {
        names.iter().map(String::as_str).collect()
    }
}

/// Attributes to show, `ALL` when none given
fn attributes_or_all(attributes: &[String]) -> Vec<&str> {
    if attributes.is_empty() {
        vec![constants::DEFAULT_ATTRIBUTE]
    } else {
        attributes.iter().map(String::as_str).collect()
    }
}

/// Query transactions (`GET /transaction?names=..&attributes=..`)
pub fn query_transaction<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &QueryTransactionParms,
) -> Result<Value, ApiError> {
    validate::required_not_blank(&parms.names, "IMS Transaction name")?;
    if let Some(class) = parms.class {
        if !constants::CLASS_RANGE.contains(&class) {
            return Err(ApiError::Validation(format!(
                "Transaction class must be between {} and {}, got {}",
                constants::CLASS_RANGE.start(),
                constants::CLASS_RANGE.end(),
                class
            )));
        }
    }

    let mut query = QueryString::new();
    query
        .push_list(constants::NAMES, &names_or_wildcard(&parms.names))
        .push_list(constants::ATTRIBUTES, &attributes_or_all(&parms.attributes))
        .push_list(constants::STATUS, &parms.status)
        .push_opt(constants::CLASS, parms.class);
    if let Some((comparison, value)) = parms.queue_count {
        query
            .push(constants::QCNT_COMPARISON, comparison)
            .push(constants::QCNT_VALUE, value);
    }
    query.push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::TRANSACTION);
    debug!(%resource, "query transaction");
    Ok(client.get_expect_json(session, &resource, &[])?)
}

/// Query programs (`GET /program?names=..&attributes=..`)
pub fn query_program<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &QueryProgramParms,
) -> Result<Value, ApiError> {
    validate::required_not_blank(&parms.names, "IMS Program name")?;

    let mut query = QueryString::new();
    query
        .push_list(constants::NAMES, &names_or_wildcard(&parms.names))
        .push_list(constants::ATTRIBUTES, &attributes_or_all(&parms.attributes))
        .push_list(constants::STATUS, &parms.status)
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::PROGRAM);
    debug!(%resource, "query program");
    Ok(client.get_expect_json(session, &resource, &[])?)
}

/// Query dependent regions (`GET /region?dc=..&region=..`)
///
/// Region status is requested when neither `dc` nor `region` is set.
pub fn query_region<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &QueryRegionParms,
) -> Result<Value, ApiError> {
    let region = parms.region || !parms.dc;

    let mut query = QueryString::new();
    query
        .push(constants::DC, parms.dc)
        .push(constants::REGION_STATUS, region)
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::REGION);
    debug!(%resource, "query region");
    Ok(client.get_expect_json(session, &resource, &[])?)
}
