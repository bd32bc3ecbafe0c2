//! Stop transactions, programs and regions

use serde_json::Value;
use tracing::debug;

use crate::api::client::ImsRestClient;
use crate::api::parms::{StopRegionParms, UpdateProgramParms, UpdateTransactionParms};
use crate::api::query::QueryString;
use crate::api::{constants, validate, ApiError};
use crate::core::ImsSession;

/// Stop one or more transactions (`PUT /transaction?names=..&stop=..`)
pub fn stop_transaction<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &UpdateTransactionParms,
) -> Result<Value, ApiError> {
    validate::resource_names(&parms.names, "Transaction")?;

    let mut query = QueryString::new();
    query
        .push_list(constants::NAMES, &parms.names)
        .push_list(constants::STOP, parms.stop_actions())
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::TRANSACTION);
    debug!(%resource, "stop transaction");
    Ok(client.put_expect_json(session, &resource, &[], None)?)
}

/// Stop one or more programs (`PUT /program?names=..&stop=..`)
pub fn stop_program<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &UpdateProgramParms,
) -> Result<Value, ApiError> {
    validate::resource_names(&parms.names, "Program")?;

    let mut query = QueryString::new();
    query
        .push_list(constants::NAMES, &parms.names)
        .push_list(constants::STOP, parms.stop_actions())
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::PROGRAM);
    debug!(%resource, "stop program");
    Ok(client.put_expect_json(session, &resource, &[], None)?)
}

/// Stop dependent regions by region number or job name
///
/// Exactly one of `reg_num` and `job_name` must be given.
pub fn stop_region<C: ImsRestClient + ?Sized>(
    client: &C,
    session: &ImsSession,
    parms: &StopRegionParms,
) -> Result<Value, ApiError> {
    let by_number = !parms.reg_num.is_empty();
    validate::mutually_exclusive(
        ("reg_num", by_number),
        ("job_name", parms.job_name.is_some()),
    )?;
    match parms.job_name.as_deref() {
        Some(job_name) => validate::required_not_blank(&[job_name], "IMS Region job name")?,
        None if !by_number => {
            return Err(ApiError::Validation(
                "IMS region number or job name is required".to_string(),
            ))
        }
        None => {}
    }
    validate::mutually_exclusive(("abdump", parms.abdump), ("cancel", parms.cancel))?;

    let mut query = QueryString::new();
    query
        .push_list(constants::REGION_NUMBER, &reg_nums(&parms.reg_num))
        .push_opt(constants::JOB_NAME, parms.job_name.as_deref())
        .push_opt(constants::ABDUMP, parms.abdump.then_some(true))
        .push_opt(constants::CANCEL, parms.cancel.then_some(true))
        .push_opt(constants::TRANSACTION_NAME, parms.transaction.as_deref())
        .push_list(constants::ROUTE, &parms.route);

    let resource = query.resource(constants::REGION_STOP);
    debug!(%resource, "stop region");
    Ok(client.put_expect_json(session, &resource, &[], None)?)
}

fn reg_nums(numbers: &[u32]) -> Vec<String> {
    numbers.iter().map(u32::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::mock::RecordingClient;
    use crate::api::methods::test_support::dummy_session;
    use crate::api::parms::{ProgramStopAction, TransactionStopAction};
    use serde_json::json;

    #[test]
    fn test_stop_transaction_defaults_to_schd() {
        let content = json!({"data": [{"tran": "IVTNO", "cc": "0"}]});
        let client = RecordingClient::returning(content.clone());
        let parms = UpdateTransactionParms::new(["IVTNO"]);

        let response = stop_transaction(&client, &dummy_session(), &parms).unwrap();

        assert_eq!(response, content);
        assert_eq!(client.calls()[0].verb, "PUT");
        assert_eq!(client.calls()[0].resource, "/transaction?names=IVTNO&stop=SCHD");
    }

    #[test]
    fn test_stop_transaction_ignores_start_actions() {
        let client = RecordingClient::returning(Value::Null);
        let parms = UpdateTransactionParms::new(["IVTNO"])
            .with_stop(vec![TransactionStopAction::Q, TransactionStopAction::Trace])
            .with_route(vec!["IMS1".into(), "IMS2".into()]);

        stop_transaction(&client, &dummy_session(), &parms).unwrap();

        assert_eq!(
            client.calls()[0].resource,
            "/transaction?names=IVTNO&stop=Q,TRACE&route=IMS1,IMS2"
        );
    }

    #[test]
    fn test_stop_program() {
        let client = RecordingClient::returning(Value::Null);
        let parms = UpdateProgramParms::new(["DFSSAM01"]).with_stop(vec![ProgramStopAction::Trace]);

        stop_program(&client, &dummy_session(), &parms).unwrap();

        assert_eq!(client.calls()[0].resource, "/program?names=DFSSAM01&stop=TRACE");
    }

    #[test]
    fn test_stop_program_missing_name() {
        let client = RecordingClient::returning(Value::Null);

        let err = stop_program(&client, &dummy_session(), &UpdateProgramParms::default())
            .unwrap_err();

        assert!(err.to_string().contains("IMS program name is required"));
        assert!(client.calls().is_empty());
    }

    #[test]
    fn test_stop_region_by_number() {
        let client = RecordingClient::returning(Value::Null);
        let parms = StopRegionParms {
            reg_num: vec![1, 2],
            abdump: true,
            transaction: Some("IVTNO".into()),
            ..StopRegionParms::default()
        };

        stop_region(&client, &dummy_session(), &parms).unwrap();

        assert_eq!(
            client.calls()[0].resource,
            "/region/stop?reg_num=1,2&abdump=true&transaction=IVTNO"
        );
    }

    #[test]
    fn test_stop_region_by_job_name() {
        let client = RecordingClient::returning(Value::Null);
        let parms = StopRegionParms {
            job_name: Some("MSGJOB".into()),
            cancel: true,
            ..StopRegionParms::default()
        };

        stop_region(&client, &dummy_session(), &parms).unwrap();

        assert_eq!(
            client.calls()[0].resource,
            "/region/stop?job_name=MSGJOB&cancel=true"
        );
    }

    #[test]
    fn test_stop_region_validation() {
        let client = RecordingClient::returning(Value::Null);
        let session = dummy_session();

        let err = stop_region(&client, &session, &StopRegionParms::default()).unwrap_err();
        assert!(err.to_string().contains("region number or job name is required"));

        let both = StopRegionParms {
            reg_num: vec![1],
            job_name: Some("MSGJOB".into()),
            ..StopRegionParms::default()
        };
        assert!(stop_region(&client, &session, &both).unwrap_err().is_validation());

        let dump_and_cancel = StopRegionParms {
            reg_num: vec![1],
            abdump: true,
            cancel: true,
            ..StopRegionParms::default()
        };
        let err = stop_region(&client, &session, &dump_and_cancel).unwrap_err();
        assert!(err.to_string().contains("'abdump' and 'cancel'"));

        assert!(client.calls().is_empty());
    }
}
