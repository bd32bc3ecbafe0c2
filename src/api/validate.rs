//! Parameter validation run before any request is built
//!
//! Every check is a pure function returning `ApiError::Validation` with a
//! message that names the offending field.

use crate::api::ApiError;

/// Fail with `message` when `values` is empty
pub fn required<T>(values: &[T], message: &str) -> Result<(), ApiError> {
    if values.is_empty() {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}

/// Fail when `value` is absent
pub fn required_value<T>(value: Option<&T>, message: &str) -> Result<(), ApiError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ApiError::Validation(message.to_string())),
    }
}

/// Fail when any entry of `values` is empty or only whitespace
pub fn required_not_blank<S: AsRef<str>>(values: &[S], field: &str) -> Result<(), ApiError> {
    if values.iter().any(|v| v.as_ref().trim().is_empty()) {
        return Err(ApiError::Validation(format!(
            "Required parameter '{}' must not be blank",
            field
        )));
    }
    Ok(())
}

/// Fail when both flags are set
pub fn mutually_exclusive(a: (&str, bool), b: (&str, bool)) -> Result<(), ApiError> {
    if a.1 && b.1 {
        return Err(ApiError::Validation(format!(
            "Parameters '{}' and '{}' cannot be specified together",
            a.0, b.0
        )));
    }
    Ok(())
}

/// Validate the resource names of a start/stop request
///
/// `label` is the capitalized resource kind, e.g. "Transaction".
pub fn resource_names(names: &[String], label: &str) -> Result<(), ApiError> {
    required(
        names,
        &format!("IMS {} name is required", label.to_lowercase()),
    )?;
    required_not_blank(names, &format!("IMS {} name", label))
}
