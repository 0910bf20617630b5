//! Extraction of typed fields from raw response bodies.
//!
//! The platform's responses are ad-hoc JSON: the error flag may be a native
//! boolean or the literal strings `"true"`/`"false"`, and the transition
//! history lives under an `lcs` array whose element shape is described in
//! [`crate::history`]. All schema violations surface as
//! [`LifecycleError::MalformedResponse`].

use crate::error::LifecycleError;
use crate::history::{StateChangeHistory, StateTransitionEvent};
use serde_json::Value;

/// Extract the `error` flag from a raw response body.
///
/// Accepts native booleans as well as the literal strings `"true"` and
/// `"false"`, since the platform is inconsistent about the encoding.
///
/// # Errors
///
/// Returns [`LifecycleError::MalformedResponse`] when the body is not valid
/// JSON, lacks an `error` field, or the field is neither a boolean nor one
/// of the accepted literals.
pub fn parse_error_flag(raw_body: &str) -> Result<bool, LifecycleError> {
    let root: Value = serde_json::from_str(raw_body).map_err(|e| {
        LifecycleError::MalformedResponse {
            detail: format!("response body is not valid JSON: {e}"),
        }
    })?;

    let flag = root
        .get("error")
        .ok_or_else(|| LifecycleError::MalformedResponse {
            detail: "response body has no 'error' field".to_string(),
        })?;

    match flag {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        other => Err(LifecycleError::MalformedResponse {
            detail: format!("'error' field is not a boolean: {other}"),
        }),
    }
}

/// Extract the lifecycle transition history from a raw response body.
///
/// # Errors
///
/// Returns [`LifecycleError::MalformedResponse`] when the body is not valid
/// JSON, the `lcs` field is missing or not an array, or any element fails
/// to decode (the error names the offending index).
pub fn parse_history(raw_body: &str) -> Result<StateChangeHistory, LifecycleError> {
    let root: Value = serde_json::from_str(raw_body).map_err(|e| {
        LifecycleError::MalformedResponse {
            detail: format!("response body is not valid JSON: {e}"),
        }
    })?;

    let entries = root
        .get("lcs")
        .ok_or_else(|| LifecycleError::MalformedResponse {
            detail: "response body has no 'lcs' field".to_string(),
        })?
        .as_array()
        .ok_or_else(|| LifecycleError::MalformedResponse {
            detail: "'lcs' field is not an array".to_string(),
        })?;

    let mut events = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let event: StateTransitionEvent =
            serde_json::from_value(entry.clone()).map_err(|e| {
                LifecycleError::MalformedResponse {
                    detail: format!("'lcs' element at index {index} failed to decode: {e}"),
                }
            })?;
        events.push(event);
    }

    Ok(StateChangeHistory::new(events))
}
