//! Presence checks applied before any storage operation.

use ::validator::Validate;
use std::num::IntErrorKind;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUserPayload, UserFields};

/// Reject fields where any of the four text attributes is empty.
///
/// Whitespace counts as present; values are not trimmed.
pub fn validate_required(fields: &UserFields) -> UserResult<()> {
    fields.validate().map_err(|errors| {
        let mut names: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort();
        UserError::Validation(format!("missing required field(s): {}", names.join(", ")))
    })
}

/// The id an update targets; the body must carry one.
pub fn require_id(payload: &UpdateUserPayload) -> UserResult<i32> {
    payload
        .id
        .ok_or_else(|| UserError::Validation("missing required field(s): id".to_string()))
}

/// Parse the `id` query parameter.
///
/// Missing, empty, non-integer and out-of-`i32`-range values are rejected.
pub fn parse_id(raw: Option<&str>) -> UserResult<i32> {
    match raw {
        None | Some("") => Err(UserError::InvalidId("id query parameter is required".to_string())),
        Some(value) => value.parse::<i32>().map_err(|e| {
            let reason = match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    "is out of range for a user id"
                }
                _ => "is not an integer id",
            };
            UserError::InvalidId(format!("'{}' {}", value, reason))
        }),
    }
}
