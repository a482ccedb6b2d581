//! JSON encoding of users and decoding of request bodies.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{UserError, UserResult};

/// Decode a request body into one of the payload types.
///
/// Syntax errors and type mismatches are `Decode` errors; absent fields are
/// left at their defaults for the validator to reject.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> UserResult<T> {
    serde_json::from_slice(bytes).map_err(|e| UserError::Decode(e.to_string()))
}

/// Encode a user or list of users as a JSON body.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> UserResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| UserError::Encode(e.to_string()))
}
