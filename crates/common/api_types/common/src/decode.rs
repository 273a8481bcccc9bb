use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::DecodeError;

/// Decode a complete response body into `T`.
///
/// Failures are mapped onto [`DecodeError`] kinds. Nothing is logged on failure, the caller
/// decides whether the error warrants a retry or an operator-visible message.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    trace!(
        bytes = body.len(),
        target_type = std::any::type_name::<T>(),
        "Decoding response body"
    );
    Ok(serde_json::from_slice(body)?)
}
