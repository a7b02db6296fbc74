//! Response decoding.
//!
//! The body is buffered once and parsed twice: first as the API error
//! envelope, then as the caller's target type. A non-empty `message` is the
//! only thing that marks an error; `success` is ignored, so
//! `{"success":false,"message":""}` goes on to decode as a normal payload.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Error, Result};
use crate::http::RawResponse;

/// Decode `response` into `T`, surfacing an API error envelope first.
pub fn decode_into<T: DeserializeOwned>(endpoint: &str, response: &RawResponse) -> Result<T> {
    if let Some(api_error) = probe_api_error(&response.body) {
        debug!(
            endpoint = endpoint,
            status = response.status.as_u16(),
            message = %api_error.message,
            "api returned an error envelope"
        );
        return Err(Error::Api {
            endpoint: endpoint.to_string(),
            status: response.status,
            source: api_error,
        });
    }

    serde_json::from_slice(&response.body).map_err(|source| Error::Deserialization {
        endpoint: endpoint.to_string(),
        source,
    })
}

fn probe_api_error(body: &[u8]) -> Option<ApiError> {
    serde_json::from_slice::<ApiError>(body)
        .ok()
        .filter(|err| !err.message.is_empty())
}
