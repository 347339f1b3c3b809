//! Soft-failing JSON decoding.
//!
//! Domain types opt in by deriving `Deserialize`. A payload decodes only if
//! it is a JSON array whose every element decodes; one bad element fails the
//! whole payload.

use log::debug;
use serde::de::DeserializeOwned;

/// Decode a JSON array payload into a list of `T`.
///
/// Returns `None` on malformed JSON, a non-array payload, or any element
/// with a missing or mistyped required field. An empty payload is not JSON.
pub fn decode_array<T: DeserializeOwned>(data: &[u8]) -> Option<Vec<T>> {
    match serde_json::from_slice::<Vec<T>>(data) {
        Ok(objects) => Some(objects),
        Err(e) => {
            debug!("payload of {} bytes did not decode: {e}", data.len());
            None
        }
    }
}
