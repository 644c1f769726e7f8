//! Decode a response body into a `Collection`.

use super::{Collection, Envelope};

/// Parse a `{"collection": {"items": [...]}}` body. A missing `items` array is an error.
pub fn parse_collection(body: &[u8]) -> Result<Collection, serde_json::Error> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    Ok(envelope.collection)
}
