use bytes::Bytes;
use serde_json::{Map, Value};

use super::ClientError;

/// Decodes a successful response body.
///
/// Bodies announced as JSON must parse. Anything else is parsed on a
/// best-effort basis and otherwise wrapped as `{"raw": "<text>"}`.
pub fn decode_body(
    bytes: &Bytes,
    content_type: Option<&str>,
    path: &'static str,
) -> Result<Value, ClientError> {
    let is_json = content_type.is_some_and(|content_type| content_type.contains("json"));

    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(source) if is_json => Err(ClientError::Decode { path, source }),
        Err(_) => {
            debug!("Response of `{path}` is not JSON; falling back to raw text");

            Ok(raw_text(bytes))
        }
    }
}

fn raw_text(bytes: &Bytes) -> Value {
    let text = String::from_utf8_lossy(bytes).into_owned();

    let mut raw = Map::with_capacity(1);
    raw.insert("raw".to_owned(), Value::String(text));

    Value::Object(raw)
}
