use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// JSON request body that may be absent.
///
/// An empty body, `null`, or any other falsy JSON value (`{}`, `[]`, `""`,
/// `0`, `false`) comes through as `None`; handlers decide which status that
/// deserves. Bytes that are not JSON are rejected with 400. The
/// `Content-Type` header is not checked.
#[derive(Debug)]
pub struct JsonBody(pub Option<Value>);

impl JsonBody {
    pub fn parse<T: DeserializeOwned>(self) -> Option<Result<T, serde_json::Error>> {
        self.0.map(serde_json::from_value)
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, "failed to read request body");
            ApiError::BadRequest
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(None));
        }
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "request body is not json");
            ApiError::BadRequest
        })?;
        Ok(JsonBody(Some(value).filter(is_truthy)))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
