//! Field guards for raw JSON payloads crossing into the domain.
//!
//! Handlers merge the request body, path parameters, and the authenticated
//! user id into one `serde_json::Value` mapping before invoking a use case.
//! Entity constructors pull their recognized fields out of that mapping with
//! these guards; anything unrecognized is simply left behind.

use serde_json::Value;

use crate::domain::errors::DomainError;

/// Extract a mandatory string field.
///
/// Absent, `null`, empty-string, `0` and `false` values count as missing;
/// any other non-string value is a type mismatch.
pub fn require_str<'a>(payload: &'a Value, field: &'static str) -> Result<&'a str, DomainError> {
    match payload.get(field) {
        None | Some(Value::Null) => Err(DomainError::missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(DomainError::missing(field)),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Bool(false)) => Err(DomainError::missing(field)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(DomainError::missing(field)),
        Some(_) => Err(DomainError::type_mismatch(field)),
    }
}
