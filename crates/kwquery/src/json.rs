//! JSON bridge for load/dump mappings.

use crate::{
    Error,
    error::{ErrorKind, ErrorOrigin},
};
use kwquery_core::value::{FieldMap, Value};

/// A JSON object as a load mapping.
pub fn mapping(json: serde_json::Value) -> Result<FieldMap, Error> {
    match Value::from(json) {
        Value::Map(map) => Ok(map),
        other => Err(Error::new(
            ErrorKind::Load,
            ErrorOrigin::Serialize,
            format!("expected a JSON object, got {}", other.kind_label()),
        )),
    }
}

/// A dumped mapping as a JSON object.
#[must_use]
pub fn to_json(map: FieldMap) -> serde_json::Value {
    serde_json::Value::from(Value::Map(map))
}
