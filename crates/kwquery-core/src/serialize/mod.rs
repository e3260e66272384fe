//! Entity ⇄ row conversion through `serde_json`.

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    traits::{DeserializeOwned, Serialize},
    value::{FieldMap, Value},
};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("entity '{entity}' must serialize to a map, got {kind}")]
    NotAMap { entity: &'static str, kind: &'static str },

    #[error("entity '{entity}': {source}")]
    Json {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<SerializeError> for InternalError {
    fn from(err: SerializeError) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Serialize, err.to_string())
    }
}

/// Serialize an entity into its row form.
pub fn to_field_map<T: Serialize>(entity: &'static str, value: &T) -> Result<FieldMap, SerializeError> {
    let json = serde_json::to_value(value).map_err(|source| SerializeError::Json { entity, source })?;

    match Value::from(json) {
        Value::Map(map) => Ok(map),
        other => Err(SerializeError::NotAMap {
            entity,
            kind: other.kind_label(),
        }),
    }
}

/// Deserialize an entity from its row form.
pub fn from_field_map<T: DeserializeOwned>(
    entity: &'static str,
    row: &FieldMap,
) -> Result<T, SerializeError> {
    let json = serde_json::Value::from(Value::Map(row.clone()));

    serde_json::from_value(json).map_err(|source| SerializeError::Json { entity, source })
}
