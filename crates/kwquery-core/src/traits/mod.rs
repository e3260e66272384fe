// -----------------------------------------------------------------------------
// Standard re-exports for `traits::X` ergonomics
// -----------------------------------------------------------------------------

pub use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    model::entity::EntityModel,
    value::{FieldMap, Value},
};

// ============================================================================
// ENTITY IDENTITY & SCHEMA
// ============================================================================

///
/// EntityKind
///
/// An entity the engine can store, filter and return typed.
///
/// Values cross the engine boundary through serde: the serialized form of
/// `Self` must be a map whose keys are the scalar attributes of `MODEL`.
/// Relationship attributes are never fields of `Self`; they are reached
/// through `MODEL` and the engine.
///

pub trait EntityKind: Serialize + DeserializeOwned + 'static {
    const MODEL: &'static EntityModel;
}

// ============================================================================
// VALUE CONVERSION
// ============================================================================

///
/// FieldValue
///
/// Conversion boundary for values used on the *right-hand side* of criteria.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldValue> FieldValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl FieldValue for FieldMap {
    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }
}

// impl_field_value
#[macro_export]
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    bool => Bool,
);
