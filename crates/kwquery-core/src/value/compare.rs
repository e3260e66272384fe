use crate::value::Value;
use std::cmp::Ordering;

///
/// Numeric
///
/// Widened numeric view shared by equality and ordering.
///

#[derive(Clone, Copy)]
enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(Self::Int(i128::from(*v))),
            Value::Uint(v) => Some(Self::Int(i128::from(*v))),
            Value::Float(v) => Some(Self::Float(*v)),
            _ => None,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    const fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    fn partial_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

/// Equality with numeric widening across `Int`, `Uint` and `Float`.
///
/// Returns `None` when the comparison is undefined: either side is `Null`
/// (SQL semantics), or the variants are not comparable.
#[must_use]
pub fn compare_eq(left: &Value, right: &Value) -> Option<bool> {
    if let (Some(a), Some(b)) = (Numeric::of(left), Numeric::of(right)) {
        return a.partial_cmp(b).map(Ordering::is_eq);
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Text(a), Value::Text(b)) => Some(a == b),
        (Value::List(a), Value::List(b)) => Some(a == b),
        (Value::Map(a), Value::Map(b)) => Some(a == b),
        _ => None,
    }
}

/// Ordering for orderable scalars (numbers, text, bool).
///
/// Returns `None` for `Null`, collections and mismatched variants.
#[must_use]
pub fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (Numeric::of(left), Numeric::of(right)) {
        return a.partial_cmp(b);
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Membership of `actual` in a list value.
///
/// `None` when `list` is not a list or no element was comparable.
#[must_use]
pub fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let items = list.as_list()?;

    let mut saw_valid = false;
    for item in items {
        match compare_eq(actual, item) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}
