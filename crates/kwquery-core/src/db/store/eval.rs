use crate::{
    db::expr::{AttributeRef, CompareExpr, CompareOp, Expr},
    value::{FieldMap, TextMode, Value, compare_eq, compare_order, in_list, like},
};
use std::cmp::Ordering;

///
/// Tuple
///
/// One candidate result during execution: the root row in slot 0 plus one
/// row per join applied so far, each in the slot its join was assigned.
///

#[derive(Clone, Debug)]
pub(crate) struct Tuple<'a> {
    pub(crate) root_index: usize,
    slots: Vec<&'a FieldMap>,
}

impl<'a> Tuple<'a> {
    pub(crate) fn new(root_index: usize, row: &'a FieldMap) -> Self {
        Self {
            root_index,
            slots: vec![row],
        }
    }

    pub(crate) fn slot(&self, slot: usize) -> Option<&'a FieldMap> {
        self.slots.get(slot).copied()
    }

    #[must_use]
    pub(crate) fn extend(&self, row: &'a FieldMap) -> Self {
        let mut next = self.clone();
        next.slots.push(row);

        next
    }

    fn field(&self, attribute: &AttributeRef) -> Option<&'a Value> {
        self.slot(attribute.slot)?.get(attribute.field)
    }
}

///
/// Evaluate an expression against one tuple.
///
/// Two-valued: an attribute that is absent, or a comparison that is
/// undefined (null operand, mismatched kinds), is simply false, and `Not`
/// inverts that.
///
#[must_use]
pub(crate) fn eval(tuple: &Tuple<'_>, expr: &Expr) -> bool {
    match expr {
        Expr::Compare(cmp) => eval_compare(tuple, cmp),
        Expr::And(children) => children.iter().all(|child| eval(tuple, child)),
        Expr::Or(children) => children.iter().any(|child| eval(tuple, child)),
        Expr::Not(inner) => !eval(tuple, inner),
    }
}

fn eval_compare(tuple: &Tuple<'_>, cmp: &CompareExpr) -> bool {
    let CompareExpr {
        attribute,
        op,
        value,
    } = cmp;

    let Some(actual) = tuple.field(attribute) else {
        return false;
    };

    match op {
        CompareOp::Eq => compare_eq(actual, value).unwrap_or(false),
        CompareOp::Ne => compare_eq(actual, value).is_some_and(|v| !v),

        CompareOp::Lt => compare_order(actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(actual, value).is_some_and(Ordering::is_ge),

        CompareOp::In => in_list(actual, value).unwrap_or(false),

        CompareOp::Like => matches_pattern(actual, value, TextMode::Cs),
        CompareOp::ILike => matches_pattern(actual, value, TextMode::Ci),
    }
}

fn matches_pattern(actual: &Value, pattern: &Value, mode: TextMode) -> bool {
    match (actual, pattern) {
        (Value::Text(text), Value::Text(pattern)) => like(text, pattern, mode),
        _ => false,
    }
}
