use crate::db::expr::CompareOp;

///
/// OPERATORS
///
/// Operator suffixes accepted at the end of a criteria path.
/// A path without a recognised suffix compares with `CompareOp::Eq`.
///

pub const OPERATORS: [(&str, CompareOp); 8] = [
    ("not", CompareOp::Ne),
    ("lt", CompareOp::Lt),
    ("le", CompareOp::Lte),
    ("gt", CompareOp::Gt),
    ("ge", CompareOp::Gte),
    ("in", CompareOp::In),
    ("like", CompareOp::Like),
    ("ilike", CompareOp::ILike),
];

/// Resolve an operator token.
#[must_use]
pub fn lookup(token: &str) -> Option<CompareOp> {
    OPERATORS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, op)| *op)
}

/// The token spelling `op` is written with, if it has one (`Eq` has none).
#[must_use]
pub fn token(op: CompareOp) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|(_, candidate)| *candidate == op)
        .map(|(name, _)| *name)
}
