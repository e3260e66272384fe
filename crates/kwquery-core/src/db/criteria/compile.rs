use crate::{
    db::{
        criteria::{Criteria, CriteriaError, operator},
        expr::{AttributeRef, CompareOp, Expr, ROOT_SLOT},
        join::{Join, JoinSet},
    },
    model::{entity::EntityModel, field::ScalarKind},
    value::Value,
};

/// Separator between path segments.
pub const PATH_DELIMITER: &str = "__";

///
/// CriteriaPath
///
/// A parsed criteria key: relationship hops, the terminal scalar attribute
/// and the comparison operator (explicit suffix or `Eq`).
///
/// The last segment is always tried as an operator token first, so an
/// attribute literally named `in`, `not`, ... is only reachable with an
/// explicit suffix (`in__not`).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CriteriaPath<'a> {
    pub hops: Vec<&'a str>,
    pub attribute: &'a str,
    pub op: CompareOp,
}

/// Split a criteria key into hops, terminal attribute and operator.
pub fn parse_path(path: &str) -> Result<CriteriaPath<'_>, CriteriaError> {
    if path.is_empty() {
        return Err(CriteriaError::EmptyPath);
    }

    let mut segments: Vec<&str> = path.split(PATH_DELIMITER).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(CriteriaError::EmptySegment {
            path: path.to_string(),
        });
    }

    let op = match segments.last().and_then(|last| operator::lookup(last)) {
        Some(op) => {
            segments.pop();
            op
        }
        None => CompareOp::Eq,
    };

    let attribute = segments
        .pop()
        .ok_or_else(|| CriteriaError::MissingAttribute {
            path: path.to_string(),
        })?;

    Ok(CriteriaPath {
        hops: segments,
        attribute,
        op,
    })
}

/// Compile flat criteria against `root`.
///
/// Returns one expression per entry, in entry order, with no implicit
/// conjunction. Every relationship hop's target is appended to `joins` on
/// first encounter, and each expression reads from the slot its path ends
/// on: the root row for zero-hop paths, the last hop's join otherwise.
/// Compilation is all-or-nothing: on error `joins` is left as it was before
/// the call.
pub fn compile(
    root: &'static EntityModel,
    joins: &mut JoinSet,
    criteria: &Criteria,
) -> Result<Vec<Expr>, CriteriaError> {
    let mut staged = joins.clone();
    let exprs = criteria
        .iter()
        .map(|(path, value)| compile_entry(root, &mut staged, path, value))
        .collect::<Result<Vec<_>, _>>()?;

    *joins = staged;

    Ok(exprs)
}

// Resolve one `(path, value)` entry into a comparison.
fn compile_entry(
    root: &'static EntityModel,
    joins: &mut JoinSet,
    path: &str,
    value: &Value,
) -> Result<Expr, CriteriaError> {
    let parsed = parse_path(path)?;

    // walk the hops; the path bounds the walk, so cyclic models terminate
    let mut current = root;
    let mut slot = ROOT_SLOT;
    for hop in &parsed.hops {
        let (field, relation) =
            current
                .relation(hop)
                .ok_or_else(|| CriteriaError::UnknownRelation {
                    entity: current.entity_name,
                    name: (*hop).to_string(),
                })?;

        let join = Join::new(current, slot, field.name, relation);
        current = join.target;
        slot = joins.insert(join);
    }

    let Some((field, kind)) = current.scalar(parsed.attribute) else {
        return Err(if current.relation(parsed.attribute).is_some() {
            CriteriaError::RelationNotComparable {
                entity: current.entity_name,
                name: parsed.attribute.to_string(),
            }
        } else {
            CriteriaError::UnknownField {
                entity: current.entity_name,
                name: parsed.attribute.to_string(),
            }
        });
    };

    check_operand(current, field.name, kind, parsed.op, value)?;

    Ok(Expr::compare(
        AttributeRef::new(current, field.name).at(slot),
        parsed.op,
        value.clone(),
    ))
}

// Operator/operand shape checks that would otherwise surface as silent
// non-matches at execution time.
fn check_operand(
    entity: &'static EntityModel,
    field: &'static str,
    kind: ScalarKind,
    op: CompareOp,
    value: &Value,
) -> Result<(), CriteriaError> {
    match op {
        CompareOp::In if !matches!(value, Value::List(_)) => Err(CriteriaError::InvalidListValue {
            entity: entity.entity_name,
            field,
            op,
            kind: value.kind_label(),
        }),
        CompareOp::Like | CompareOp::ILike if kind != ScalarKind::Text => {
            Err(CriteriaError::UnsupportedOperator {
                entity: entity.entity_name,
                field,
                op,
                detail: format!("attribute is {kind}, pattern matching needs text"),
            })
        }
        CompareOp::Like | CompareOp::ILike if value.as_text().is_none() => {
            Err(CriteriaError::UnsupportedOperator {
                entity: entity.entity_name,
                field,
                op,
                detail: format!("pattern must be text, got {}", value.kind_label()),
            })
        }
        _ => Ok(()),
    }
}
