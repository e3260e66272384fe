use crate::{model::entity::EntityModel, value::Value};
use std::fmt;

///
/// Expression API
///
/// Compiled expressions are what the criteria compiler and `Q` trees hand
/// to the engine. The compiler only builds them; evaluation belongs to the
/// backend, and `Display` renders them as SQL text for diagnostics.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Like,
    ILike,
}

impl CompareOp {
    /// SQL spelling.
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::ILike => "ILIKE",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql())
    }
}

/// Slot of the root row in an executing tuple.
pub const ROOT_SLOT: usize = 0;

///
/// SlotName
///
/// SQL qualifier for one tuple slot: the bare table for the root, an alias
/// `{table}_{slot}` for joined rows, so a table joined onto itself stays
/// distinguishable.
///

#[derive(Clone, Copy, Debug)]
pub struct SlotName {
    pub table: &'static str,
    pub slot: usize,
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slot == ROOT_SLOT {
            f.write_str(self.table)
        } else {
            write!(f, "{}_{}", self.table, self.slot)
        }
    }
}

///
/// AttributeRef
///
/// Scalar attribute bound to the tuple slot it is read from. Slot
/// `ROOT_SLOT` is the root row; slot `n` is the row brought in by the
/// `n`-th join.
///

#[derive(Clone, Copy, Debug)]
pub struct AttributeRef {
    pub entity: &'static EntityModel,
    pub field: &'static str,
    pub slot: usize,
}

impl AttributeRef {
    /// An attribute of the root row.
    #[must_use]
    pub const fn new(entity: &'static EntityModel, field: &'static str) -> Self {
        Self {
            entity,
            field,
            slot: ROOT_SLOT,
        }
    }

    #[must_use]
    pub const fn at(mut self, slot: usize) -> Self {
        self.slot = slot;
        self
    }

    #[must_use]
    pub const fn slot_name(&self) -> SlotName {
        SlotName {
            table: self.entity.table,
            slot: self.slot,
        }
    }
}

impl PartialEq for AttributeRef {
    fn eq(&self, other: &Self) -> bool {
        self.entity.is(other.entity) && self.field == other.field && self.slot == other.slot
    }
}

impl fmt::Display for AttributeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.slot_name(), self.field)
    }
}

///
/// CompareExpr
///

#[derive(Clone, Debug, PartialEq)]
pub struct CompareExpr {
    pub attribute: AttributeRef,
    pub op: CompareOp,
    pub value: Value,
}

///
/// Expr
///

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Compare(CompareExpr),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl Expr {
    #[must_use]
    pub const fn compare(attribute: AttributeRef, op: CompareOp, value: Value) -> Self {
        Self::Compare(CompareExpr {
            attribute,
            op,
            value,
        })
    }

    #[must_use]
    pub const fn and(exprs: Vec<Self>) -> Self {
        Self::And(exprs)
    }

    #[must_use]
    pub const fn or(exprs: Vec<Self>) -> Self {
        Self::Or(exprs)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }

    /// Conjunction of zero or more clauses; `None` when there are none.
    /// A single clause is returned unwrapped.
    #[must_use]
    pub fn all_of(mut exprs: Vec<Self>) -> Option<Self> {
        match exprs.len() {
            0 => None,
            1 => exprs.pop(),
            _ => Some(Self::And(exprs)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, exprs: &[Expr], sep: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, expr) in exprs.iter().enumerate() {
                if i > 0 {
                    write!(f, " {sep} ")?;
                }
                write!(f, "{expr}")?;
            }
            write!(f, ")")
        }

        match self {
            Self::Compare(cmp) => write!(f, "{} {} {}", cmp.attribute, cmp.op, cmp.value),
            Self::And(exprs) => join(f, exprs, "AND"),
            Self::Or(exprs) => join(f, exprs, "OR"),
            Self::Not(inner) => write!(f, "NOT ({inner})"),
        }
    }
}
