//! Module: logical
//! Responsibility: `Q` objects, an immutable AND/OR/NOT tree over criteria
//! leaves, and its evaluation into a single expression.
//! Does not own: path resolution (see `criteria`).


use crate::{
    db::{
        criteria::{self, Criteria, CriteriaError},
        expr::Expr,
        join::JoinSet,
    },
    model::entity::EntityModel,
};
use std::{
    ops::{BitAnd, BitOr, Not},
    sync::Arc,
};

///
/// QNode
///
/// One node of a boolean tree. Children are shared, never copied or
/// mutated, so a subtree can appear in any number of combinations.
///

#[derive(Clone, Debug, PartialEq)]
pub enum QNode {
    Leaf(Criteria),
    And(Arc<Self>, Arc<Self>),
    Or(Arc<Self>, Arc<Self>),
    Not(Arc<Self>),
}

impl QNode {
    /// Compile this subtree against `root`, recording joins in `joins`.
    ///
    /// A leaf with one entry yields that comparison; a leaf with several
    /// yields their conjunction. An empty leaf is rejected.
    pub fn evaluate(
        &self,
        root: &'static EntityModel,
        joins: &mut JoinSet,
    ) -> Result<Expr, CriteriaError> {
        match self {
            Self::Leaf(criteria) => {
                let exprs = criteria::compile(root, joins, criteria)?;

                Expr::all_of(exprs).ok_or(CriteriaError::EmptyCriteria)
            }
            Self::And(lhs, rhs) => Ok(Expr::and(vec![
                lhs.evaluate(root, joins)?,
                rhs.evaluate(root, joins)?,
            ])),
            Self::Or(lhs, rhs) => Ok(Expr::or(vec![
                lhs.evaluate(root, joins)?,
                rhs.evaluate(root, joins)?,
            ])),
            Self::Not(child) => Ok(Expr::not(child.evaluate(root, joins)?)),
        }
    }
}

///
/// Q
///
/// Handle over a shared boolean tree. Combining two `Q`s with `&`, `|` or
/// `!` builds a new node pointing at both operands; neither operand changes.
///
/// ```ignore
/// let ok = q!(status__name = "ok");
/// let first = q!(id = 1);
/// let either = &ok | &first;
/// let neither = !either.clone();
/// ```
///

#[derive(Clone, Debug, PartialEq)]
pub struct Q {
    ast: Arc<QNode>,
}

impl Q {
    #[must_use]
    pub fn new(criteria: Criteria) -> Self {
        Self::from_node(QNode::Leaf(criteria))
    }

    fn from_node(node: QNode) -> Self {
        Self {
            ast: Arc::new(node),
        }
    }

    #[must_use]
    pub fn ast(&self) -> &QNode {
        &self.ast
    }

    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        Self::from_node(QNode::And(Arc::clone(&self.ast), Arc::clone(&other.ast)))
    }

    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        Self::from_node(QNode::Or(Arc::clone(&self.ast), Arc::clone(&other.ast)))
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_node(QNode::Not(Arc::clone(&self.ast)))
    }

    /// Compile the whole tree. On error `joins` is left as it was.
    pub fn evaluate(
        &self,
        root: &'static EntityModel,
        joins: &mut JoinSet,
    ) -> Result<Expr, CriteriaError> {
        let mut staged = joins.clone();
        let expr = self.ast.evaluate(root, &mut staged)?;
        *joins = staged;

        Ok(expr)
    }
}

impl From<Criteria> for Q {
    fn from(criteria: Criteria) -> Self {
        Self::new(criteria)
    }
}

// operator sugar; every impl builds a fresh node

impl BitAnd for Q {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::and(&self, &rhs)
    }
}

impl BitAnd for &Q {
    type Output = Q;

    fn bitand(self, rhs: Self) -> Q {
        Q::and(self, rhs)
    }
}

impl BitOr for Q {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::or(&self, &rhs)
    }
}

impl BitOr for &Q {
    type Output = Q;

    fn bitor(self, rhs: Self) -> Q {
        Q::or(self, rhs)
    }
}

impl Not for Q {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl Not for &Q {
    type Output = Q;

    fn not(self) -> Q {
        self.negate()
    }
}
