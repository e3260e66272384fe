use crate::{
    db::{
        criteria::{self, Criteria, CriteriaError},
        expr::Expr,
        join::JoinSet,
        logical::Q,
        query::Search,
    },
    model::entity::EntityModel,
};
use std::fmt;

///
/// SelectPlan
///
/// Everything a backend needs to run one query: the root entity, the joins
/// in first-encounter order, and the clauses to AND together.
///

#[derive(Clone, Debug)]
pub struct SelectPlan {
    pub root: &'static EntityModel,
    pub joins: JoinSet,
    pub filters: Vec<Expr>,
}

impl SelectPlan {
    /// Unfiltered plan over `root`.
    #[must_use]
    pub const fn new(root: &'static EntityModel) -> Self {
        Self {
            root,
            joins: JoinSet::new(),
            filters: Vec::new(),
        }
    }

    /// Plan for a search: operators in order, then flat criteria.
    pub fn build(root: &'static EntityModel, search: &Search) -> Result<Self, CriteriaError> {
        let mut plan = Self::new(root);
        plan.apply_search(search)?;

        Ok(plan)
    }

    pub fn push(&mut self, expr: Expr) {
        self.filters.push(expr);
    }

    /// Add one clause for `q`.
    pub fn apply(&mut self, q: &Q) -> Result<(), CriteriaError> {
        let expr = q.evaluate(self.root, &mut self.joins)?;
        self.push(expr);

        Ok(())
    }

    /// Add one clause per criteria entry.
    pub fn apply_criteria(&mut self, criteria: &Criteria) -> Result<(), CriteriaError> {
        let exprs = criteria::compile(self.root, &mut self.joins, criteria)?;
        self.filters.extend(exprs);

        Ok(())
    }

    /// Apply a whole search. Nothing changes unless every part compiles.
    pub fn apply_search(&mut self, search: &Search) -> Result<(), CriteriaError> {
        let mut staged = self.clone();
        for q in &search.operators {
            staged.apply(q)?;
        }
        staged.apply_criteria(&search.criteria)?;
        *self = staged;

        Ok(())
    }

    /// The conjunctive filter, or `None` when the plan selects every row.
    #[must_use]
    pub fn predicate(&self) -> Option<Expr> {
        Expr::all_of(self.filters.clone())
    }
}

impl fmt::Display for SelectPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {table}.* FROM {table}", table = self.root.table)?;
        for join in self.joins.iter() {
            write!(f, " {join}")?;
        }
        if let Some(predicate) = self.predicate() {
            write!(f, " WHERE {predicate}")?;
        }

        Ok(())
    }
}
