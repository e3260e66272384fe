use crate::{
    db::expr::{ROOT_SLOT, SlotName},
    model::{entity::EntityModel, field::RelationModel},
};
use derive_more::Deref;
use std::fmt;

///
/// Join
///
/// One relationship hop the query must join: the row in `source_slot`
/// follows `relation` to `target` on `source.local_key = target.remote_key`,
/// and the joined row lands in `slot`.
///

#[derive(Clone, Copy, Debug)]
pub struct Join {
    pub source: &'static EntityModel,
    pub source_slot: usize,
    pub relation_name: &'static str,
    pub relation: &'static RelationModel,
    pub target: &'static EntityModel,
    pub slot: usize,
}

impl Join {
    /// A hop out of `source_slot`; its own slot is assigned by
    /// [`JoinSet::insert`].
    #[must_use]
    pub fn new(
        source: &'static EntityModel,
        source_slot: usize,
        relation_name: &'static str,
        relation: &'static RelationModel,
    ) -> Self {
        Self {
            source,
            source_slot,
            relation_name,
            relation,
            target: relation.target(),
            slot: ROOT_SLOT,
        }
    }

    const fn source_name(&self) -> SlotName {
        SlotName {
            table: self.source.table,
            slot: self.source_slot,
        }
    }

    const fn target_name(&self) -> SlotName {
        SlotName {
            table: self.target.table,
            slot: self.slot,
        }
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JOIN {table} AS {target} ON {source}.{local} = {target}.{remote}",
            table = self.target.table,
            target = self.target_name(),
            source = self.source_name(),
            local = self.relation.local_key,
            remote = self.relation.remote_key,
        )
    }
}

///
/// JoinSet
///
/// Join accumulator for one query build: insertion-ordered, deduplicated by
/// target entity identity. The first hop that reaches an entity decides how
/// it is joined; later hops to the same entity reuse that join and its slot.
/// The root row is not part of the set, so a path leading back to the root
/// entity gets a join of its own.
///

#[derive(Clone, Debug, Default, Deref)]
pub struct JoinSet {
    joins: Vec<Join>,
}

impl JoinSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { joins: Vec::new() }
    }

    #[must_use]
    pub fn contains(&self, entity: &EntityModel) -> bool {
        self.slot_of(entity).is_some()
    }

    /// Tuple slot of the join reaching `entity`, if any.
    #[must_use]
    pub fn slot_of(&self, entity: &EntityModel) -> Option<usize> {
        self.joins
            .iter()
            .find(|join| join.target.is(entity))
            .map(|join| join.slot)
    }

    /// Append a join unless its target is already present, and return the
    /// slot the target's row occupies.
    pub fn insert(&mut self, mut join: Join) -> usize {
        if let Some(slot) = self.slot_of(join.target) {
            return slot;
        }
        join.slot = self.joins.len() + 1;
        self.joins.push(join);

        join.slot
    }

    /// Joined entities in accumulation order.
    pub fn targets(&self) -> impl Iterator<Item = &'static EntityModel> {
        self.joins.iter().map(|join| join.target)
    }
}
