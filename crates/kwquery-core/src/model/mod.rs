//! Runtime data model definitions.
//!
//! Types in `model` are the attribute directory the criteria compiler walks:
//! every entity lists its scalar columns and its relationships, and every
//! relationship names its target entity and the key pair it joins on.
//!
//! In general:
//! - entity code declares *what exists* as `'static` models
//! - `db` decides *what runs* against them
pub mod entity;
pub mod field;

#[cfg(test)]
mod tests;
