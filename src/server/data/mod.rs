//! Database repository layer.
//!
//! Each repository owns the queries for one entity and returns domain models, keeping
//! SeaORM entity types and query-builder semantics inside this module.

pub mod guild;
pub mod message;

#[cfg(test)]
mod test;
