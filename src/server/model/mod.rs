//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so neither SeaORM types nor wire
//! formats leak across layers.

pub mod guild;
pub mod message;
