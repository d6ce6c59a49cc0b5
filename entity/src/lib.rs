//! SeaORM entity models for the guild configuration and message log tables.

pub mod prelude;

pub mod deleted_message;
pub mod edited_message;
pub mod guild;
