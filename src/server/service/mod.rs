//! Business logic between controllers and repositories.

pub mod guild;
pub mod message;
