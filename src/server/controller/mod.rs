//! HTTP request handlers.
//!
//! Controllers extract path parameters and JSON bodies, convert DTOs to parameter
//! models, call the service layer and convert the results back into DTOs.

pub mod guild;
pub mod message;
