//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON shapes of request and response bodies. Field names follow
//! the wire format the bot client already speaks (`guildID`, `authorID`, ...), while
//! request bodies also accept the snake_case spellings the client sends.

pub mod api;
pub mod guild;
pub mod message;
