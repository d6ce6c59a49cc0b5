//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::create_guild(&db).await?;
//! let deleted = factory::create_deleted_message(&db, &guild.guild_id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::guild::GuildFactory::new(&db)
//!     .guild_id("987654321")
//!     .prefix("?")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild` - Create guild configuration entities
//! - `deleted_message` - Create deleted message log entities
//! - `edited_message` - Create edited message log entities
//! - `helpers` - Unique ID generation shared by all factories

pub mod deleted_message;
pub mod edited_message;
pub mod guild;
pub mod helpers;

pub use deleted_message::create_deleted_message;
pub use edited_message::create_edited_message;
pub use guild::create_guild;
