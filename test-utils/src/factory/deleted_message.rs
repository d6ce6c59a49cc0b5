//! Deleted message factory for creating test message log entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test deleted message rows.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deleted_message::DeletedMessageFactory;
///
/// let message = DeletedMessageFactory::new(&db, "123456789")
///     .content("gone")
///     .created_at(timestamp_at(5))
///     .build()
///     .await?;
/// ```
pub struct DeletedMessageFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    message_id: String,
    content: String,
    author_id: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> DeletedMessageFactory<'a> {
    /// Creates a new DeletedMessageFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: `"channel_{id}"`
    /// - message_id: `"message_{id}"`
    /// - content: `"Deleted message {id}"`
    /// - author_id: `"author_{id}"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the message belonged to
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            channel_id: format!("channel_{}", id),
            message_id: format!("message_{}", id),
            content: format!("Deleted message {}", id),
            author_id: format!("author_{}", id),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn deleted_at(mut self, deleted_at: Option<DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    /// Builds and inserts the deleted message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::deleted_message::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::deleted_message::Model, DbErr> {
        entity::deleted_message::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deleted message for the guild with default values.
pub async fn create_deleted_message(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::deleted_message::Model, DbErr> {
    DeletedMessageFactory::new(db, guild_id).build().await
}
