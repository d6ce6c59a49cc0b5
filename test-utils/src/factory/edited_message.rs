//! Edited message factory for creating test message log entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test edited message rows.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::edited_message::EditedMessageFactory;
///
/// let message = EditedMessageFactory::new(&db, "123456789")
///     .old_content("helo")
///     .new_content("hello")
///     .build()
///     .await?;
/// ```
pub struct EditedMessageFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    message_id: String,
    old_content: String,
    new_content: String,
    author_id: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> EditedMessageFactory<'a> {
    /// Creates a new EditedMessageFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: `"channel_{id}"`
    /// - message_id: `"message_{id}"`
    /// - old_content: `"Original message {id}"`
    /// - new_content: `"Edited message {id}"`
    /// - author_id: `"author_{id}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            channel_id: format!("channel_{}", id),
            message_id: format!("message_{}", id),
            old_content: format!("Original message {}", id),
            new_content: format!("Edited message {}", id),
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

    pub fn old_content(mut self, old_content: impl Into<String>) -> Self {
        self.old_content = old_content.into();
        self
    }

    pub fn new_content(mut self, new_content: impl Into<String>) -> Self {
        self.new_content = new_content.into();
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

    /// Builds and inserts the edited message entity into the database.
    pub async fn build(self) -> Result<entity::edited_message::Model, DbErr> {
        entity::edited_message::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            old_content: ActiveValue::Set(self.old_content),
            new_content: ActiveValue::Set(self.new_content),
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

/// Creates an edited message for the guild with default values.
pub async fn create_edited_message(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::edited_message::Model, DbErr> {
    EditedMessageFactory::new(db, guild_id).build().await
}
