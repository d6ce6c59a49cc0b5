//! Deleted and edited message log repositories.
//!
//! Both logs are append-only: rows are inserted once per event and only ever read
//! back as a guild's most recent entries.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::message::{
    CreateDeletedMessageParam, CreateEditedMessageParam, DeletedMessage, EditedMessage,
};

pub struct DeletedMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeletedMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a deleted message record.
    ///
    /// # Returns
    /// - `Ok(DeletedMessage)` - The created record with generated ID and timestamps
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateDeletedMessageParam) -> Result<DeletedMessage, DbErr> {
        let now = Utc::now();

        let entity = entity::deleted_message::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            channel_id: ActiveValue::Set(param.channel_id),
            message_id: ActiveValue::Set(param.message_id),
            content: ActiveValue::Set(param.content),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DeletedMessage::from_entity(entity))
    }

    /// Gets a guild's most recent deleted messages, newest first.
    ///
    /// Rows created at the same instant are ordered by descending ID. Soft-deleted rows
    /// are excluded.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<DeletedMessage>)` - Up to `limit` records, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent_by_guild(
        &self,
        guild_id: &str,
        limit: u64,
    ) -> Result<Vec<DeletedMessage>, DbErr> {
        let entities = entity::prelude::DeletedMessage::find()
            .filter(entity::deleted_message::Column::GuildId.eq(guild_id))
            .filter(entity::deleted_message::Column::DeletedAt.is_null())
            .order_by_desc(entity::deleted_message::Column::CreatedAt)
            .order_by_desc(entity::deleted_message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DeletedMessage::from_entity).collect())
    }
}

pub struct EditedMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EditedMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an edited message record.
    pub async fn create(&self, param: CreateEditedMessageParam) -> Result<EditedMessage, DbErr> {
        let now = Utc::now();

        let entity = entity::edited_message::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            channel_id: ActiveValue::Set(param.channel_id),
            message_id: ActiveValue::Set(param.message_id),
            old_content: ActiveValue::Set(param.old_content),
            new_content: ActiveValue::Set(param.new_content),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EditedMessage::from_entity(entity))
    }

    /// Gets a guild's most recent edited messages, newest first.
    pub async fn get_recent_by_guild(
        &self,
        guild_id: &str,
        limit: u64,
    ) -> Result<Vec<EditedMessage>, DbErr> {
        let entities = entity::prelude::EditedMessage::find()
            .filter(entity::edited_message::Column::GuildId.eq(guild_id))
            .filter(entity::edited_message::Column::DeletedAt.is_null())
            .order_by_desc(entity::edited_message::Column::CreatedAt)
            .order_by_desc(entity::edited_message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(EditedMessage::from_entity).collect())
    }
}
