use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::{DeletedMessageRepository, EditedMessageRepository},
    error::AppError,
    model::message::{
        CreateDeletedMessageParam, CreateEditedMessageParam, DeletedMessage, EditedMessage,
        RECENT_MESSAGE_LIMIT,
    },
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn store_deleted(
        &self,
        param: CreateDeletedMessageParam,
    ) -> Result<DeletedMessage, AppError> {
        let message = DeletedMessageRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "Logged deleted message {} in guild {}",
            message.message_id,
            message.guild_id
        );

        Ok(message)
    }

    /// Gets the `RECENT_MESSAGE_LIMIT` most recent deleted messages for a guild.
    pub async fn get_recent_deleted(&self, guild_id: &str) -> Result<Vec<DeletedMessage>, AppError> {
        Ok(DeletedMessageRepository::new(self.db)
            .get_recent_by_guild(guild_id, RECENT_MESSAGE_LIMIT)
            .await?)
    }

    pub async fn store_edited(
        &self,
        param: CreateEditedMessageParam,
    ) -> Result<EditedMessage, AppError> {
        let message = EditedMessageRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "Logged edited message {} in guild {}",
            message.message_id,
            message.guild_id
        );

        Ok(message)
    }

    /// Gets the `RECENT_MESSAGE_LIMIT` most recent edited messages for a guild.
    pub async fn get_recent_edited(&self, guild_id: &str) -> Result<Vec<EditedMessage>, AppError> {
        Ok(EditedMessageRepository::new(self.db)
            .get_recent_by_guild(guild_id, RECENT_MESSAGE_LIMIT)
            .await?)
    }
}
