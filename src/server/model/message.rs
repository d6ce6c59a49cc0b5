//! Domain and parameter models for the deleted/edited message logs.

use chrono::{DateTime, Utc};

use crate::model::message::{
    CreateDeletedMessageDto, CreateEditedMessageDto, DeletedMessageDto, EditedMessageDto,
};

/// Number of rows returned by the recent-message listings.
pub const RECENT_MESSAGE_LIMIT: u64 = 10;

/// A logged deleted message.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedMessage {
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DeletedMessage {
    pub fn from_entity(entity: entity::deleted_message::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            message_id: entity.message_id,
            content: entity.content,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> DeletedMessageDto {
        DeletedMessageDto {
            id: self.id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            message_id: self.message_id,
            content: self.content,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Parameters for logging a deleted message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDeletedMessageParam {
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub content: String,
    pub author_id: String,
}

impl CreateDeletedMessageParam {
    /// Converts the request DTO, storing absent fields as empty strings.
    pub fn from_dto(dto: CreateDeletedMessageDto) -> Self {
        Self {
            guild_id: dto.guild_id.unwrap_or_default(),
            channel_id: dto.channel_id.unwrap_or_default(),
            message_id: dto.message_id.unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            author_id: dto.author_id.unwrap_or_default(),
        }
    }
}

/// A logged message edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedMessage {
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub old_content: String,
    pub new_content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl EditedMessage {
    pub fn from_entity(entity: entity::edited_message::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            message_id: entity.message_id,
            old_content: entity.old_content,
            new_content: entity.new_content,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> EditedMessageDto {
        EditedMessageDto {
            id: self.id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            message_id: self.message_id,
            old_content: self.old_content,
            new_content: self.new_content,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Parameters for logging an edited message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateEditedMessageParam {
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub old_content: String,
    pub new_content: String,
    pub author_id: String,
}

impl CreateEditedMessageParam {
    /// Converts the request DTO, storing absent fields as empty strings.
    pub fn from_dto(dto: CreateEditedMessageDto) -> Self {
        Self {
            guild_id: dto.guild_id.unwrap_or_default(),
            channel_id: dto.channel_id.unwrap_or_default(),
            message_id: dto.message_id.unwrap_or_default(),
            old_content: dto.old_content.unwrap_or_default(),
            new_content: dto.new_content.unwrap_or_default(),
            author_id: dto.author_id.unwrap_or_default(),
        }
    }
}
