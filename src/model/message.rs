use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Logged record of a deleted chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedMessageDto {
    pub id: i32,
    #[serde(rename = "guildID")]
    pub guild_id: String,
    #[serde(rename = "channelID")]
    pub channel_id: String,
    #[serde(rename = "messageID")]
    pub message_id: String,
    pub content: String,
    #[serde(rename = "authorID")]
    pub author_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request body for logging a deleted message.
///
/// Every field may be omitted or `null`; the bot sends `author_id: null` when the
/// author is no longer cached.
///
/// Each field also accepts its snake_case spelling, but not both spellings at once: a
/// body with `guildID` and `guild_id` is rejected as a duplicate field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateDeletedMessageDto {
    #[serde(rename = "guildID", alias = "guild_id")]
    pub guild_id: Option<String>,
    #[serde(rename = "channelID", alias = "channel_id")]
    pub channel_id: Option<String>,
    #[serde(rename = "messageID", alias = "message_id")]
    pub message_id: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "authorID", alias = "author_id")]
    pub author_id: Option<String>,
}

/// Logged record of an edited chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EditedMessageDto {
    pub id: i32,
    #[serde(rename = "guildID")]
    pub guild_id: String,
    #[serde(rename = "channelID")]
    pub channel_id: String,
    #[serde(rename = "messageID")]
    pub message_id: String,
    #[serde(rename = "oldContent")]
    pub old_content: String,
    #[serde(rename = "newContent")]
    pub new_content: String,
    #[serde(rename = "authorID")]
    pub author_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request body for logging an edited message.
///
/// Accepts the same snake_case aliases as `CreateDeletedMessageDto`, with the same
/// duplicate-field rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEditedMessageDto {
    #[serde(rename = "guildID", alias = "guild_id")]
    pub guild_id: Option<String>,
    #[serde(rename = "channelID", alias = "channel_id")]
    pub channel_id: Option<String>,
    #[serde(rename = "messageID", alias = "message_id")]
    pub message_id: Option<String>,
    #[serde(rename = "oldContent", alias = "old_content")]
    pub old_content: Option<String>,
    #[serde(rename = "newContent", alias = "new_content")]
    pub new_content: Option<String>,
    #[serde(rename = "authorID", alias = "author_id")]
    pub author_id: Option<String>,
}
