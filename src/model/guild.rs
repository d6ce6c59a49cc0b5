use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Command prefix currently in effect for a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrefixDto {
    pub prefix: String,
}

/// Request body for changing a guild's command prefix.
///
/// `prefix` is optional at the deserialization level so a missing field can be reported
/// with the same 400 response as an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePrefixDto {
    pub prefix: Option<String>,
}

/// Full guild configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildDto {
    pub id: i32,
    #[serde(rename = "guildID")]
    pub guild_id: String,
    pub prefix: String,
    #[serde(rename = "musicVolume")]
    pub music_volume: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}
