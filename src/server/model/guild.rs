use chrono::{DateTime, Utc};

use crate::model::guild::GuildDto;

/// Prefix reported for guilds with no stored configuration.
pub const DEFAULT_PREFIX: &str = "!";

/// Music volume stored for newly created guild rows.
pub const DEFAULT_MUSIC_VOLUME: i32 = 100;

/// Guild configuration as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: i32,
    /// External Discord guild ID, kept as the string the client sends.
    pub guild_id: String,
    pub prefix: String,
    /// Stored but not exposed for mutation by any endpoint.
    pub music_volume: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Guild {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            prefix: entity.prefix,
            music_volume: entity.music_volume,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            guild_id: self.guild_id,
            prefix: self.prefix,
            music_volume: self.music_volume,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}
