use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild::GuildRepository,
    error::AppError,
    model::guild::{Guild, DEFAULT_PREFIX},
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the prefix in effect for a guild.
    ///
    /// Guilds without stored configuration use `DEFAULT_PREFIX`; a missing row is not
    /// an error.
    pub async fn get_prefix(&self, guild_id: &str) -> Result<String, AppError> {
        let guild = GuildRepository::new(self.db).find_by_guild_id(guild_id).await?;

        Ok(guild
            .map(|guild| guild.prefix)
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string()))
    }

    /// Sets a guild's prefix, creating its configuration on first use.
    ///
    /// # Returns
    /// - `Ok(Guild)` - The stored guild record
    /// - `Err(AppError::BadRequest)` - Prefix missing or empty; nothing is written
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn update_prefix(
        &self,
        guild_id: &str,
        prefix: Option<String>,
    ) -> Result<Guild, AppError> {
        let prefix = prefix
            .filter(|prefix| !prefix.is_empty())
            .ok_or_else(|| AppError::BadRequest("prefix is required".to_string()))?;

        let guild = GuildRepository::new(self.db)
            .upsert_prefix(guild_id, &prefix)
            .await?;

        tracing::debug!("Set prefix for guild {} to {:?}", guild_id, guild.prefix);

        Ok(guild)
    }

    /// Soft-deletes a guild's configuration, reverting it to defaults.
    ///
    /// # Returns
    /// - `Ok(())` - Configuration reset
    /// - `Err(AppError::NotFound)` - Guild has no active configuration
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn reset(&self, guild_id: &str) -> Result<(), AppError> {
        let deleted = GuildRepository::new(self.db).soft_delete(guild_id).await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "Guild {} has no stored configuration",
                guild_id
            )));
        }

        tracing::debug!("Reset configuration for guild {}", guild_id);

        Ok(())
    }
}
