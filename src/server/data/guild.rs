//! Guild configuration repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::guild::{Guild, DEFAULT_MUSIC_VOLUME};

/// Repository providing database operations for guild configuration.
pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the active configuration row for a guild.
    ///
    /// Soft-deleted rows are ignored.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - Guild has stored configuration
    /// - `Ok(None)` - No active row for this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<Guild>, DbErr> {
        let entity = entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(guild_id))
            .filter(entity::guild::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Guild::from_entity))
    }

    /// Sets a guild's prefix, creating the row on first use.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT (guild_id) DO UPDATE` statement, so
    /// concurrent first-time writers for the same guild can't create a second row: the
    /// unique index on `guild_id` turns the losing insert into an update. A soft-deleted
    /// row is revived rather than duplicated.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `prefix` - New command prefix
    ///
    /// # Returns
    /// - `Ok(Guild)` - The stored guild after the write
    /// - `Err(DbErr)` - Database error during upsert or read-back
    pub async fn upsert_prefix(&self, guild_id: &str, prefix: &str) -> Result<Guild, DbErr> {
        let now = Utc::now();

        entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            prefix: ActiveValue::Set(prefix.to_string()),
            music_volume: ActiveValue::Set(DEFAULT_MUSIC_VOLUME),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .update_columns([
                    entity::guild::Column::Prefix,
                    entity::guild::Column::UpdatedAt,
                    entity::guild::Column::DeletedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let entity = entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Guild {} missing after upsert", guild_id))
            })?;

        Ok(Guild::from_entity(entity))
    }

    /// Soft-deletes a guild's configuration.
    ///
    /// Sets `deleted_at` on the active row. The row stays in place so the unique index
    /// keeps holding and a later prefix update revives it.
    ///
    /// # Returns
    /// - `Ok(true)` - An active row was marked deleted
    /// - `Ok(false)` - No active row existed
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, guild_id: &str) -> Result<bool, DbErr> {
        let now = Utc::now();

        let result = entity::prelude::Guild::update_many()
            .col_expr(entity::guild::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::guild::Column::UpdatedAt, Expr::value(now))
            .filter(entity::guild::Column::GuildId.eq(guild_id))
            .filter(entity::guild::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
