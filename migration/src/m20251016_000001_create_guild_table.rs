use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guilds::Table)
                    .if_not_exists()
                    .col(pk_auto(Guilds::Id))
                    .col(string_uniq(Guilds::GuildId))
                    .col(string(Guilds::Prefix).default("!"))
                    .col(integer(Guilds::MusicVolume).default(100))
                    .col(
                        timestamp_with_time_zone(Guilds::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Guilds::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Guilds::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guilds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guilds {
    Table,
    Id,
    GuildId,
    Prefix,
    MusicVolume,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
