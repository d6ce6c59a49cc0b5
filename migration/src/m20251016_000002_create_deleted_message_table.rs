use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeletedMessages::Table)
                    .if_not_exists()
                    .col(pk_auto(DeletedMessages::Id))
                    .col(string(DeletedMessages::GuildId))
                    .col(string(DeletedMessages::ChannelId))
                    .col(string(DeletedMessages::MessageId))
                    .col(text(DeletedMessages::Content))
                    .col(string(DeletedMessages::AuthorId))
                    .col(
                        timestamp_with_time_zone(DeletedMessages::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(DeletedMessages::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(DeletedMessages::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // Recent-message listing filters by guild and sorts by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_deleted_messages_guild_id_created_at")
                    .table(DeletedMessages::Table)
                    .col(DeletedMessages::GuildId)
                    .col(DeletedMessages::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_deleted_messages_guild_id_created_at")
                    .table(DeletedMessages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DeletedMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeletedMessages {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    Content,
    AuthorId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
