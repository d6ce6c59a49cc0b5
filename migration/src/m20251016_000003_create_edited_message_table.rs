use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EditedMessages::Table)
                    .if_not_exists()
                    .col(pk_auto(EditedMessages::Id))
                    .col(string(EditedMessages::GuildId))
                    .col(string(EditedMessages::ChannelId))
                    .col(string(EditedMessages::MessageId))
                    .col(text(EditedMessages::OldContent))
                    .col(text(EditedMessages::NewContent))
                    .col(string(EditedMessages::AuthorId))
                    .col(
                        timestamp_with_time_zone(EditedMessages::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(EditedMessages::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(EditedMessages::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_edited_messages_guild_id_created_at")
                    .table(EditedMessages::Table)
                    .col(EditedMessages::GuildId)
                    .col(EditedMessages::CreatedAt)
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
                    .name("idx_edited_messages_guild_id_created_at")
                    .table(EditedMessages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EditedMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EditedMessages {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    OldContent,
    NewContent,
    AuthorId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
