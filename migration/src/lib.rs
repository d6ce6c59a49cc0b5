pub use sea_orm_migration::prelude::*;

mod m20251016_000001_create_guild_table;
mod m20251016_000002_create_deleted_message_table;
mod m20251016_000003_create_edited_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_create_guild_table::Migration),
            Box::new(m20251016_000002_create_deleted_message_table::Migration),
            Box::new(m20251016_000003_create_edited_message_table::Migration),
        ]
    }
}
