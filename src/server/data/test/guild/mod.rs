use crate::server::data::guild::GuildRepository;
use chrono::Utc;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod soft_delete;
mod upsert_prefix;
