use super::*;

/// Tests upserting a prefix for a guild with no row.
///
/// Expected: Ok with guild created using default music volume
#[tokio::test]
async fn creates_guild_on_first_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.upsert_prefix("123456789", "?").await?;

    assert_eq!(guild.guild_id, "123456789");
    assert_eq!(guild.prefix, "?");
    assert_eq!(guild.music_volume, 100);
    assert!(guild.deleted_at.is_none());

    let count = entity::prelude::Guild::find()
        .filter(entity::guild::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting updates the existing row in place.
///
/// Verifies the ID, creation time and music volume are preserved and only one row exists.
///
/// Expected: Ok with prefix updated
#[tokio::test]
async fn updates_existing_guild_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::guild::GuildFactory::new(db)
        .guild_id("123456789")
        .prefix("!")
        .music_volume(40)
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.upsert_prefix("123456789", "$").await?;

    assert_eq!(guild.id, existing.id);
    assert_eq!(guild.prefix, "$");
    assert_eq!(guild.music_volume, 40);
    assert_eq!(guild.created_at, existing.created_at);
    assert!(guild.updated_at >= existing.updated_at);

    let count = entity::prelude::Guild::find()
        .filter(entity::guild::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting revives a soft-deleted guild instead of adding a row.
///
/// Expected: Ok with deleted_at cleared and same ID
#[tokio::test]
async fn revives_soft_deleted_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::guild::GuildFactory::new(db)
        .guild_id("123456789")
        .prefix("old!")
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.upsert_prefix("123456789", "new!").await?;

    assert_eq!(guild.id, existing.id);
    assert_eq!(guild.prefix, "new!");
    assert!(guild.deleted_at.is_none());

    let found = repo.find_by_guild_id("123456789").await?;
    assert_eq!(found.map(|g| g.prefix), Some("new!".to_string()));

    Ok(())
}

/// Tests upserting one guild leaves other guilds untouched.
///
/// Expected: Ok with other guild's prefix unchanged
#[tokio::test]
async fn does_not_touch_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("111111111")
        .prefix("a!")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    repo.upsert_prefix("222222222", "b!").await?;

    let other = repo.find_by_guild_id("111111111").await?.unwrap();
    assert_eq!(other.prefix, "a!");

    let count = entity::prelude::Guild::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests prefixes with unicode and whitespace are stored verbatim.
///
/// Expected: Ok with prefix preserved
#[tokio::test]
async fn stores_prefix_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.upsert_prefix("123456789", "🎵 ").await?;

    assert_eq!(guild.prefix, "🎵 ");

    Ok(())
}
