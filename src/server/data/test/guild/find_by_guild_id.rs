use super::*;

/// Tests finding guild by guild_id when guild exists.
///
/// Expected: Ok(Some(guild)) with stored prefix
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("123456789")
        .prefix("?")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id("123456789").await?;

    assert!(guild.is_some());
    let guild = guild.unwrap();
    assert_eq!(guild.guild_id, "123456789");
    assert_eq!(guild.prefix, "?");
    assert_eq!(guild.music_volume, 100);

    Ok(())
}

/// Tests finding guild by guild_id when guild doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id("999999999").await?;

    assert!(guild.is_none());

    Ok(())
}

/// Tests that soft-deleted guilds are treated as absent.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_soft_deleted_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("123456789")
        .prefix("?")
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id("123456789").await?;

    assert!(guild.is_none());

    Ok(())
}

/// Tests finding specific guild among multiple guilds.
///
/// Expected: Ok(Some(guild)) with correct guild
#[tokio::test]
async fn finds_correct_guild_among_multiple() -> Result<(), DbErr> {
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
    factory::guild::GuildFactory::new(db)
        .guild_id("222222222")
        .prefix("b!")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id("222222222").await?.unwrap();

    assert_eq!(guild.guild_id, "222222222");
    assert_eq!(guild.prefix, "b!");

    Ok(())
}

/// Tests that a missing table surfaces as a database error rather than `None`.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn returns_error_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let result = repo.find_by_guild_id("123456789").await;

    assert!(result.is_err());

    Ok(())
}
