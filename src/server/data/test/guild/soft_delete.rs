use super::*;

/// Tests soft-deleting an active guild.
///
/// Verifies the row is kept with `deleted_at` set and no longer found by lookups.
///
/// Expected: Ok(true)
#[tokio::test]
async fn soft_deletes_active_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("123456789")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let deleted = repo.soft_delete("123456789").await?;

    assert!(deleted);
    assert!(repo.find_by_guild_id("123456789").await?.is_none());

    let row = entity::prelude::Guild::find()
        .filter(entity::guild::Column::GuildId.eq("123456789"))
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());

    Ok(())
}

/// Tests soft-deleting a guild with no row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let deleted = repo.soft_delete("999999999").await?;

    assert!(!deleted);

    Ok(())
}

/// Tests soft-deleting an already deleted guild.
///
/// Expected: Ok(false) and original deletion time kept
#[tokio::test]
async fn returns_false_for_already_deleted_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted_at = Utc::now() - chrono::Duration::hours(1);
    factory::guild::GuildFactory::new(db)
        .guild_id("123456789")
        .deleted_at(Some(deleted_at))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let deleted = repo.soft_delete("123456789").await?;

    assert!(!deleted);

    let row = entity::prelude::Guild::find()
        .filter(entity::guild::Column::GuildId.eq("123456789"))
        .one(db)
        .await?
        .unwrap();
    let diff = (row.deleted_at.unwrap() - deleted_at).num_seconds().abs();
    assert!(diff < 2, "deleted_at should not have changed");

    Ok(())
}
