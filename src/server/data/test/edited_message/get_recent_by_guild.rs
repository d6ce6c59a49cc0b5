use super::*;

/// Tests listing returns at most the limit, newest first.
///
/// Expected: Ok with 10 newest edits
#[tokio::test]
async fn returns_newest_edits_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EditedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..15 {
        factory::edited_message::EditedMessageFactory::new(db, "g1")
            .new_content(format!("edit {}", i))
            .created_at(timestamp_at(i))
            .build()
            .await?;
    }

    let repo = EditedMessageRepository::new(db);
    let messages = repo.get_recent_by_guild("g1", RECENT_MESSAGE_LIMIT).await?;

    assert_eq!(messages.len(), 10);
    let contents: Vec<_> = messages.iter().map(|m| m.new_content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "edit 14", "edit 13", "edit 12", "edit 11", "edit 10", "edit 9", "edit 8", "edit 7",
            "edit 6", "edit 5"
        ]
    );

    Ok(())
}

/// Tests listing only returns edits from the requested guild.
///
/// Expected: Ok with only guild A's edits
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EditedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_edited_message(db, "guild_a").await?;
    factory::create_edited_message(db, "guild_b").await?;
    factory::create_edited_message(db, "guild_b").await?;

    let repo = EditedMessageRepository::new(db);
    let messages = repo.get_recent_by_guild("guild_a", RECENT_MESSAGE_LIMIT).await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].guild_id, "guild_a");

    Ok(())
}

/// Tests listing for a guild with no edits.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_guild_without_edits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EditedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EditedMessageRepository::new(db);
    let messages = repo.get_recent_by_guild("g1", RECENT_MESSAGE_LIMIT).await?;

    assert!(messages.is_empty());

    Ok(())
}
