use super::*;

/// Tests creating an edited message record.
///
/// Expected: Ok with both contents stored
#[tokio::test]
async fn creates_edited_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EditedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EditedMessageRepository::new(db);
    let message = repo
        .create(CreateEditedMessageParam {
            guild_id: "g1".to_string(),
            channel_id: "c1".to_string(),
            message_id: "m1".to_string(),
            old_content: "helo".to_string(),
            new_content: "hello".to_string(),
            author_id: "u1".to_string(),
        })
        .await?;

    assert!(message.id > 0);
    assert_eq!(message.guild_id, "g1");
    assert_eq!(message.old_content, "helo");
    assert_eq!(message.new_content, "hello");
    assert_eq!(message.author_id, "u1");
    assert!(message.deleted_at.is_none());

    Ok(())
}

/// Tests long multi-line content is stored intact.
///
/// Expected: Ok with content preserved
#[tokio::test]
async fn stores_long_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EditedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let long_content = "line\n".repeat(800);

    let repo = EditedMessageRepository::new(db);
    let message = repo
        .create(CreateEditedMessageParam {
            guild_id: "g1".to_string(),
            old_content: long_content.clone(),
            new_content: "short".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(message.old_content, long_content);

    Ok(())
}
