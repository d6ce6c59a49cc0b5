use super::*;

/// Tests creating a deleted message record.
///
/// Verifies all fields are stored and an ID and timestamps are generated.
///
/// Expected: Ok with created record
#[tokio::test]
async fn creates_deleted_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DeletedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = DeletedMessageRepository::new(db);
    let message = repo
        .create(CreateDeletedMessageParam {
            guild_id: "g1".to_string(),
            channel_id: "c1".to_string(),
            message_id: "m1".to_string(),
            content: "hi".to_string(),
            author_id: "u1".to_string(),
        })
        .await?;

    assert!(message.id > 0);
    assert_eq!(message.guild_id, "g1");
    assert_eq!(message.channel_id, "c1");
    assert_eq!(message.message_id, "m1");
    assert_eq!(message.content, "hi");
    assert_eq!(message.author_id, "u1");
    assert!(message.created_at >= before);
    assert_eq!(message.created_at, message.updated_at);
    assert!(message.deleted_at.is_none());

    Ok(())
}

/// Tests creating a record with empty fields.
///
/// No identifier validation is performed; empty strings are stored as-is.
///
/// Expected: Ok with empty fields
#[tokio::test]
async fn creates_message_with_empty_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DeletedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeletedMessageRepository::new(db);
    let message = repo.create(CreateDeletedMessageParam::default()).await?;

    assert!(message.id > 0);
    assert!(message.guild_id.is_empty());
    assert!(message.author_id.is_empty());

    Ok(())
}

/// Tests creating the same message twice keeps both events.
///
/// Expected: Ok with two distinct IDs
#[tokio::test]
async fn allows_duplicate_message_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DeletedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateDeletedMessageParam {
        guild_id: "g1".to_string(),
        message_id: "m1".to_string(),
        ..Default::default()
    };

    let repo = DeletedMessageRepository::new(db);
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
