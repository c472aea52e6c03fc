use super::*;

/// Tests creating a user and finding them by username.
///
/// Expected: Ok with user retrievable by id and username
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "keys".to_string(),
            display_name: "Keyboard Player".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            admin: false,
        })
        .await?;

    let by_name = repo.find_by_username("keys").await?.unwrap();
    let by_id = repo.find_by_id(&user.id).await?.unwrap();

    assert_eq!(by_name.id, user.id);
    assert_eq!(by_id.display_name, "Keyboard Player");
    assert!(!by_id.admin);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on duplicate username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("drums")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            username: "drums".to_string(),
            display_name: "Second Drummer".to_string(),
            password_hash: "unset".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
