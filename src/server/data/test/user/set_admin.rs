use super::*;

/// Tests granting and revoking admin status.
///
/// Expected: Ok(Some) with the flag toggled each time
#[tokio::test]
async fn toggles_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let granted = repo.set_admin(&user.id, true).await?.unwrap();
    assert!(granted.admin);

    let revoked = repo.set_admin(&user.id, false).await?.unwrap();
    assert!(!revoked.admin);

    Ok(())
}

/// Tests setting admin status for a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db).set_admin("missing", true).await?.is_none());

    Ok(())
}
