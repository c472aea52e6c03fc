use super::*;

/// Tests that an admin passes the admin permission.
///
/// Expected: Ok(User) with admin flag
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(&admin.id).await?;

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(resolved.admin);

    Ok(())
}

/// Tests that a regular member is denied admin access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}
