use super::*;

/// Tests paging through users ordered by username.
///
/// Expected: Ok with alphabetical pages and total count
#[tokio::test]
async fn pages_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["vocals", "bass", "guitar"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = first.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["bass", "guitar"]);
    assert_eq!(second[0].username, "vocals");

    Ok(())
}
