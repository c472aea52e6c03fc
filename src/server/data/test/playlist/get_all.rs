use super::*;

/// Tests listing playlists with entry counts.
///
/// Expected: Ok with one summary per playlist and matching counts
#[tokio::test]
async fn lists_playlists_with_entry_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, full, _) = factory::helpers::create_playlist_with_entries(db, 3).await?;
    let empty = factory::create_playlist(db, &owner.id).await?;

    let summaries = PlaylistRepository::new(db).get_all().await?;

    assert_eq!(summaries.len(), 2);
    let count_of = |id: &str| {
        summaries
            .iter()
            .find(|summary| summary.playlist.id == id)
            .map(|summary| summary.entry_count)
    };
    assert_eq!(count_of(&full.id), Some(3));
    assert_eq!(count_of(&empty.id), Some(0));

    Ok(())
}
