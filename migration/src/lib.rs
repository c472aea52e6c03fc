pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_album_table;
mod m20260301_000003_create_track_table;
mod m20260301_000004_create_playlist_table;
mod m20260301_000005_create_playlist_track_table;
mod m20260301_000006_create_comment_table;
mod m20260301_000007_create_gallery_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_album_table::Migration),
            Box::new(m20260301_000003_create_track_table::Migration),
            Box::new(m20260301_000004_create_playlist_table::Migration),
            Box::new(m20260301_000005_create_playlist_track_table::Migration),
            Box::new(m20260301_000006_create_comment_table::Migration),
            Box::new(m20260301_000007_create_gallery_item_table::Migration),
        ]
    }
}
