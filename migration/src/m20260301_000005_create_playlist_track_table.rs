use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_track_table::Track, m20260301_000004_create_playlist_table::Playlist,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistTrack::Table)
                    .if_not_exists()
                    .col(string(PlaylistTrack::Id).primary_key())
                    .col(string(PlaylistTrack::PlaylistId))
                    .col(string(PlaylistTrack::TrackId))
                    .col(integer(PlaylistTrack::Position))
                    .col(
                        timestamp(PlaylistTrack::AddedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_track_playlist_id")
                            .from(PlaylistTrack::Table, PlaylistTrack::PlaylistId)
                            .to(Playlist::Table, Playlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_track_track_id")
                            .from(PlaylistTrack::Table, PlaylistTrack::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_playlist_track_playlist_position")
                    .table(PlaylistTrack::Table)
                    .col(PlaylistTrack::PlaylistId)
                    .col(PlaylistTrack::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaylistTrack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlaylistTrack {
    Table,
    Id,
    PlaylistId,
    TrackId,
    Position,
    AddedAt,
}
