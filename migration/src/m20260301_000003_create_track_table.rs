use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_album_table::Album;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(string(Track::Id).primary_key())
                    .col(string(Track::AlbumId))
                    .col(string(Track::Title))
                    .col(string(Track::FileKey))
                    .col(double(Track::DurationSeconds).default(0.0))
                    .col(integer(Track::Position))
                    .col(string_null(Track::Codec))
                    .col(integer_null(Track::BitrateKbps))
                    .col(integer_null(Track::SampleRate))
                    .col(integer_null(Track::Channels))
                    .col(
                        timestamp(Track::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_album_id")
                            .from(Track::Table, Track::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_album_position")
                    .table(Track::Table)
                    .col(Track::AlbumId)
                    .col(Track::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Track {
    Table,
    Id,
    AlbumId,
    Title,
    FileKey,
    DurationSeconds,
    Position,
    Codec,
    BitrateKbps,
    SampleRate,
    Channels,
    CreatedAt,
}
