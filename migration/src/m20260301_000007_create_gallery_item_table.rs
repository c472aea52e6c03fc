use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryItem::Table)
                    .if_not_exists()
                    .col(string(GalleryItem::Id).primary_key())
                    .col(string(GalleryItem::UploaderId))
                    .col(string(GalleryItem::Kind))
                    .col(string(GalleryItem::FileKey))
                    .col(string(GalleryItem::ContentType))
                    .col(big_integer(GalleryItem::SizeBytes))
                    .col(text_null(GalleryItem::Caption))
                    .col(
                        timestamp(GalleryItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_item_uploader_id")
                            .from(GalleryItem::Table, GalleryItem::UploaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GalleryItem {
    Table,
    Id,
    UploaderId,
    Kind,
    FileKey,
    ContentType,
    SizeBytes,
    Caption,
    CreatedAt,
}
