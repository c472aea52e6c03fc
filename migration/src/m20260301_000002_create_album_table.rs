use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Album::Table)
                    .if_not_exists()
                    .col(string(Album::Id).primary_key())
                    .col(string_uniq(Album::Name))
                    .col(string(Album::Title))
                    .col(string_null(Album::Artist))
                    .col(integer_null(Album::Year))
                    .col(text_null(Album::Description))
                    .col(
                        timestamp(Album::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Album::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Album {
    Table,
    Id,
    Name,
    Title,
    Artist,
    Year,
    Description,
    CreatedAt,
}
