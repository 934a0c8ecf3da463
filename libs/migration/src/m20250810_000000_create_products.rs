use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(string_len(Products::Id, 36).primary_key())
                    .col(string_len(Products::Name, 100))
                    .col(text_null(Products::Description))
                    .col(string_len(Products::Category, 50))
                    .col(string_len(Products::SubCategory, 50))
                    .col(string_len(Products::Gender, 20).default("undefined"))
                    .col(double(Products::Price))
                    .col(double(Products::Discount).default(0.0))
                    .col(string_len(Products::Image, 255))
                    // JSON array of extra image URLs, stored as text
                    .col(text(Products::MoreImages).default("[]"))
                    .col(
                        timestamp_with_time_zone(Products::UploadedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(big_integer(Products::Likes).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Category,
    SubCategory,
    Gender,
    Price,
    Discount,
    Image,
    MoreImages,
    UploadedAt,
    Likes,
}
