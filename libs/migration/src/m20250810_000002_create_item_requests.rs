use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// Item requests are part of the persisted shape but have no API
    /// endpoints; the table exists for store compatibility only.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemRequests::Table)
                    .if_not_exists()
                    .col(string_len(ItemRequests::Id, 36).primary_key())
                    .col(text(ItemRequests::ItemName))
                    .col(string_len(ItemRequests::Phone, 13))
                    .col(
                        timestamp_with_time_zone(ItemRequests::RequestedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ItemRequests {
    Table,
    Id,
    ItemName,
    Phone,
    RequestedAt,
}
