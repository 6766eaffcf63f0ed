use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Prices::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Prices::Timestamp).timestamp().not_null())
                    .col(ColumnDef::new(Prices::Value).double().not_null())
                    .col(ColumnDef::new(Prices::Source).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Read queries filter by window and source; no uniqueness here, every
        // observation is its own row.
        manager
            .create_index(
                Index::create()
                    .name("idx_prices_timestamp")
                    .table(Prices::Table)
                    .col(Prices::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Prices {
    Table,
    Id,
    Timestamp,
    Value,
    Source,
}
