use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Candles::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Candles::Timestamp).timestamp().not_null())
                    .col(ColumnDef::new(Candles::Timeframe).string().not_null())
                    .col(ColumnDef::new(Candles::Symbol).string().not_null())
                    .col(ColumnDef::new(Candles::Open).double().not_null())
                    .col(ColumnDef::new(Candles::High).double().not_null())
                    .col(ColumnDef::new(Candles::Low).double().not_null())
                    .col(ColumnDef::new(Candles::Close).double().not_null())
                    .col(ColumnDef::new(Candles::Volume).double().not_null())
                    .to_owned(),
            )
            .await?;

        // One row per (timestamp, timeframe, symbol) bucket; the collector
        // upserts against this key while the in-progress bar is still revised.
        manager
            .create_index(
                Index::create()
                    .name("idx_candles_bucket")
                    .table(Candles::Table)
                    .col(Candles::Timestamp)
                    .col(Candles::Timeframe)
                    .col(Candles::Symbol)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Candles {
    Table,
    Id,
    Timestamp,
    Timeframe,
    Symbol,
    Open,
    High,
    Low,
    Close,
    Volume,
}
