use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoindeskSnapshots::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CoindeskSnapshots::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(CoindeskSnapshots::Timestamp).timestamp().not_null())
                    .col(ColumnDef::new(CoindeskSnapshots::Rate).double().not_null())
                    .col(ColumnDef::new(CoindeskSnapshots::RateRaw).string().null())
                    .col(ColumnDef::new(CoindeskSnapshots::Currency).string().not_null())
                    .col(ColumnDef::new(CoindeskSnapshots::UpdatedIso).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoindeskSnapshots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CoindeskSnapshots {
    Table,
    Id,
    Timestamp,
    Rate,
    RateRaw,
    Currency,
    UpdatedIso,
}
