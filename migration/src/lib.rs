pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_prices;
mod m20250601_000002_create_candles;
mod m20250601_000003_create_coindesk_snapshots;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_prices::Migration),
            Box::new(m20250601_000002_create_candles::Migration),
            Box::new(m20250601_000003_create_coindesk_snapshots::Migration),
        ]
    }
}
