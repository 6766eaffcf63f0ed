use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::prelude::*;
use sea_orm::{NotSet, QueryOrder, QuerySelect, Set};

use crate::entity::coindesk_snapshots;
use crate::sources::SpotQuote;

#[derive(Clone)]
pub struct SnapshotRepository {
    db: Arc<DatabaseConnection>,
}

impl SnapshotRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn insert(&self, timestamp: DateTime<Utc>, quote: &SpotQuote) -> Result<()> {
        coindesk_snapshots::Entity::insert(coindesk_snapshots::ActiveModel {
            id: NotSet,
            timestamp: Set(timestamp),
            rate: Set(quote.price),
            rate_raw: Set(quote.rate.clone()),
            currency: Set("USD".to_string()),
            updated_iso: Set(quote.updated_iso.clone()),
        })
        .exec_without_returning(self.db.as_ref())
        .await?;
        Ok(())
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<coindesk_snapshots::Model>> {
        let rows = coindesk_snapshots::Entity::find()
            .order_by_desc(coindesk_snapshots::Column::Timestamp)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }
}
