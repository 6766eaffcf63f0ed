use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::prelude::*;
use sea_orm::{QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::entity::prices;
use crate::models::Period;

#[derive(Clone)]
pub struct PriceRepository {
    db: Arc<DatabaseConnection>,
}

impl PriceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Append one observation. Never an upsert: every tick is a new row.
    pub async fn insert(
        &self,
        timestamp: DateTime<Utc>,
        value: f64,
        source: &str,
    ) -> Result<prices::Model> {
        let model = prices::Model {
            id: Uuid::new_v4(),
            timestamp,
            value,
            source: source.to_string(),
        };
        prices::Entity::insert(prices::ActiveModel {
            id: Set(model.id),
            timestamp: Set(model.timestamp),
            value: Set(model.value),
            source: Set(model.source.clone()),
        })
        .exec(self.db.as_ref())
        .await?;
        Ok(model)
    }

    /// Chunked so a large seed import stays under bind-parameter limits.
    pub async fn bulk_insert(&self, rows: Vec<prices::ActiveModel>) -> Result<u64> {
        if rows.is_empty() {
            return Ok(0);
        }
        let count = rows.len() as u64;
        for chunk in rows.chunks(1000) {
            prices::Entity::insert_many(chunk.to_vec())
                .exec_without_returning(self.db.as_ref())
                .await?;
        }
        Ok(count)
    }

    /// Rows inside the period's lookback window, ascending by timestamp.
    /// A limit caps to the most recent N rows, still returned ascending.
    pub async fn window(
        &self,
        period: Period,
        source: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Vec<prices::Model>> {
        let cutoff = period.cutoff(Utc::now());
        let mut query = prices::Entity::find().filter(prices::Column::Timestamp.gte(cutoff));
        if let Some(source) = source {
            query = query.filter(prices::Column::Source.eq(source));
        }
        match limit {
            Some(limit) => {
                let mut rows = query
                    .order_by_desc(prices::Column::Timestamp)
                    .limit(limit)
                    .all(self.db.as_ref())
                    .await?;
                rows.reverse();
                Ok(rows)
            }
            None => Ok(query
                .order_by_asc(prices::Column::Timestamp)
                .all(self.db.as_ref())
                .await?),
        }
    }

    pub async fn count_by_source(&self, source: &str) -> Result<u64> {
        let count = prices::Entity::find()
            .filter(prices::Column::Source.eq(source))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
