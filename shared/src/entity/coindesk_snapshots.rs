//! `SeaORM` Entity, @generated manually

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Denormalized mirror of one Coindesk current-price response. Append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coindesk_snapshots")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i64,
    pub timestamp: DateTimeUtc,
    pub rate: f64,
    #[sea_orm(nullable)]
    pub rate_raw: Option<String>,
    pub currency: String,
    #[sea_orm(nullable)]
    pub updated_iso: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
