//! SurrealDB implementation of [`FeatureRepository`].

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;
use warren_core::error::WarrenResult;
use warren_core::models::feature::{CreateFeature, Feature};
use warren_core::repository::FeatureRepository;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct FeatureRow {
    tenant_id: String,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct FeatureRowWithId {
    record_id: String,
    tenant_id: String,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl FeatureRow {
    fn into_feature(self, id: Uuid) -> Result<Feature, DbError> {
        let tenant_id = Uuid::parse_str(&self.tenant_id)
            .map_err(|e| DbError::Decode(format!("invalid tenant UUID: {e}")))?;
        Ok(Feature {
            id,
            tenant_id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        })
    }
}

impl FeatureRowWithId {
    fn try_into_feature(self) -> Result<Feature, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        let tenant_id = Uuid::parse_str(&self.tenant_id)
            .map_err(|e| DbError::Decode(format!("invalid tenant UUID: {e}")))?;
        Ok(Feature {
            id,
            tenant_id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Feature repository.
pub struct SurrealFeatureRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> Clone for SurrealFeatureRepository<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealFeatureRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> FeatureRepository for SurrealFeatureRepository<C> {
    async fn create(&self, input: CreateFeature) -> WarrenResult<Feature> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('feature', $id) SET \
                 tenant_id = $tenant_id, \
                 name = $name, \
                 description = $description",
            )
            .bind(("id", id_str.clone()))
            .bind(("tenant_id", input.tenant_id.to_string()))
            .bind(("name", input.name))
            .bind(("description", input.description))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::from_query(e, "feature"))?;

        let rows: Vec<FeatureRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "feature".into(),
            id: id_str,
        })?;

        Ok(row.into_feature(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> WarrenResult<Feature> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('feature', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<FeatureRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "feature".into(),
            id: id_str,
        })?;

        Ok(row.into_feature(id)?)
    }

    async fn list_by_tenant(&self, tenant_id: Uuid) -> WarrenResult<Vec<Feature>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM feature \
                 WHERE tenant_id = $tenant_id \
                 ORDER BY created_at ASC",
            )
            .bind(("tenant_id", tenant_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<FeatureRowWithId> = result.take(0).map_err(DbError::from)?;

        let features = rows
            .into_iter()
            .map(|row| row.try_into_feature())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(features)
    }

    async fn update(&self, id: Uuid, name: String, description: String) -> WarrenResult<Feature> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "UPDATE type::record('feature', $id) SET \
                 name = $name, description = $description",
            )
            .bind(("id", id_str.clone()))
            .bind(("name", name))
            .bind(("description", description))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<FeatureRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "feature".into(),
            id: id_str,
        })?;

        Ok(row.into_feature(id)?)
    }

    async fn delete(&self, id: Uuid) -> WarrenResult<()> {
        self.db
            .query("DELETE type::record('feature', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
