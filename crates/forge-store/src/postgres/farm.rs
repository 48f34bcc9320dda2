use async_trait::async_trait;
use forge_core::error::{ForgeError, Result};
use forge_core::models::{Farm, FarmId, OwnerId};
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::PostgresStore;
use crate::ports::FarmStore;

fn row_to_farm(row: &PgRow) -> Farm {
    Farm {
        id: FarmId(row.get("id")),
        owner: OwnerId::new(row.get::<String, _>("owner_id")),
        name: row.get("name"),
        description: row.get("description"),
        location: row.get("location"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl FarmStore for PostgresStore {
    async fn create_farm(&self, farm: &Farm) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO farms (id, owner_id, name, description, location, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(farm.id.0)
        .bind(farm.owner.as_str())
        .bind(&farm.name)
        .bind(&farm.description)
        .bind(&farm.location)
        .bind(farm.created_at)
        .bind(farm.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to create farm: {e}")))?;

        tracing::debug!(id = %farm.id, "Inserted farm row");
        Ok(())
    }

    async fn get_farm(&self, owner: &OwnerId, id: FarmId) -> Result<Option<Farm>> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, name, description, location, created_at, updated_at
            FROM farms
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.as_str())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to get farm: {e}")))?;

        Ok(row.as_ref().map(row_to_farm))
    }

    async fn list_farms(&self, owner: &OwnerId) -> Result<Vec<Farm>> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, name, description, location, created_at, updated_at
            FROM farms
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to list farms: {e}")))?;

        Ok(rows.iter().map(row_to_farm).collect())
    }

    async fn update_farm(&self, farm: &Farm) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE farms
            SET name = $3, description = $4, location = $5, updated_at = $6
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(farm.id.0)
        .bind(farm.owner.as_str())
        .bind(&farm.name)
        .bind(&farm.description)
        .bind(&farm.location)
        .bind(farm.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to update farm: {e}")))?;

        tracing::debug!(id = %farm.id, touched = result.rows_affected(), "Updated farm row");
        Ok(result.rows_affected() > 0)
    }

    async fn delete_farm(&self, owner: &OwnerId, id: FarmId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM farms WHERE id = $1 AND owner_id = $2")
            .bind(id.0)
            .bind(owner.as_str())
            .execute(self.pool())
            .await
            .map_err(|e| ForgeError::Storage(format!("Failed to delete farm: {e}")))?;

        tracing::debug!(id = %id, touched = result.rows_affected(), "Deleted farm row");
        Ok(result.rows_affected() > 0)
    }
}
