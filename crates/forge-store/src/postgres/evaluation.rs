use async_trait::async_trait;
use forge_core::cost::InfrastructureType;
use forge_core::error::{ForgeError, Result};
use forge_core::models::{
    AreaUnit, BoundaryPoint, EvaluationId, EvaluationStatus, FarmId, OwnerId, SiteEvaluation,
};
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::PostgresStore;
use crate::ports::EvaluationStore;

fn row_to_evaluation(row: &PgRow) -> Result<SiteEvaluation> {
    let boundary: Vec<BoundaryPoint> =
        serde_json::from_value(row.get::<serde_json::Value, _>("boundary"))
            .map_err(|e| ForgeError::Storage(format!("Corrupt boundary column: {e}")))?;

    // Enum columns are stored as their wire strings; unknown values would
    // mean the database was written by something newer than this binary.
    let area_unit =
        row.get::<String, _>("area_unit").parse::<AreaUnit>().unwrap_or_default();
    let status = match row.get::<String, _>("status").as_str() {
        "submitted" => EvaluationStatus::Submitted,
        _ => EvaluationStatus::Draft,
    };
    let infrastructure = row
        .get::<Option<String>, _>("infrastructure")
        .as_deref()
        .map(str::parse::<InfrastructureType>)
        .transpose()
        .map_err(|e| ForgeError::Storage(format!("Corrupt infrastructure column: {e}")))?;

    Ok(SiteEvaluation {
        id: EvaluationId(row.get("id")),
        owner: OwnerId::new(row.get::<String, _>("owner_id")),
        farm_id: row.get::<Option<uuid::Uuid>, _>("farm_id").map(FarmId),
        name: row.get("name"),
        boundary,
        area: row.get("area"),
        area_unit,
        slope: row.get("slope"),
        infrastructure,
        cost_estimate: row.get("cost_estimate"),
        cost_currency: row.get("cost_currency"),
        status,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn boundary_json(evaluation: &SiteEvaluation) -> Result<serde_json::Value> {
    serde_json::to_value(&evaluation.boundary)
        .map_err(|e| ForgeError::Storage(format!("Failed to encode boundary: {e}")))
}

const EVALUATION_COLUMNS: &str = "id, owner_id, farm_id, name, boundary, area, area_unit, \
     slope, infrastructure, cost_estimate, cost_currency, status, created_at, updated_at";

#[async_trait]
impl EvaluationStore for PostgresStore {
    async fn create_evaluation(&self, evaluation: &SiteEvaluation) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO site_evaluations
                (id, owner_id, farm_id, name, boundary, area, area_unit, slope,
                 infrastructure, cost_estimate, cost_currency, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(evaluation.id.0)
        .bind(evaluation.owner.as_str())
        .bind(evaluation.farm_id.map(|f| f.0))
        .bind(&evaluation.name)
        .bind(boundary_json(evaluation)?)
        .bind(evaluation.area)
        .bind(evaluation.area_unit.as_str())
        .bind(evaluation.slope)
        .bind(evaluation.infrastructure.map(|i| i.as_str()))
        .bind(evaluation.cost_estimate)
        .bind(&evaluation.cost_currency)
        .bind(evaluation.status.as_str())
        .bind(evaluation.created_at)
        .bind(evaluation.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to create evaluation: {e}")))?;

        tracing::debug!(id = %evaluation.id, "Inserted evaluation row");
        Ok(())
    }

    async fn get_evaluation(
        &self,
        owner: &OwnerId,
        id: EvaluationId,
    ) -> Result<Option<SiteEvaluation>> {
        let row = sqlx::query(&format!(
            "SELECT {EVALUATION_COLUMNS} FROM site_evaluations WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id.0)
        .bind(owner.as_str())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to get evaluation: {e}")))?;

        row.as_ref().map(row_to_evaluation).transpose()
    }

    async fn list_evaluations(
        &self,
        owner: &OwnerId,
        farm: Option<FarmId>,
    ) -> Result<Vec<SiteEvaluation>> {
        let rows = match farm {
            Some(farm_id) => {
                sqlx::query(&format!(
                    "SELECT {EVALUATION_COLUMNS} FROM site_evaluations \
                     WHERE owner_id = $1 AND farm_id = $2 ORDER BY updated_at DESC"
                ))
                .bind(owner.as_str())
                .bind(farm_id.0)
                .fetch_all(self.pool())
                .await
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {EVALUATION_COLUMNS} FROM site_evaluations \
                     WHERE owner_id = $1 ORDER BY updated_at DESC"
                ))
                .bind(owner.as_str())
                .fetch_all(self.pool())
                .await
            }
        }
        .map_err(|e| ForgeError::Storage(format!("Failed to list evaluations: {e}")))?;

        rows.iter().map(row_to_evaluation).collect()
    }

    async fn update_evaluation(&self, evaluation: &SiteEvaluation) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE site_evaluations
            SET farm_id = $3, name = $4, boundary = $5, area = $6, area_unit = $7,
                slope = $8, infrastructure = $9, cost_estimate = $10,
                cost_currency = $11, status = $12, updated_at = $13
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(evaluation.id.0)
        .bind(evaluation.owner.as_str())
        .bind(evaluation.farm_id.map(|f| f.0))
        .bind(&evaluation.name)
        .bind(boundary_json(evaluation)?)
        .bind(evaluation.area)
        .bind(evaluation.area_unit.as_str())
        .bind(evaluation.slope)
        .bind(evaluation.infrastructure.map(|i| i.as_str()))
        .bind(evaluation.cost_estimate)
        .bind(&evaluation.cost_currency)
        .bind(evaluation.status.as_str())
        .bind(evaluation.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to update evaluation: {e}")))?;

        tracing::debug!(
            id = %evaluation.id,
            touched = result.rows_affected(),
            "Updated evaluation row"
        );
        Ok(result.rows_affected() > 0)
    }

    async fn delete_evaluation(&self, owner: &OwnerId, id: EvaluationId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM site_evaluations WHERE id = $1 AND owner_id = $2")
            .bind(id.0)
            .bind(owner.as_str())
            .execute(self.pool())
            .await
            .map_err(|e| ForgeError::Storage(format!("Failed to delete evaluation: {e}")))?;

        tracing::debug!(id = %id, touched = result.rows_affected(), "Deleted evaluation row");
        Ok(result.rows_affected() > 0)
    }
}
