use async_trait::async_trait;
use forge_core::error::{ForgeError, Result};
use forge_core::models::{EvaluationId, OwnerId, Proposal, ProposalId, ProposalStatus};
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::PostgresStore;
use crate::ports::ProposalStore;

fn row_to_proposal(row: &PgRow) -> Proposal {
    let status =
        row.get::<String, _>("status").parse::<ProposalStatus>().unwrap_or_default();

    Proposal {
        id: ProposalId(row.get("id")),
        owner: OwnerId::new(row.get::<String, _>("owner_id")),
        evaluation_id: EvaluationId(row.get("evaluation_id")),
        title: row.get("title"),
        content: row.get("content"),
        status,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl ProposalStore for PostgresStore {
    async fn create_proposal(&self, proposal: &Proposal) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO proposals
                (id, owner_id, evaluation_id, title, content, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(proposal.id.0)
        .bind(proposal.owner.as_str())
        .bind(proposal.evaluation_id.0)
        .bind(&proposal.title)
        .bind(&proposal.content)
        .bind(proposal.status.as_str())
        .bind(proposal.created_at)
        .bind(proposal.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to create proposal: {e}")))?;

        tracing::debug!(id = %proposal.id, "Inserted proposal row");
        Ok(())
    }

    async fn get_proposal(&self, owner: &OwnerId, id: ProposalId) -> Result<Option<Proposal>> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, evaluation_id, title, content, status, created_at, updated_at
            FROM proposals
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.as_str())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to get proposal: {e}")))?;

        Ok(row.as_ref().map(row_to_proposal))
    }

    async fn list_proposals(&self, owner: &OwnerId) -> Result<Vec<Proposal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, evaluation_id, title, content, status, created_at, updated_at
            FROM proposals
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to list proposals: {e}")))?;

        Ok(rows.iter().map(row_to_proposal).collect())
    }

    async fn update_proposal(&self, proposal: &Proposal) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE proposals
            SET title = $3, content = $4, status = $5, updated_at = $6
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(proposal.id.0)
        .bind(proposal.owner.as_str())
        .bind(&proposal.title)
        .bind(&proposal.content)
        .bind(proposal.status.as_str())
        .bind(proposal.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| ForgeError::Storage(format!("Failed to update proposal: {e}")))?;

        tracing::debug!(
            id = %proposal.id,
            touched = result.rows_affected(),
            "Updated proposal row"
        );
        Ok(result.rows_affected() > 0)
    }
}
