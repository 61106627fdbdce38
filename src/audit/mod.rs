//! Best-effort audit trail for mutating admin actions.
//!
//! Every mutating handler calls [`record`] after its own write has been
//! applied. The recorder is a side channel: a failed insert is logged and
//! dropped, never surfaced to the HTTP client and never able to roll back
//! the business mutation it describes.

use serde::Serialize;

use crate::database::{Database, DatabaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append one audit row. Infallible by contract: errors are swallowed here.
pub async fn record(admin_id: i64, action: AuditAction, entity: &str, entity_id: i64, ip: &str) {
    if let Err(err) = try_record(admin_id, action, entity, entity_id, ip).await {
        tracing::warn!(
            admin_id,
            action = action.as_str(),
            entity,
            entity_id,
            "Audit write dropped: {}",
            err
        );
    }
}

async fn try_record(
    admin_id: i64,
    action: AuditAction,
    entity: &str,
    entity_id: i64,
    ip: &str,
) -> Result<(), DatabaseError> {
    let pool = Database::pool().await?;
    sqlx::query(
        "INSERT INTO admin_audit_log (admin_id, action, entity, entity_id, ip_address)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(admin_id)
    .bind(action.as_str())
    .bind(entity)
    .bind(entity_id)
    .bind(ip)
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tags_match_stored_values() {
        assert_eq!(AuditAction::Create.as_str(), "CREATE");
        assert_eq!(AuditAction::Update.as_str(), "UPDATE");
        assert_eq!(AuditAction::Delete.as_str(), "DELETE");
        assert_eq!(AuditAction::Delete.to_string(), "DELETE");
    }

    /// A failed audit write must never surface to the caller: with no
    /// database configured the insert cannot succeed, yet `record` returns
    /// normally instead of erroring or panicking.
    #[tokio::test]
    async fn dropped_write_never_reaches_the_caller() {
        std::env::remove_var("DATABASE_URL");
        record(1, AuditAction::Create, "COURSE", 42, "127.0.0.1").await;
    }
}
