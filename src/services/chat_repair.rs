use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::database::models::{chat, whatsapp_session, SessionStatus};
use crate::errors::AppError;

/// Outcome of one repair run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepairSummary {
    pub total: usize,
    pub updated: usize,
    pub unresolved: usize,
}

/// The tenant's oldest session that is still usable for chat assignment.
/// STOPPED is terminal and never eligible; earliest created_at wins ties.
pub async fn eligible_session(
    db: &DatabaseConnection,
    tenant_id: i64,
) -> Result<Option<whatsapp_session::Model>, AppError> {
    let session = whatsapp_session::Entity::find()
        .filter(whatsapp_session::Column::TenantId.eq(tenant_id))
        .filter(whatsapp_session::Column::Status.ne(SessionStatus::Stopped))
        .order_by_asc(whatsapp_session::Column::CreatedAt)
        .one(db)
        .await?;
    Ok(session)
}

/// Backfills chats whose session reference was never set.
///
/// Idempotent: a run after every chat is fixed scans nothing and updates
/// nothing. Per-chat failures are tallied as unresolved and do not abort the
/// batch; only errors outside the loop propagate to the caller.
pub async fn repair_unassigned_chats(db: &DatabaseConnection) -> Result<RepairSummary, AppError> {
    let orphans = chat::Entity::find()
        .filter(chat::Column::SessionId.is_null())
        .order_by_asc(chat::Column::Id)
        .all(db)
        .await?;

    let mut summary = RepairSummary {
        total: orphans.len(),
        ..Default::default()
    };

    for orphan in orphans {
        match assign_session(db, &orphan).await {
            Ok(true) => summary.updated += 1,
            Ok(false) => {
                summary.unresolved += 1;
                log::warn!(
                    "No eligible session for chat {} (tenant {}); left unassigned",
                    orphan.id,
                    orphan.tenant_id
                );
            }
            Err(e) => {
                summary.unresolved += 1;
                log::error!("Failed to repair chat {}: {}", orphan.id, e);
            }
        }
    }

    Ok(summary)
}

async fn assign_session(db: &DatabaseConnection, orphan: &chat::Model) -> Result<bool, AppError> {
    let Some(session) = eligible_session(db, orphan.tenant_id).await? else {
        return Ok(false);
    };

    let mut model = chat::ActiveModel::from(orphan.clone());
    model.session_id = Set(Some(session.id));
    model.update(db).await?;

    log::info!(
        "Assigned session {} ({}) to chat {}",
        session.id,
        session.name,
        orphan.id
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::SessionProvider;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn orphan_chat(id: i64, tenant_id: i64) -> chat::Model {
        chat::Model {
            id,
            tenant_id,
            session_id: None,
            phone: format!("+49151000000{}", id),
            created_at: chrono::Utc::now(),
        }
    }

    fn session(id: i64, tenant_id: i64, status: SessionStatus) -> whatsapp_session::Model {
        whatsapp_session::Model {
            id,
            tenant_id,
            name: format!("session-{}", id),
            status,
            provider: SessionProvider::Waha,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn assigns_eligible_session_to_every_orphan() {
        let chat1 = orphan_chat(1, 10);
        let mut fixed = chat1.clone();
        fixed.session_id = Some(5);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![chat1]])
            .append_query_results([vec![session(5, 10, SessionStatus::Working)]])
            .append_query_results([vec![fixed]])
            .into_connection();

        let summary = repair_unassigned_chats(&db).await.unwrap();
        assert_eq!(
            summary,
            RepairSummary {
                total: 1,
                updated: 1,
                unresolved: 0
            }
        );
    }

    #[tokio::test]
    async fn tenant_without_eligible_session_counts_as_unresolved() {
        // The only session of tenant 20 is STOPPED, so the eligible-session
        // query comes back empty and the chat stays unassigned.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![orphan_chat(2, 20)]])
            .append_query_results([Vec::<whatsapp_session::Model>::new()])
            .into_connection();

        let summary = repair_unassigned_chats(&db).await.unwrap();
        assert_eq!(
            summary,
            RepairSummary {
                total: 1,
                updated: 0,
                unresolved: 1
            }
        );
    }

    #[tokio::test]
    async fn rerun_after_full_repair_is_a_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<chat::Model>::new()])
            .into_connection();

        let summary = repair_unassigned_chats(&db).await.unwrap();
        assert_eq!(summary, RepairSummary::default());

        // Exactly one scan query, no writes.
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn per_chat_failure_does_not_abort_the_batch() {
        let chat3 = orphan_chat(3, 10);
        let chat4 = orphan_chat(4, 10);
        let mut fixed = chat4.clone();
        fixed.session_id = Some(5);

        // First orphan hits a query error; second is still repaired.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![chat3, chat4]])
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .append_query_results([vec![session(5, 10, SessionStatus::Working)]])
            .append_query_results([vec![fixed]])
            .into_connection();

        let summary = repair_unassigned_chats(&db).await.unwrap();
        assert_eq!(
            summary,
            RepairSummary {
                total: 2,
                updated: 1,
                unresolved: 1
            }
        );
    }
}
