use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::database::models::{chat, tenant, whatsapp_session, SessionProvider, SessionStatus};
use crate::errors::AppError;

/// One line of the diagnostics report.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub tenant_slug: String,
    pub name: String,
    pub status: SessionStatus,
    pub provider: SessionProvider,
    pub chats: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DiagnosticsReport {
    pub sessions: Vec<SessionReport>,
    pub orphan_chats: u64,
}

/// Read-only survey of all registered sessions and how many chats hang off
/// each, plus the count of chats with no session at all (candidates for
/// `fix-chats`).
pub async fn survey(db: &DatabaseConnection) -> Result<DiagnosticsReport, AppError> {
    let tenants = tenant::Entity::find().all(db).await?;

    let mut report = DiagnosticsReport::default();
    for t in tenants {
        let sessions = whatsapp_session::Entity::find()
            .filter(whatsapp_session::Column::TenantId.eq(t.id))
            .all(db)
            .await?;

        for s in sessions {
            let chats = chat::Entity::find()
                .filter(chat::Column::SessionId.eq(s.id))
                .count(db)
                .await?;
            report.sessions.push(SessionReport {
                tenant_slug: t.slug.clone(),
                name: s.name,
                status: s.status,
                provider: s.provider,
                chats,
            });
        }
    }

    report.orphan_chats = chat::Entity::find()
        .filter(chat::Column::SessionId.is_null())
        .count(db)
        .await?;

    Ok(report)
}
