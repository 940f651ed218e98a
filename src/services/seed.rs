use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde_json::json;

use crate::config::SeedDefaults;
use crate::database::models::{
    activity, campaign, campaign_message, category, company, contact, global_settings,
    opportunity, tenant, tenant_settings, user, user_tenant, whatsapp_session, ActivityPriority,
    ActivityStatus, ActivityType, CampaignMessageStatus, CampaignStatus, CompanySize, MessageType,
    OpportunityStage, SessionProvider, SessionStatus, UserRole,
};
use crate::errors::AppError;

pub const DEMO_TENANT_SLUG: &str = "demo";

/// Row counts written by one seed run, for the CLI report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub tenants: usize,
    pub users: usize,
    pub categories: usize,
    pub contacts: usize,
    pub companies: usize,
    pub sessions: usize,
    pub campaigns: usize,
    pub opportunities: usize,
    pub activities: usize,
}

/// Builds the deterministic demo data set.
///
/// Singleton and unique rows (global settings, tenant by slug, users by email,
/// sessions by tenant+name) are upserted and survive reruns unduplicated.
/// List rows (categories, contacts, companies, campaigns, opportunities,
/// activities) are created unconditionally: rerunning the seed duplicates
/// them. That is accepted behavior for a fixture script.
pub async fn run(db: &DatabaseConnection, defaults: &SeedDefaults) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    upsert_global_settings(db, defaults).await?;

    let demo = upsert_tenant(db, DEMO_TENANT_SLUG, "Demo Tenant").await?;
    report.tenants = 1;
    upsert_tenant_settings(db, demo.id, defaults).await?;

    let users: [(&str, &str, UserRole, Option<i64>); 3] = [
        ("root@zapcrm.local", "Platform Root", UserRole::Superadmin, None),
        ("admin@demo.local", "Demo Admin", UserRole::Admin, Some(demo.id)),
        ("agent@demo.local", "Demo Agent", UserRole::User, Some(demo.id)),
    ];
    for (email, name, role, tenant_id) in users {
        let u = upsert_user(db, email, name, role, tenant_id).await?;
        if let Some(tid) = tenant_id {
            upsert_membership(db, u.id, tid, role).await?;
        }
        report.users += 1;
    }

    let categories = [("Leads", "#3b82f6"), ("Customers", "#10b981"), ("Partners", "#f59e0b")];
    let mut category_ids = Vec::new();
    for (name, color) in categories {
        let row = category::ActiveModel {
            tenant_id: Set(demo.id),
            name: Set(name.to_string()),
            color: Set(color.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        category_ids.push(row.id);
        report.categories += 1;
    }

    let contacts = [
        ("Alice Martin", "+4915112345601", vec!["vip", "newsletter"]),
        ("Bruno Costa", "+4915112345602", vec!["newsletter"]),
        ("Carla Mendes", "+4915112345603", vec!["vip"]),
        ("Diego Alves", "+4915112345604", vec![]),
    ];
    let mut contact_ids = Vec::new();
    for (i, (name, phone, tags)) in contacts.iter().enumerate() {
        let row = contact::ActiveModel {
            tenant_id: Set(demo.id),
            name: Set(name.to_string()),
            phone: Set(phone.to_string()),
            tags: Set(json!(tags)),
            category_id: Set(category_ids.get(i % category_ids.len()).copied()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        contact_ids.push(row.id);
        report.contacts += 1;
    }

    let companies = [
        ("Acme GmbH", CompanySize::Medium, vec!["manufacturing"]),
        ("Globex AG", CompanySize::Enterprise, vec!["logistics", "vip"]),
    ];
    let mut company_ids = Vec::new();
    for (name, size, tags) in companies {
        let row = company::ActiveModel {
            tenant_id: Set(demo.id),
            name: Set(name.to_string()),
            size: Set(size),
            tags: Set(json!(tags)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        company_ids.push(row.id);
        report.companies += 1;
    }

    let sessions = [
        ("demo-waha", SessionProvider::Waha),
        ("demo-evolution", SessionProvider::Evolution),
    ];
    let mut session_names = Vec::new();
    for (name, provider) in sessions {
        upsert_session(db, demo.id, name, provider).await?;
        session_names.push(name.to_string());
        report.sessions += 1;
    }

    let campaigns = [
        ("Welcome blast", vec!["newsletter"], MessageType::Text, "Welcome aboard!"),
        ("VIP offer", vec!["vip"], MessageType::Image, "Exclusive deal for you"),
    ];
    for (i, (name, tags, message_type, content)) in campaigns.iter().enumerate() {
        let row = campaign::ActiveModel {
            tenant_id: Set(demo.id),
            name: Set(name.to_string()),
            target_tags: Set(json!(tags)),
            session_names: Set(json!([session_names[i % session_names.len()]])),
            message_type: Set(*message_type),
            message_content: Set(content.to_string()),
            status: Set(CampaignStatus::Draft),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        campaign_message::ActiveModel {
            campaign_id: Set(row.id),
            contact_id: Set(contact_ids[i % contact_ids.len()]),
            session_name: Set(session_names[i % session_names.len()].clone()),
            status: Set(CampaignMessageStatus::Pending),
            ..Default::default()
        }
        .insert(db)
        .await?;
        report.campaigns += 1;
    }

    let stages = [
        (OpportunityStage::Qualified, 20, 5_000.0),
        (OpportunityStage::Proposal, 40, 12_000.0),
        (OpportunityStage::Negotiation, 65, 8_500.0),
        (OpportunityStage::ClosedWon, 100, 20_000.0),
        (OpportunityStage::ClosedLost, 0, 3_000.0),
    ];
    for (i, (stage, probability, value)) in stages.iter().enumerate() {
        opportunity::ActiveModel {
            tenant_id: Set(demo.id),
            title: Set(format!("Deal #{}", i + 1)),
            contact_id: Set(contact_ids[i % contact_ids.len()]),
            company_id: Set(company_ids.get(i % company_ids.len()).copied()),
            stage: Set(*stage),
            probability: Set(*probability),
            value: Set(*value),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        report.opportunities += 1;
    }

    let activities = [
        (ActivityType::Call, ActivityPriority::High),
        (ActivityType::Meeting, ActivityPriority::Urgent),
        (ActivityType::Email, ActivityPriority::Low),
        (ActivityType::Task, ActivityPriority::Medium),
    ];
    for (i, (kind, priority)) in activities.iter().enumerate() {
        activity::ActiveModel {
            tenant_id: Set(demo.id),
            title: Set(format!("Follow up #{}", i + 1)),
            opportunity_id: Set(None),
            contact_id: Set(contact_ids.get(i % contact_ids.len()).copied()),
            r#type: Set(*kind),
            status: Set(ActivityStatus::Pending),
            priority: Set(*priority),
            due_date: Set(Some(Utc::now())),
            completed_at: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;
        report.activities += 1;
    }

    log::info!("Seed complete for tenant '{}'", DEMO_TENANT_SLUG);
    Ok(report)
}

pub async fn upsert_global_settings(
    db: &DatabaseConnection,
    defaults: &SeedDefaults,
) -> Result<global_settings::Model, AppError> {
    let existing = global_settings::Entity::find_by_id(global_settings::SINGLETON_ID)
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let created = global_settings::ActiveModel {
        id: Set(global_settings::SINGLETON_ID.to_string()),
        company_name: Set(defaults.company_name.clone()),
        page_title: Set(defaults.page_title.clone()),
        logo_url: Set(defaults.logo_url.clone()),
        favicon_url: Set(defaults.favicon_url.clone()),
        primary_color: Set(defaults.primary_color.clone()),
    }
    .insert(db)
    .await?;
    Ok(created)
}

pub async fn upsert_tenant(
    db: &DatabaseConnection,
    slug: &str,
    name: &str,
) -> Result<tenant::Model, AppError> {
    let existing = tenant::Entity::find()
        .filter(tenant::Column::Slug.eq(slug))
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let created = tenant::ActiveModel {
        slug: Set(slug.to_string()),
        name: Set(name.to_string()),
        active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(created)
}

async fn upsert_tenant_settings(
    db: &DatabaseConnection,
    tenant_id: i64,
    defaults: &SeedDefaults,
) -> Result<tenant_settings::Model, AppError> {
    let existing = tenant_settings::Entity::find()
        .filter(tenant_settings::Column::TenantId.eq(tenant_id))
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let created = tenant_settings::ActiveModel {
        tenant_id: Set(tenant_id),
        waha_host: Set(Some(defaults.waha_host.clone())),
        waha_api_key: Set(Some(defaults.waha_api_key.clone())),
        evolution_host: Set(Some(defaults.evolution_host.clone())),
        evolution_api_key: Set(Some(defaults.evolution_api_key.clone())),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(created)
}

pub async fn upsert_user(
    db: &DatabaseConnection,
    email: &str,
    name: &str,
    role: UserRole,
    tenant_id: Option<i64>,
) -> Result<user::Model, AppError> {
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let created = user::ActiveModel {
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        role: Set(role),
        tenant_id: Set(tenant_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(created)
}

async fn upsert_membership(
    db: &DatabaseConnection,
    user_id: i64,
    tenant_id: i64,
    role: UserRole,
) -> Result<user_tenant::Model, AppError> {
    let existing = user_tenant::Entity::find_by_id((user_id, tenant_id))
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let created = user_tenant::ActiveModel {
        user_id: Set(user_id),
        tenant_id: Set(tenant_id),
        role: Set(role),
    }
    .insert(db)
    .await?;
    Ok(created)
}

async fn upsert_session(
    db: &DatabaseConnection,
    tenant_id: i64,
    name: &str,
    provider: SessionProvider,
) -> Result<whatsapp_session::Model, AppError> {
    let existing = whatsapp_session::Entity::find()
        .filter(whatsapp_session::Column::TenantId.eq(tenant_id))
        .filter(whatsapp_session::Column::Name.eq(name))
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let created = whatsapp_session::ActiveModel {
        tenant_id: Set(tenant_id),
        name: Set(name.to_string()),
        status: Set(SessionStatus::Starting),
        provider: Set(provider),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn demo_tenant() -> tenant::Model {
        tenant::Model {
            id: 1,
            slug: DEMO_TENANT_SLUG.to_string(),
            name: "Demo Tenant".to_string(),
            active: true,
            created_at: Utc::now(),
        }
    }

    fn defaults() -> SeedDefaults {
        SeedDefaults {
            waha_host: "http://localhost:3000".to_string(),
            waha_api_key: "".to_string(),
            evolution_host: "http://localhost:8080".to_string(),
            evolution_api_key: "".to_string(),
            company_name: "ZapCRM".to_string(),
            page_title: "ZapCRM".to_string(),
            logo_url: "/logo.png".to_string(),
            favicon_url: "/favicon.ico".to_string(),
            primary_color: "#059669".to_string(),
        }
    }

    fn seeded_global_settings() -> global_settings::Model {
        global_settings::Model {
            id: global_settings::SINGLETON_ID.to_string(),
            company_name: "ZapCRM".to_string(),
            page_title: "ZapCRM".to_string(),
            logo_url: "/logo.png".to_string(),
            favicon_url: "/favicon.ico".to_string(),
            primary_color: "#059669".to_string(),
        }
    }

    fn seeded_settings() -> tenant_settings::Model {
        tenant_settings::Model {
            id: 1,
            tenant_id: 1,
            waha_host: Some("http://localhost:3000".to_string()),
            waha_api_key: Some(String::new()),
            evolution_host: Some("http://localhost:8080".to_string()),
            evolution_api_key: Some(String::new()),
            company_name: None,
            page_title: None,
            logo_url: None,
            favicon_url: None,
            primary_color: None,
        }
    }

    fn seeded_user(id: i64, email: &str, role: UserRole, tenant_id: Option<i64>) -> user::Model {
        user::Model {
            id,
            email: email.to_string(),
            name: email.to_string(),
            role,
            tenant_id,
            created_at: Utc::now(),
        }
    }

    fn seeded_membership(user_id: i64, role: UserRole) -> user_tenant::Model {
        user_tenant::Model {
            user_id,
            tenant_id: 1,
            role,
        }
    }

    fn seeded_category(id: i64) -> category::Model {
        category::Model {
            id,
            tenant_id: 1,
            name: "Leads".to_string(),
            color: "#3b82f6".to_string(),
        }
    }

    fn seeded_contact(id: i64) -> contact::Model {
        contact::Model {
            id,
            tenant_id: 1,
            name: "Alice Martin".to_string(),
            phone: "+4915112345601".to_string(),
            tags: json!(["vip"]),
            category_id: Some(1),
            created_at: Utc::now(),
        }
    }

    fn seeded_company(id: i64) -> company::Model {
        company::Model {
            id,
            tenant_id: 1,
            name: "Acme GmbH".to_string(),
            size: CompanySize::Medium,
            tags: json!(["manufacturing"]),
        }
    }

    fn seeded_session(id: i64, name: &str, provider: SessionProvider) -> whatsapp_session::Model {
        whatsapp_session::Model {
            id,
            tenant_id: 1,
            name: name.to_string(),
            status: SessionStatus::Starting,
            provider,
            created_at: Utc::now(),
        }
    }

    fn seeded_campaign(id: i64) -> campaign::Model {
        campaign::Model {
            id,
            tenant_id: 1,
            name: "Welcome blast".to_string(),
            target_tags: json!(["newsletter"]),
            session_names: json!(["demo-waha"]),
            message_type: MessageType::Text,
            message_content: "Welcome aboard!".to_string(),
            status: CampaignStatus::Draft,
            created_at: Utc::now(),
        }
    }

    fn seeded_campaign_message(id: i64) -> campaign_message::Model {
        campaign_message::Model {
            id,
            campaign_id: 1,
            contact_id: 1,
            session_name: "demo-waha".to_string(),
            status: CampaignMessageStatus::Pending,
        }
    }

    fn seeded_opportunity(id: i64) -> opportunity::Model {
        opportunity::Model {
            id,
            tenant_id: 1,
            title: format!("Deal #{}", id),
            contact_id: 1,
            company_id: Some(1),
            stage: OpportunityStage::Qualified,
            probability: 20,
            value: 5_000.0,
            created_at: Utc::now(),
        }
    }

    fn seeded_activity(id: i64) -> activity::Model {
        activity::Model {
            id,
            tenant_id: 1,
            title: format!("Follow up #{}", id),
            opportunity_id: None,
            contact_id: Some(1),
            r#type: ActivityType::Call,
            status: ActivityStatus::Pending,
            priority: ActivityPriority::High,
            due_date: Some(Utc::now()),
            completed_at: None,
        }
    }

    #[tokio::test]
    async fn tenant_upsert_reuses_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![demo_tenant()]])
            .into_connection();

        let row = upsert_tenant(&db, DEMO_TENANT_SLUG, "Demo Tenant").await.unwrap();
        assert_eq!(row.id, 1);

        // Lookup only; a second run must not insert a duplicate tenant.
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn tenant_upsert_creates_when_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tenant::Model>::new()])
            .append_query_results([vec![demo_tenant()]])
            .into_connection();

        let row = upsert_tenant(&db, DEMO_TENANT_SLUG, "Demo Tenant").await.unwrap();
        assert_eq!(row.slug, DEMO_TENANT_SLUG);
        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn user_upsert_by_email_is_idempotent() {
        let existing = user::Model {
            id: 3,
            email: "root@zapcrm.local".to_string(),
            name: "Platform Root".to_string(),
            role: UserRole::Superadmin,
            tenant_id: None,
            created_at: Utc::now(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .into_connection();

        let row = upsert_user(&db, "root@zapcrm.local", "Platform Root", UserRole::Superadmin, None)
            .await
            .unwrap();
        assert_eq!(row.id, 3);
        assert_eq!(row.tenant_id, None);
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn global_settings_singleton_is_not_duplicated() {
        let existing = global_settings::Model {
            id: global_settings::SINGLETON_ID.to_string(),
            company_name: "ZapCRM".to_string(),
            page_title: "ZapCRM".to_string(),
            logo_url: "/logo.png".to_string(),
            favicon_url: "/favicon.ico".to_string(),
            primary_color: "#059669".to_string(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .into_connection();

        let row = upsert_global_settings(&db, &defaults()).await.unwrap();
        assert_eq!(row.id, global_settings::SINGLETON_ID);
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn rerun_duplicates_list_rows_but_not_singletons() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // First run: every unique-key lookup misses, everything inserts.
            .append_query_results([Vec::<global_settings::Model>::new()])
            .append_query_results([vec![seeded_global_settings()]])
            .append_query_results([Vec::<tenant::Model>::new()])
            .append_query_results([vec![demo_tenant()]])
            .append_query_results([Vec::<tenant_settings::Model>::new()])
            .append_query_results([vec![seeded_settings()]])
            .append_query_results([Vec::<user::Model>::new()])
            .append_query_results([vec![seeded_user(3, "root@zapcrm.local", UserRole::Superadmin, None)]])
            .append_query_results([Vec::<user::Model>::new()])
            .append_query_results([vec![seeded_user(4, "admin@demo.local", UserRole::Admin, Some(1))]])
            .append_query_results([Vec::<user_tenant::Model>::new()])
            .append_query_results([vec![seeded_membership(4, UserRole::Admin)]])
            .append_query_results([Vec::<user::Model>::new()])
            .append_query_results([vec![seeded_user(5, "agent@demo.local", UserRole::User, Some(1))]])
            .append_query_results([Vec::<user_tenant::Model>::new()])
            .append_query_results([vec![seeded_membership(5, UserRole::User)]])
            .append_query_results([
                vec![seeded_category(1)],
                vec![seeded_category(2)],
                vec![seeded_category(3)],
            ])
            .append_query_results([
                vec![seeded_contact(1)],
                vec![seeded_contact(2)],
                vec![seeded_contact(3)],
                vec![seeded_contact(4)],
            ])
            .append_query_results([vec![seeded_company(1)], vec![seeded_company(2)]])
            .append_query_results([Vec::<whatsapp_session::Model>::new()])
            .append_query_results([vec![seeded_session(1, "demo-waha", SessionProvider::Waha)]])
            .append_query_results([Vec::<whatsapp_session::Model>::new()])
            .append_query_results([vec![seeded_session(2, "demo-evolution", SessionProvider::Evolution)]])
            .append_query_results([vec![seeded_campaign(1)]])
            .append_query_results([vec![seeded_campaign_message(1)]])
            .append_query_results([vec![seeded_campaign(2)]])
            .append_query_results([vec![seeded_campaign_message(2)]])
            .append_query_results([
                vec![seeded_opportunity(1)],
                vec![seeded_opportunity(2)],
                vec![seeded_opportunity(3)],
                vec![seeded_opportunity(4)],
                vec![seeded_opportunity(5)],
            ])
            .append_query_results([
                vec![seeded_activity(1)],
                vec![seeded_activity(2)],
                vec![seeded_activity(3)],
                vec![seeded_activity(4)],
            ])
            // Second run: every unique-key lookup hits and skips its insert,
            // while the list rows insert again.
            .append_query_results([vec![seeded_global_settings()]])
            .append_query_results([vec![demo_tenant()]])
            .append_query_results([vec![seeded_settings()]])
            .append_query_results([vec![seeded_user(3, "root@zapcrm.local", UserRole::Superadmin, None)]])
            .append_query_results([vec![seeded_user(4, "admin@demo.local", UserRole::Admin, Some(1))]])
            .append_query_results([vec![seeded_membership(4, UserRole::Admin)]])
            .append_query_results([vec![seeded_user(5, "agent@demo.local", UserRole::User, Some(1))]])
            .append_query_results([vec![seeded_membership(5, UserRole::User)]])
            .append_query_results([
                vec![seeded_category(4)],
                vec![seeded_category(5)],
                vec![seeded_category(6)],
            ])
            .append_query_results([
                vec![seeded_contact(5)],
                vec![seeded_contact(6)],
                vec![seeded_contact(7)],
                vec![seeded_contact(8)],
            ])
            .append_query_results([vec![seeded_company(3)], vec![seeded_company(4)]])
            .append_query_results([vec![seeded_session(1, "demo-waha", SessionProvider::Waha)]])
            .append_query_results([vec![seeded_session(2, "demo-evolution", SessionProvider::Evolution)]])
            .append_query_results([vec![seeded_campaign(3)]])
            .append_query_results([vec![seeded_campaign_message(3)]])
            .append_query_results([vec![seeded_campaign(4)]])
            .append_query_results([vec![seeded_campaign_message(4)]])
            .append_query_results([
                vec![seeded_opportunity(6)],
                vec![seeded_opportunity(7)],
                vec![seeded_opportunity(8)],
                vec![seeded_opportunity(9)],
                vec![seeded_opportunity(10)],
            ])
            .append_query_results([
                vec![seeded_activity(5)],
                vec![seeded_activity(6)],
                vec![seeded_activity(7)],
                vec![seeded_activity(8)],
            ])
            .into_connection();

        let first = run(&db, &defaults()).await.unwrap();
        let second = run(&db, &defaults()).await.unwrap();
        assert_eq!(first, second);

        let log = db.into_transaction_log();
        // 42 statements for the creating run, 32 for the rerun: the ten
        // singleton inserts (global settings, tenant, tenant settings, three
        // users, two memberships, two sessions) are skipped the second time,
        // the list inserts are not.
        assert_eq!(log.len(), 74);

        let inserts_into = |table: &str| {
            let needle = format!(r#"INSERT INTO \"{}\""#, table);
            log.iter()
                .filter(|txn| format!("{:?}", txn).contains(&needle))
                .count()
        };
        assert_eq!(inserts_into("tenants"), 1);
        assert_eq!(inserts_into("users"), 3);
        assert_eq!(inserts_into("whatsapp_sessions"), 2);
        assert_eq!(inserts_into("categories"), 6);
        assert_eq!(inserts_into("contacts"), 8);
        assert_eq!(inserts_into("companies"), 4);
        assert_eq!(inserts_into("campaigns"), 4);
        assert_eq!(inserts_into("opportunities"), 10);
        assert_eq!(inserts_into("activities"), 8);
    }
}
