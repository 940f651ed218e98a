//! Settings lifecycle against a mocked store: lazy creation on first read,
//! then partial updates where explicit null and omission diverge.

use sea_orm::{DatabaseBackend, MockDatabase};
use zapcrm::database::models::{tenant, tenant_settings};
use zapcrm::services::tenant_settings::{get, update, TenantSettingsPatch};

fn demo_tenant() -> tenant::Model {
    tenant::Model {
        id: 1,
        slug: "demo".to_string(),
        name: "Demo Tenant".to_string(),
        active: true,
        created_at: chrono::Utc::now(),
    }
}

fn empty_settings() -> tenant_settings::Model {
    tenant_settings::Model {
        id: 11,
        tenant_id: 1,
        waha_host: None,
        waha_api_key: None,
        evolution_host: None,
        evolution_api_key: None,
        company_name: None,
        page_title: None,
        logo_url: None,
        favicon_url: None,
        primary_color: None,
    }
}

#[tokio::test]
async fn first_read_creates_then_second_read_reuses() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // first get: tenant hit, settings miss, insert returning
        .append_query_results([vec![demo_tenant()]])
        .append_query_results([Vec::<tenant_settings::Model>::new()])
        .append_query_results([vec![empty_settings()]])
        // second get: tenant hit, settings hit
        .append_query_results([vec![demo_tenant()]])
        .append_query_results([vec![empty_settings()]])
        .into_connection();

    let first = get(&db, Some("1")).await.unwrap().unwrap();
    let second = get(&db, Some("1")).await.unwrap().unwrap();
    assert_eq!(first, second);

    // 3 statements for the creating read, 2 for the reusing one.
    assert_eq!(db.into_transaction_log().len(), 5);
}

#[tokio::test]
async fn explicit_null_and_omission_store_different_states() {
    let mut stored = empty_settings();
    stored.waha_host = Some("http://waha:3000".to_string());
    stored.company_name = Some("Demo Co".to_string());

    // Patch A clears waha_host by explicit null and says nothing about
    // company_name.
    let mut after_null = stored.clone();
    after_null.waha_host = None;

    // Patch B omits waha_host entirely; only page_title changes.
    let mut after_omit = stored.clone();
    after_omit.page_title = Some("Portal".to_string());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored.clone()]])
        .append_query_results([vec![after_null.clone()]])
        .append_query_results([vec![stored.clone()]])
        .append_query_results([vec![after_omit.clone()]])
        .into_connection();

    let patch_null: TenantSettingsPatch = serde_json::from_str(r#"{"wahaHost": null}"#).unwrap();
    let cleared = update(&db, 1, &patch_null).await.unwrap();
    assert_eq!(cleared.waha_host, None);
    assert_eq!(cleared.company_name, Some("Demo Co".to_string()));

    let patch_omit: TenantSettingsPatch =
        serde_json::from_str(r#"{"pageTitle": "Portal"}"#).unwrap();
    let kept = update(&db, 1, &patch_omit).await.unwrap();
    assert_eq!(kept.waha_host, Some("http://waha:3000".to_string()));
    assert_eq!(kept.page_title, Some("Portal".to_string()));

    assert_ne!(cleared, kept);
}

#[tokio::test]
async fn platform_scope_reads_resolve_to_null() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    assert!(get(&db, Some("undefined")).await.unwrap().is_none());
    assert!(get(&db, Some("null")).await.unwrap().is_none());
    assert!(get(&db, Some("")).await.unwrap().is_none());

    assert!(db.into_transaction_log().is_empty());
}
