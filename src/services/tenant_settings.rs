use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::database::models::{tenant, tenant_settings};
use crate::errors::AppError;

/// Frontends pass the tenant id through as a raw string; platform-level
/// (SUPERADMIN) requests arrive with no tenant at all, or with the literal
/// strings a sloppy client produces from an unset variable.
pub fn is_sentinel(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(s) => {
            let s = s.trim();
            s.is_empty() || s == "undefined" || s == "null"
        }
    }
}

/// Resolves settings for a tenant, creating the row lazily on first read.
///
/// Returns `Ok(None)` without touching settings storage when the id is a
/// SUPERADMIN sentinel, and `Ok(None)` when no such tenant exists. A
/// non-sentinel id that does not parse as an integer is invalid input.
pub async fn get(
    db: &DatabaseConnection,
    raw_tenant_id: Option<&str>,
) -> Result<Option<tenant_settings::Model>, AppError> {
    if is_sentinel(raw_tenant_id) {
        return Ok(None);
    }
    let raw = raw_tenant_id.unwrap_or_default().trim().to_string();
    let tenant_id: i64 = raw
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid tenant id: {}", raw)))?;

    get_by_id(db, tenant_id).await
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    tenant_id: i64,
) -> Result<Option<tenant_settings::Model>, AppError> {
    let tenant_row = tenant::Entity::find_by_id(tenant_id).one(db).await?;
    if tenant_row.is_none() {
        log::warn!("Settings requested for unknown tenant {}", tenant_id);
        return Ok(None);
    }

    let existing = tenant_settings::Entity::find()
        .filter(tenant_settings::Column::TenantId.eq(tenant_id))
        .one(db)
        .await?;

    if let Some(settings) = existing {
        return Ok(Some(settings));
    }

    // First read for this tenant: create the default (all-unset) row.
    let created = tenant_settings::ActiveModel {
        tenant_id: Set(tenant_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| {
        log::error!("Failed to create default settings for tenant {}: {}", tenant_id, e);
        e
    })?;

    log::info!("Created default settings row for tenant {}", tenant_id);
    Ok(Some(created))
}

/// Partial settings update. Every field is doubly optional: the outer level
/// records whether the caller mentioned the field at all, the inner level is
/// the value to store. `{"wahaHost": null}` clears the column, omitting
/// `wahaHost` leaves it untouched. The distinction survives JSON round-trips
/// because unset fields are skipped on serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettingsPatch {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub waha_host: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub waha_api_key: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub evolution_host: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub evolution_api_key: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub company_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub page_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub logo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub favicon_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub primary_color: Option<Option<String>>,
}

/// Maps a present-but-null JSON field to Some(None) instead of None, which is
/// what a bare Option<Option<T>> would deserialize to.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl TenantSettingsPatch {
    /// True when the caller mentioned no field at all.
    pub fn is_empty(&self) -> bool {
        self.waha_host.is_none()
            && self.waha_api_key.is_none()
            && self.evolution_host.is_none()
            && self.evolution_api_key.is_none()
            && self.company_name.is_none()
            && self.page_title.is_none()
            && self.logo_url.is_none()
            && self.favicon_url.is_none()
            && self.primary_color.is_none()
    }
}

fn apply_patch(model: &mut tenant_settings::ActiveModel, patch: &TenantSettingsPatch) {
    if let Some(v) = &patch.waha_host {
        model.waha_host = Set(v.clone());
    }
    if let Some(v) = &patch.waha_api_key {
        model.waha_api_key = Set(v.clone());
    }
    if let Some(v) = &patch.evolution_host {
        model.evolution_host = Set(v.clone());
    }
    if let Some(v) = &patch.evolution_api_key {
        model.evolution_api_key = Set(v.clone());
    }
    if let Some(v) = &patch.company_name {
        model.company_name = Set(v.clone());
    }
    if let Some(v) = &patch.page_title {
        model.page_title = Set(v.clone());
    }
    if let Some(v) = &patch.logo_url {
        model.logo_url = Set(v.clone());
    }
    if let Some(v) = &patch.favicon_url {
        model.favicon_url = Set(v.clone());
    }
    if let Some(v) = &patch.primary_color {
        model.primary_color = Set(v.clone());
    }
}

/// Upsert: fields present in the patch overwrite (explicit null clears),
/// omitted fields keep their stored value. Last write wins under concurrent
/// updates; storage errors are logged and propagated, never retried.
pub async fn update(
    db: &DatabaseConnection,
    tenant_id: i64,
    patch: &TenantSettingsPatch,
) -> Result<tenant_settings::Model, AppError> {
    let existing = tenant_settings::Entity::find()
        .filter(tenant_settings::Column::TenantId.eq(tenant_id))
        .one(db)
        .await?;

    // Nothing to write; an empty patch against an existing row is a no-op.
    if patch.is_empty() {
        if let Some(row) = &existing {
            return Ok(row.clone());
        }
    }

    let mut model = match existing {
        Some(row) => tenant_settings::ActiveModel::from(row),
        None => tenant_settings::ActiveModel {
            tenant_id: Set(tenant_id),
            ..Default::default()
        },
    };
    let is_insert = model.id.is_not_set();
    apply_patch(&mut model, patch);

    let result = if is_insert {
        model.insert(db).await
    } else {
        model.update(db).await
    };

    result.map_err(|e| {
        log::error!("Failed to update settings for tenant {}: {}", tenant_id, e);
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn demo_tenant() -> tenant::Model {
        tenant::Model {
            id: 7,
            slug: "demo".to_string(),
            name: "Demo".to_string(),
            active: true,
            created_at: chrono::Utc::now(),
        }
    }

    fn settings_row() -> tenant_settings::Model {
        tenant_settings::Model {
            id: 1,
            tenant_id: 7,
            waha_host: Some("http://waha:3000".to_string()),
            waha_api_key: None,
            evolution_host: None,
            evolution_api_key: None,
            company_name: Some("Demo Co".to_string()),
            page_title: None,
            logo_url: None,
            favicon_url: None,
            primary_color: None,
        }
    }

    #[test]
    fn sentinel_detection() {
        assert!(is_sentinel(None));
        assert!(is_sentinel(Some("")));
        assert!(is_sentinel(Some("  ")));
        assert!(is_sentinel(Some("undefined")));
        assert!(is_sentinel(Some("null")));
        assert!(!is_sentinel(Some("7")));
    }

    #[tokio::test]
    async fn sentinel_ids_do_not_touch_storage() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for raw in [None, Some(""), Some("undefined"), Some("null")] {
            let result = get(&db, raw).await.unwrap();
            assert!(result.is_none());
        }

        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn malformed_tenant_id_is_rejected_without_queries() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        // Not a sentinel, not a number: a client bug, unlike an unknown
        // tenant id which resolves to null.
        let err = get(&db, Some("abc")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn unknown_tenant_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tenant::Model>::new()])
            .into_connection();

        let result = get(&db, Some("7")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn lazy_creates_default_row_on_first_read() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![demo_tenant()]])
            .append_query_results([Vec::<tenant_settings::Model>::new()])
            .append_query_results([vec![settings_row()]])
            .into_connection();

        let created = get(&db, Some("7")).await.unwrap().unwrap();
        assert_eq!(created.tenant_id, 7);

        // One SELECT for the tenant, one for settings, one INSERT..RETURNING.
        assert_eq!(db.into_transaction_log().len(), 3);
    }

    #[tokio::test]
    async fn second_read_returns_existing_row_without_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![demo_tenant()]])
            .append_query_results([vec![settings_row()]])
            .into_connection();

        let found = get(&db, Some("7")).await.unwrap().unwrap();
        assert_eq!(found, settings_row());

        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[test]
    fn patch_distinguishes_null_from_omitted() {
        let cleared: TenantSettingsPatch =
            serde_json::from_str(r#"{"wahaHost": null}"#).unwrap();
        assert_eq!(cleared.waha_host, Some(None));
        assert_eq!(cleared.waha_api_key, None);

        let set: TenantSettingsPatch =
            serde_json::from_str(r#"{"wahaHost": "http://waha:3000"}"#).unwrap();
        assert_eq!(set.waha_host, Some(Some("http://waha:3000".to_string())));
    }

    #[test]
    fn patch_round_trip_preserves_distinction() {
        let patch = TenantSettingsPatch {
            waha_host: Some(None),
            company_name: Some(Some("Acme".to_string())),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        let back: TenantSettingsPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back.waha_host, Some(None));
        assert_eq!(back.company_name, Some(Some("Acme".to_string())));
        assert_eq!(back.page_title, None);
    }

    #[tokio::test]
    async fn update_clears_nulled_field_and_keeps_omitted() {
        let mut after = settings_row();
        after.waha_host = None; // cleared by explicit null

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![settings_row()]])
            .append_query_results([vec![after.clone()]])
            .into_connection();

        let patch = TenantSettingsPatch {
            waha_host: Some(None),
            ..Default::default()
        };
        let updated = update(&db, 7, &patch).await.unwrap();

        assert_eq!(updated.waha_host, None);
        // Omitted field keeps its stored value.
        assert_eq!(updated.company_name, Some("Demo Co".to_string()));
    }

    #[tokio::test]
    async fn update_inserts_when_no_row_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tenant_settings::Model>::new()])
            .append_query_results([vec![settings_row()]])
            .into_connection();

        let patch = TenantSettingsPatch {
            waha_host: Some(Some("http://waha:3000".to_string())),
            ..Default::default()
        };
        let created = update(&db, 7, &patch).await.unwrap();
        assert_eq!(created.tenant_id, 7);
    }
}
