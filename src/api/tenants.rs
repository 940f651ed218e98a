use actix_web::{delete, get, patch, post, web, HttpResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    database::models::{global_settings, tenant},
    errors::AppError,
    services::tenant_settings::{self, TenantSettingsPatch},
    AppState,
};

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantDto {
    pub slug: String,
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = "Tenants",
    responses(
        (status = 200, description = "All registered tenants", body = [tenant::Model])
    )
)]
#[get("")]
pub async fn get_tenants(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let tenants = tenant::Entity::find().all(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(tenants))
}

#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = "Tenants",
    request_body = CreateTenantDto,
    responses(
        (status = 201, description = "Tenant created", body = tenant::Model),
        (status = 400, description = "Slug already taken")
    )
)]
#[post("")]
pub async fn create_tenant(
    app_state: web::Data<AppState>,
    body: web::Json<CreateTenantDto>,
) -> Result<HttpResponse, AppError> {
    let existing = tenant::Entity::find()
        .filter(tenant::Column::Slug.eq(body.slug.clone()))
        .one(&app_state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::InvalidInput(format!(
            "Tenant with slug {} already exists",
            body.slug
        )));
    }

    let created = tenant::ActiveModel {
        slug: Set(body.slug.clone()),
        name: Set(body.name.clone()),
        active: Set(true),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    get,
    path = "/api/tenants/{id}",
    tag = "Tenants",
    params(("id" = i64, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant", body = tenant::Model),
        (status = 404, description = "Tenant not found")
    )
)]
#[get("/{id}")]
pub async fn get_tenant_by_id(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let row = tenant::Entity::find_by_id(id)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tenant {} not found", id)))?;
    Ok(HttpResponse::Ok().json(row))
}

#[utoipa::path(
    delete,
    path = "/api/tenants/{id}",
    tag = "Tenants",
    params(("id" = i64, Path, description = "Tenant ID")),
    responses(
        (status = 204, description = "Tenant deleted"),
        (status = 404, description = "Tenant not found")
    )
)]
#[delete("/{id}")]
pub async fn delete_tenant(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    // Deletes only the addressed row; no cascade is defined for tenants.
    let result = tenant::Entity::delete_by_id(id).exec(&app_state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Tenant {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/api/tenants/{id}/settings",
    tag = "Tenants",
    params(
        ("id" = String, Path, description = "Tenant ID; empty/undefined/null yields null (platform scope)")
    ),
    responses(
        (status = 200, description = "Settings, or null for platform scope / unknown tenant")
    )
)]
#[get("/{id}/settings")]
pub async fn get_tenant_settings(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    // The id stays a raw string here: SUPERADMIN clients send "", "undefined"
    // or "null" and expect a null payload, not an error.
    let raw = path.into_inner();
    let settings = tenant_settings::get(&app_state.db, Some(raw.as_str())).await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[utoipa::path(
    patch,
    path = "/api/tenants/{id}/settings",
    tag = "Tenants",
    params(("id" = i64, Path, description = "Tenant ID")),
    request_body = TenantSettingsPatch,
    responses(
        (status = 200, description = "Updated settings")
    )
)]
#[patch("/{id}/settings")]
pub async fn update_tenant_settings(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<TenantSettingsPatch>,
) -> Result<HttpResponse, AppError> {
    let tenant_id = path.into_inner();
    let updated = tenant_settings::update(&app_state.db, tenant_id, &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    get,
    path = "/api/global-settings",
    tag = "Tenants",
    responses(
        (status = 200, description = "Platform branding singleton", body = global_settings::Model),
        (status = 404, description = "Not seeded yet")
    )
)]
#[get("")]
pub async fn get_global_settings(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let row = global_settings::Entity::find_by_id(global_settings::SINGLETON_ID)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Global settings not initialized".to_string()))?;
    Ok(HttpResponse::Ok().json(row))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tenants")
            .service(get_tenants)
            .service(create_tenant)
            .service(get_tenant_by_id)
            .service(delete_tenant)
            .service(get_tenant_settings)
            .service(update_tenant_settings),
    )
    .service(web::scope("/global-settings").service(get_global_settings));
}
