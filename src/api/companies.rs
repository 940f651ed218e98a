use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    api::TenantScope,
    database::models::{company, CompanySize},
    errors::AppError,
    AppState,
};

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyDto {
    pub tenant_id: i64,
    pub name: String,
    pub size: CompanySize,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    params(TenantScope),
    responses(
        (status = 200, description = "Companies of the tenant", body = [company::Model])
    )
)]
#[get("")]
pub async fn get_companies(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let companies = company::Entity::find()
        .filter(company::Column::TenantId.eq(query.tenant_id))
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(companies))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Companies",
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created", body = company::Model)
    )
)]
#[post("")]
pub async fn create_company(
    app_state: web::Data<AppState>,
    body: web::Json<CreateCompanyDto>,
) -> Result<HttpResponse, AppError> {
    let created = company::ActiveModel {
        tenant_id: Set(body.tenant_id),
        name: Set(body.name.clone()),
        size: Set(body.size),
        tags: Set(json!(body.tags)),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i64, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company", body = company::Model),
        (status = 404, description = "Company not found")
    )
)]
#[get("/{id}")]
pub async fn get_company_by_id(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let row = company::Entity::find_by_id(id)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))?;
    Ok(HttpResponse::Ok().json(row))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i64, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Company not found")
    )
)]
#[delete("/{id}")]
pub async fn delete_company(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let result = company::Entity::delete_by_id(id).exec(&app_state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Company {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/companies")
            .service(get_companies)
            .service(create_company)
            .service(get_company_by_id)
            .service(delete_company),
    );
}
