use actix_web::{delete, get, post, put, web, HttpResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    api::TenantScope,
    database::models::{category, contact},
    errors::AppError,
    AppState,
};

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    pub tenant_id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_id: Option<i64>,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
    // Explicit null detaches the category; omission keeps it.
    #[serde(default, deserialize_with = "crate::services::tenant_settings::double_option")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    pub tenant_id: i64,
    pub name: String,
    pub color: String,
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    params(TenantScope),
    responses(
        (status = 200, description = "Contacts of the tenant", body = [contact::Model])
    )
)]
#[get("")]
pub async fn get_contacts(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let contacts = contact::Entity::find()
        .filter(contact::Column::TenantId.eq(query.tenant_id))
        .order_by_asc(contact::Column::Id)
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(contacts))
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact created", body = contact::Model)
    )
)]
#[post("")]
pub async fn create_contact(
    app_state: web::Data<AppState>,
    body: web::Json<CreateContactDto>,
) -> Result<HttpResponse, AppError> {
    let created = contact::ActiveModel {
        tenant_id: Set(body.tenant_id),
        name: Set(body.name.clone()),
        phone: Set(body.phone.clone()),
        tags: Set(json!(body.tags)),
        category_id: Set(body.category_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i64, Path, description = "Contact ID")),
    request_body = UpdateContactDto,
    responses(
        (status = 200, description = "Contact updated", body = contact::Model),
        (status = 404, description = "Contact not found")
    )
)]
#[put("/{id}")]
pub async fn update_contact(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateContactDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let existing = contact::Entity::find_by_id(id)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact {} not found", id)))?;

    let mut model = contact::ActiveModel::from(existing);
    if let Some(name) = &body.name {
        model.name = Set(name.clone());
    }
    if let Some(phone) = &body.phone {
        model.phone = Set(phone.clone());
    }
    if let Some(tags) = &body.tags {
        model.tags = Set(json!(tags));
    }
    if let Some(category_id) = body.category_id {
        model.category_id = Set(category_id);
    }

    let updated = model.update(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i64, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Contact not found")
    )
)]
#[delete("/{id}")]
pub async fn delete_contact(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let result = contact::Entity::delete_by_id(id).exec(&app_state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Contact {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Contacts",
    params(TenantScope),
    responses(
        (status = 200, description = "Categories of the tenant", body = [category::Model])
    )
)]
#[get("")]
pub async fn get_categories(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let categories = category::Entity::find()
        .filter(category::Column::TenantId.eq(query.tenant_id))
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Contacts",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = category::Model)
    )
)]
#[post("")]
pub async fn create_category(
    app_state: web::Data<AppState>,
    body: web::Json<CreateCategoryDto>,
) -> Result<HttpResponse, AppError> {
    let created = category::ActiveModel {
        tenant_id: Set(body.tenant_id),
        name: Set(body.name.clone()),
        color: Set(body.color.clone()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contacts")
            .service(get_contacts)
            .service(create_contact)
            .service(update_contact)
            .service(delete_contact),
    )
    .service(
        web::scope("/categories")
            .service(get_categories)
            .service(create_category),
    );
}
