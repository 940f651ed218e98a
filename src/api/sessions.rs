use actix_web::{delete, get, patch, post, web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::TenantScope,
    database::models::{chat, whatsapp_session, SessionProvider, SessionStatus},
    errors::AppError,
    services::chat_repair,
    AppState,
};

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDto {
    pub tenant_id: i64,
    pub name: String,
    pub provider: SessionProvider,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetSessionStatusDto {
    pub status: SessionStatus,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatDto {
    pub tenant_id: i64,
    pub phone: String,
    pub session_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = "Sessions",
    params(TenantScope),
    responses(
        (status = 200, description = "Sessions of the tenant", body = [whatsapp_session::Model])
    )
)]
#[get("")]
pub async fn get_sessions(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let sessions = whatsapp_session::Entity::find()
        .filter(whatsapp_session::Column::TenantId.eq(query.tenant_id))
        .order_by_asc(whatsapp_session::Column::CreatedAt)
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(sessions))
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = "Sessions",
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session registered", body = whatsapp_session::Model),
        (status = 400, description = "Name already used within the tenant")
    )
)]
#[post("")]
pub async fn create_session(
    app_state: web::Data<AppState>,
    body: web::Json<CreateSessionDto>,
) -> Result<HttpResponse, AppError> {
    // Session names are unique per tenant.
    let existing = whatsapp_session::Entity::find()
        .filter(whatsapp_session::Column::TenantId.eq(body.tenant_id))
        .filter(whatsapp_session::Column::Name.eq(body.name.clone()))
        .one(&app_state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::InvalidInput(format!(
            "Session {} already exists for tenant {}",
            body.name, body.tenant_id
        )));
    }

    let created = whatsapp_session::ActiveModel {
        tenant_id: Set(body.tenant_id),
        name: Set(body.name.clone()),
        status: Set(SessionStatus::Starting),
        provider: Set(body.provider),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    patch,
    path = "/api/sessions/{id}/status",
    tag = "Sessions",
    params(("id" = i64, Path, description = "Session ID")),
    request_body = SetSessionStatusDto,
    responses(
        (status = 200, description = "Status updated", body = whatsapp_session::Model),
        (status = 404, description = "Session not found")
    )
)]
#[patch("/{id}/status")]
pub async fn set_session_status(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<SetSessionStatusDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let existing = whatsapp_session::Entity::find_by_id(id)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", id)))?;

    let mut model = whatsapp_session::ActiveModel::from(existing);
    model.status = Set(body.status);
    let updated = model.update(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    tag = "Sessions",
    params(("id" = i64, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found")
    )
)]
#[delete("/{id}")]
pub async fn delete_session(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let result = whatsapp_session::Entity::delete_by_id(id)
        .exec(&app_state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Session {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/api/chats",
    tag = "Sessions",
    params(TenantScope),
    responses(
        (status = 200, description = "Chats of the tenant", body = [chat::Model])
    )
)]
#[get("")]
pub async fn get_chats(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let chats = chat::Entity::find()
        .filter(chat::Column::TenantId.eq(query.tenant_id))
        .order_by_asc(chat::Column::Id)
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(chats))
}

#[utoipa::path(
    post,
    path = "/api/chats",
    tag = "Sessions",
    request_body = CreateChatDto,
    responses(
        (status = 201, description = "Chat created", body = chat::Model)
    )
)]
#[post("")]
pub async fn create_chat(
    app_state: web::Data<AppState>,
    body: web::Json<CreateChatDto>,
) -> Result<HttpResponse, AppError> {
    // Assign a session up front so new chats never need the repair pass.
    // A chat still lands unassigned when the tenant has no usable session.
    let session_id = match body.session_id {
        Some(id) => Some(id),
        None => chat_repair::eligible_session(&app_state.db, body.tenant_id)
            .await?
            .map(|s| s.id),
    };

    let created = chat::ActiveModel {
        tenant_id: Set(body.tenant_id),
        session_id: Set(session_id),
        phone: Set(body.phone.clone()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sessions")
            .service(get_sessions)
            .service(create_session)
            .service(set_session_status)
            .service(delete_session),
    )
    .service(web::scope("/chats").service(get_chats).service(create_chat));
}
