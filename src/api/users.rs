use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    database::models::{user, user_tenant, UserRole},
    errors::AppError,
    AppState,
};

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub tenant_id: Option<i64>,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipDto {
    pub tenant_id: i64,
    pub role: UserRole,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub tenant_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(UserFilter),
    responses(
        (status = 200, description = "Users, optionally scoped to a tenant", body = [user::Model])
    )
)]
#[get("")]
pub async fn get_users(
    app_state: web::Data<AppState>,
    query: web::Query<UserFilter>,
) -> Result<HttpResponse, AppError> {
    let mut select = user::Entity::find();
    if let Some(tenant_id) = query.tenant_id {
        select = select.filter(user::Column::TenantId.eq(tenant_id));
    }
    let users = select.all(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = user::Model),
        (status = 400, description = "Email taken or role/tenant mismatch")
    )
)]
#[post("")]
pub async fn create_user(
    app_state: web::Data<AppState>,
    body: web::Json<CreateUserDto>,
) -> Result<HttpResponse, AppError> {
    // SUPERADMIN is platform-level and carries no tenant.
    if body.role == UserRole::Superadmin && body.tenant_id.is_some() {
        return Err(AppError::InvalidInput(
            "SUPERADMIN users must not be bound to a tenant".to_string(),
        ));
    }

    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(body.email.clone()))
        .one(&app_state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::InvalidInput(format!(
            "User with email {} already exists",
            body.email
        )));
    }

    let created = user::ActiveModel {
        email: Set(body.email.clone()),
        name: Set(body.name.clone()),
        role: Set(body.role),
        tenant_id: Set(body.tenant_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/memberships",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Tenant memberships of the user", body = [user_tenant::Model])
    )
)]
#[get("/{id}/memberships")]
pub async fn get_memberships(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let rows = user_tenant::Entity::find()
        .filter(user_tenant::Column::UserId.eq(user_id))
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/memberships",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = CreateMembershipDto,
    responses(
        (status = 201, description = "Membership created", body = user_tenant::Model),
        (status = 400, description = "Membership already exists")
    )
)]
#[post("/{id}/memberships")]
pub async fn create_membership(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreateMembershipDto>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    let existing = user_tenant::Entity::find_by_id((user_id, body.tenant_id))
        .one(&app_state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::InvalidInput(format!(
            "User {} is already a member of tenant {}",
            user_id, body.tenant_id
        )));
    }

    let created = user_tenant::ActiveModel {
        user_id: Set(user_id),
        tenant_id: Set(body.tenant_id),
        role: Set(body.role),
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
#[delete("/{id}")]
pub async fn delete_user(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let result = user::Entity::delete_by_id(id).exec(&app_state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(get_users)
            .service(create_user)
            .service(get_memberships)
            .service(create_membership)
            .service(delete_user),
    );
}
