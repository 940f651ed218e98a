use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    api::TenantScope,
    database::models::{campaign, campaign_message, CampaignMessageStatus, CampaignStatus, MessageType},
    errors::AppError,
    AppState,
};

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignDto {
    pub tenant_id: i64,
    pub name: String,
    #[serde(default)]
    pub target_tags: Vec<String>,
    #[serde(default)]
    pub session_names: Vec<String>,
    pub message_type: MessageType,
    pub message_content: String,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignMessageDto {
    pub contact_id: i64,
    pub session_name: String,
}

#[utoipa::path(
    get,
    path = "/api/campaigns",
    tag = "Campaigns",
    params(TenantScope),
    responses(
        (status = 200, description = "Campaigns of the tenant", body = [campaign::Model])
    )
)]
#[get("")]
pub async fn get_campaigns(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let campaigns = campaign::Entity::find()
        .filter(campaign::Column::TenantId.eq(query.tenant_id))
        .order_by_asc(campaign::Column::Id)
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(campaigns))
}

#[utoipa::path(
    post,
    path = "/api/campaigns",
    tag = "Campaigns",
    request_body = CreateCampaignDto,
    responses(
        (status = 201, description = "Campaign created as draft", body = campaign::Model)
    )
)]
#[post("")]
pub async fn create_campaign(
    app_state: web::Data<AppState>,
    body: web::Json<CreateCampaignDto>,
) -> Result<HttpResponse, AppError> {
    let created = campaign::ActiveModel {
        tenant_id: Set(body.tenant_id),
        name: Set(body.name.clone()),
        target_tags: Set(json!(body.target_tags)),
        session_names: Set(json!(body.session_names)),
        message_type: Set(body.message_type),
        message_content: Set(body.message_content.clone()),
        status: Set(CampaignStatus::Draft),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    get,
    path = "/api/campaigns/{id}/messages",
    tag = "Campaigns",
    params(("id" = i64, Path, description = "Campaign ID")),
    responses(
        (status = 200, description = "Per-recipient messages of the campaign", body = [campaign_message::Model])
    )
)]
#[get("/{id}/messages")]
pub async fn get_campaign_messages(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let campaign_id = path.into_inner();
    let messages = campaign_message::Entity::find()
        .filter(campaign_message::Column::CampaignId.eq(campaign_id))
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[utoipa::path(
    post,
    path = "/api/campaigns/{id}/messages",
    tag = "Campaigns",
    params(("id" = i64, Path, description = "Campaign ID")),
    request_body = CreateCampaignMessageDto,
    responses(
        (status = 201, description = "Recipient added", body = campaign_message::Model),
        (status = 404, description = "Campaign not found")
    )
)]
#[post("/{id}/messages")]
pub async fn create_campaign_message(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreateCampaignMessageDto>,
) -> Result<HttpResponse, AppError> {
    let campaign_id = path.into_inner();
    let exists = campaign::Entity::find_by_id(campaign_id)
        .one(&app_state.db)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound(format!(
            "Campaign {} not found",
            campaign_id
        )));
    }

    let created = campaign_message::ActiveModel {
        campaign_id: Set(campaign_id),
        contact_id: Set(body.contact_id),
        session_name: Set(body.session_name.clone()),
        status: Set(CampaignMessageStatus::Pending),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/campaigns")
            .service(get_campaigns)
            .service(create_campaign)
            .service(get_campaign_messages)
            .service(create_campaign_message),
    );
}
