use actix_web::{get, patch, post, web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::TenantScope,
    database::models::{
        activity, opportunity, ActivityPriority, ActivityStatus, ActivityType, OpportunityStage,
    },
    errors::AppError,
    AppState,
};

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpportunityDto {
    pub tenant_id: i64,
    pub title: String,
    pub contact_id: i64,
    pub company_id: Option<i64>,
    pub stage: OpportunityStage,
    pub probability: i32,
    pub value: f64,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MoveStageDto {
    pub stage: OpportunityStage,
    pub probability: Option<i32>,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityDto {
    pub tenant_id: i64,
    pub title: String,
    pub opportunity_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub r#type: ActivityType,
    pub priority: ActivityPriority,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub due_date: Option<chrono::DateTime<Utc>>,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetActivityStatusDto {
    pub status: ActivityStatus,
}

/// completed_at is set exactly when the activity is COMPLETED; any move away
/// from COMPLETED clears it again.
pub fn completed_at_for(status: ActivityStatus) -> Option<chrono::DateTime<Utc>> {
    match status {
        ActivityStatus::Completed => Some(Utc::now()),
        ActivityStatus::Pending | ActivityStatus::Cancelled => None,
    }
}

#[utoipa::path(
    get,
    path = "/api/opportunities",
    tag = "Pipeline",
    params(TenantScope),
    responses(
        (status = 200, description = "Opportunities of the tenant", body = [opportunity::Model])
    )
)]
#[get("")]
pub async fn get_opportunities(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let rows = opportunity::Entity::find()
        .filter(opportunity::Column::TenantId.eq(query.tenant_id))
        .order_by_asc(opportunity::Column::Id)
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    post,
    path = "/api/opportunities",
    tag = "Pipeline",
    request_body = CreateOpportunityDto,
    responses(
        (status = 201, description = "Opportunity created", body = opportunity::Model),
        (status = 400, description = "Probability out of range")
    )
)]
#[post("")]
pub async fn create_opportunity(
    app_state: web::Data<AppState>,
    body: web::Json<CreateOpportunityDto>,
) -> Result<HttpResponse, AppError> {
    if !(0..=100).contains(&body.probability) {
        return Err(AppError::InvalidInput(
            "Probability must be between 0 and 100".to_string(),
        ));
    }

    let created = opportunity::ActiveModel {
        tenant_id: Set(body.tenant_id),
        title: Set(body.title.clone()),
        contact_id: Set(body.contact_id),
        company_id: Set(body.company_id),
        stage: Set(body.stage),
        probability: Set(body.probability),
        value: Set(body.value),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    patch,
    path = "/api/opportunities/{id}/stage",
    tag = "Pipeline",
    params(("id" = i64, Path, description = "Opportunity ID")),
    request_body = MoveStageDto,
    responses(
        (status = 200, description = "Opportunity moved", body = opportunity::Model),
        (status = 404, description = "Opportunity not found")
    )
)]
#[patch("/{id}/stage")]
pub async fn move_opportunity_stage(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<MoveStageDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let existing = opportunity::Entity::find_by_id(id)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Opportunity {} not found", id)))?;

    let mut model = opportunity::ActiveModel::from(existing);
    model.stage = Set(body.stage);
    if let Some(probability) = body.probability {
        if !(0..=100).contains(&probability) {
            return Err(AppError::InvalidInput(
                "Probability must be between 0 and 100".to_string(),
            ));
        }
        model.probability = Set(probability);
    }

    let updated = model.update(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    get,
    path = "/api/activities",
    tag = "Pipeline",
    params(TenantScope),
    responses(
        (status = 200, description = "Activities of the tenant", body = [activity::Model])
    )
)]
#[get("")]
pub async fn get_activities(
    app_state: web::Data<AppState>,
    query: web::Query<TenantScope>,
) -> Result<HttpResponse, AppError> {
    let rows = activity::Entity::find()
        .filter(activity::Column::TenantId.eq(query.tenant_id))
        .order_by_asc(activity::Column::Id)
        .all(&app_state.db)
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    post,
    path = "/api/activities",
    tag = "Pipeline",
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Activity created", body = activity::Model)
    )
)]
#[post("")]
pub async fn create_activity(
    app_state: web::Data<AppState>,
    body: web::Json<CreateActivityDto>,
) -> Result<HttpResponse, AppError> {
    let created = activity::ActiveModel {
        tenant_id: Set(body.tenant_id),
        title: Set(body.title.clone()),
        opportunity_id: Set(body.opportunity_id),
        contact_id: Set(body.contact_id),
        r#type: Set(body.r#type),
        status: Set(ActivityStatus::Pending),
        priority: Set(body.priority),
        due_date: Set(body.due_date),
        completed_at: Set(None),
        ..Default::default()
    }
    .insert(&app_state.db)
    .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    patch,
    path = "/api/activities/{id}/status",
    tag = "Pipeline",
    params(("id" = i64, Path, description = "Activity ID")),
    request_body = SetActivityStatusDto,
    responses(
        (status = 200, description = "Activity status updated", body = activity::Model),
        (status = 404, description = "Activity not found")
    )
)]
#[patch("/{id}/status")]
pub async fn set_activity_status(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<SetActivityStatusDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let existing = activity::Entity::find_by_id(id)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

    let mut model = activity::ActiveModel::from(existing);
    model.status = Set(body.status);
    model.completed_at = Set(completed_at_for(body.status));

    let updated = model.update(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/opportunities")
            .service(get_opportunities)
            .service(create_opportunity)
            .service(move_opportunity_stage),
    )
    .service(
        web::scope("/activities")
            .service(get_activities)
            .service(create_activity)
            .service(set_activity_status),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_at_only_for_completed_status() {
        assert!(completed_at_for(ActivityStatus::Completed).is_some());
        assert!(completed_at_for(ActivityStatus::Pending).is_none());
        assert!(completed_at_for(ActivityStatus::Cancelled).is_none());
    }
}
