use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use zapcrm::api::{campaigns, companies, contacts, pipeline, sessions, tenants, users};
use zapcrm::config::Config;
use zapcrm::database;
use zapcrm::database::models;
use zapcrm::services::tenant_settings;
use zapcrm::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");
    let db = database::connect().await?;

    #[derive(OpenApi)]
    #[openapi(
        paths(
            // Tenants & settings
            tenants::get_tenants,
            tenants::create_tenant,
            tenants::get_tenant_by_id,
            tenants::delete_tenant,
            tenants::get_tenant_settings,
            tenants::update_tenant_settings,
            tenants::get_global_settings,
            // Users & memberships
            users::get_users,
            users::create_user,
            users::get_memberships,
            users::create_membership,
            users::delete_user,
            // Contacts & categories
            contacts::get_contacts,
            contacts::create_contact,
            contacts::update_contact,
            contacts::delete_contact,
            contacts::get_categories,
            contacts::create_category,
            // Companies
            companies::get_companies,
            companies::create_company,
            companies::get_company_by_id,
            companies::delete_company,
            // Pipeline
            pipeline::get_opportunities,
            pipeline::create_opportunity,
            pipeline::move_opportunity_stage,
            pipeline::get_activities,
            pipeline::create_activity,
            pipeline::set_activity_status,
            // Sessions & chats
            sessions::get_sessions,
            sessions::create_session,
            sessions::set_session_status,
            sessions::delete_session,
            sessions::get_chats,
            sessions::create_chat,
            // Campaigns
            campaigns::get_campaigns,
            campaigns::create_campaign,
            campaigns::get_campaign_messages,
            campaigns::create_campaign_message,
        ),
        components(
            schemas(
                // --- Models ---
                models::tenant::Model,
                models::global_settings::Model,
                models::tenant_settings::Model,
                models::user::Model,
                models::user_tenant::Model,
                models::category::Model,
                models::contact::Model,
                models::company::Model,
                models::opportunity::Model,
                models::activity::Model,
                models::whatsapp_session::Model,
                models::chat::Model,
                models::campaign::Model,
                models::campaign_message::Model,

                // --- Enums ---
                models::UserRole,
                models::CompanySize,
                models::OpportunityStage,
                models::ActivityType,
                models::ActivityStatus,
                models::ActivityPriority,
                models::SessionStatus,
                models::SessionProvider,
                models::MessageType,
                models::CampaignStatus,
                models::CampaignMessageStatus,

                // --- DTOs ---
                tenants::CreateTenantDto,
                tenant_settings::TenantSettingsPatch,
                users::CreateUserDto,
                users::CreateMembershipDto,
                contacts::CreateContactDto,
                contacts::UpdateContactDto,
                contacts::CreateCategoryDto,
                companies::CreateCompanyDto,
                pipeline::CreateOpportunityDto,
                pipeline::MoveStageDto,
                pipeline::CreateActivityDto,
                pipeline::SetActivityStatusDto,
                sessions::CreateSessionDto,
                sessions::SetSessionStatusDto,
                sessions::CreateChatDto,
                campaigns::CreateCampaignDto,
                campaigns::CreateCampaignMessageDto,
            )
        ),
        tags(
            (name = "Tenants", description = "Tenant directory and settings"),
            (name = "Users", description = "Users and tenant memberships"),
            (name = "Contacts", description = "Contact and category registry"),
            (name = "Companies", description = "Company registry"),
            (name = "Pipeline", description = "Opportunities and activities"),
            (name = "Sessions", description = "WhatsApp session registry and chats"),
            (name = "Campaigns", description = "Campaign definitions and recipient messages")
        )
    )]
    struct ApiDoc;

    let host = config.host.clone();
    let port = config.port;

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    // One state instance for all workers; the Data handle is an Arc.
    let state = web::Data::new(AppState { db, config });

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .configure(tenants::init_routes)
                    .configure(users::init_routes)
                    .configure(contacts::init_routes)
                    .configure(companies::init_routes)
                    .configure(pipeline::init_routes)
                    .configure(sessions::init_routes)
                    .configure(campaigns::init_routes),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
