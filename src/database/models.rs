use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums (stored as text columns) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "SUPERADMIN")]
    Superadmin,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "USER")]
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySize {
    #[sea_orm(string_value = "SMALL")]
    Small,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "LARGE")]
    Large,
    #[sea_orm(string_value = "ENTERPRISE")]
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityStage {
    #[sea_orm(string_value = "QUALIFIED")]
    Qualified,
    #[sea_orm(string_value = "PROPOSAL")]
    Proposal,
    #[sea_orm(string_value = "NEGOTIATION")]
    Negotiation,
    #[sea_orm(string_value = "CLOSED_WON")]
    ClosedWon,
    #[sea_orm(string_value = "CLOSED_LOST")]
    ClosedLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    #[sea_orm(string_value = "CALL")]
    Call,
    #[sea_orm(string_value = "MEETING")]
    Meeting,
    #[sea_orm(string_value = "EMAIL")]
    Email,
    #[sea_orm(string_value = "TASK")]
    Task,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityPriority {
    #[sea_orm(string_value = "LOW")]
    Low,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HIGH")]
    High,
    #[sea_orm(string_value = "URGENT")]
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[sea_orm(string_value = "STARTING")]
    Starting,
    #[sea_orm(string_value = "SCAN_QR")]
    ScanQr,
    #[sea_orm(string_value = "WORKING")]
    Working,
    #[sea_orm(string_value = "FAILED")]
    Failed,
    /// Terminal state; stopped sessions are never eligible for chat assignment.
    #[sea_orm(string_value = "STOPPED")]
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionProvider {
    #[sea_orm(string_value = "WAHA")]
    Waha,
    #[sea_orm(string_value = "EVOLUTION")]
    Evolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    #[sea_orm(string_value = "TEXT")]
    Text,
    #[sea_orm(string_value = "IMAGE")]
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "RUNNING")]
    Running,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignMessageStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "SENT")]
    Sent,
    #[sea_orm(string_value = "DELIVERED")]
    Delivered,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

// --- Tenants ---
pub mod tenant {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "tenants")]
    #[schema(as = Tenant)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(unique)]
        pub slug: String,
        pub name: String,
        pub active: bool,
        #[schema(value_type = String, format = DateTime)]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::contact::Entity")]
        Contact,
        #[sea_orm(has_many = "super::campaign::Entity")]
        Campaign,
        #[sea_orm(has_many = "super::whatsapp_session::Entity")]
        WhatsappSession,
        #[sea_orm(has_many = "super::chat::Entity")]
        Chat,
        #[sea_orm(has_many = "super::user_tenant::Entity")]
        UserTenant,
    }

    impl Related<super::contact::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Contact.def()
        }
    }

    impl Related<super::campaign::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Campaign.def()
        }
    }

    impl Related<super::whatsapp_session::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::WhatsappSession.def()
        }
    }

    impl Related<super::chat::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Chat.def()
        }
    }

    impl Related<super::user_tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::UserTenant.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- GlobalSettings ---
// Singleton row keyed by a fixed id ("global").
pub mod global_settings {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "global_settings")]
    #[schema(as = GlobalSettings)]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub company_name: String,
        pub page_title: String,
        pub logo_url: String,
        pub favicon_url: String,
        pub primary_color: String,
    }

    pub const SINGLETON_ID: &str = "global";

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

// --- TenantSettings ---
pub mod tenant_settings {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "tenant_settings")]
    #[schema(as = TenantSettings)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(unique)]
        pub tenant_id: i64,
        pub waha_host: Option<String>,
        pub waha_api_key: Option<String>,
        pub evolution_host: Option<String>,
        pub evolution_api_key: Option<String>,
        pub company_name: Option<String>,
        pub page_title: Option<String>,
        pub logo_url: Option<String>,
        pub favicon_url: Option<String>,
        pub primary_color: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::tenant::Entity",
            from = "Column::TenantId",
            to = "super::tenant::Column::Id"
        )]
        Tenant,
    }

    impl Related<super::tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tenant.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Users ---
pub mod user {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "users")]
    #[schema(as = User)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(unique)]
        pub email: String,
        pub name: String,
        pub role: UserRole,
        // Null for SUPERADMIN: platform-level users belong to no tenant.
        pub tenant_id: Option<i64>,
        #[schema(value_type = String, format = DateTime)]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::user_tenant::Entity")]
        UserTenant,
    }

    impl Related<super::user_tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::UserTenant.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- UserTenant (membership) ---
pub mod user_tenant {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "user_tenants")]
    #[schema(as = UserTenant)]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub user_id: i64,
        #[sea_orm(primary_key, auto_increment = false)]
        pub tenant_id: i64,
        pub role: UserRole,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id"
        )]
        User,
        #[sea_orm(
            belongs_to = "super::tenant::Entity",
            from = "Column::TenantId",
            to = "super::tenant::Column::Id"
        )]
        Tenant,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl Related<super::tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tenant.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Categories ---
pub mod category {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "categories")]
    #[schema(as = Category)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        pub name: String,
        pub color: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::contact::Entity")]
        Contact,
    }

    impl Related<super::contact::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Contact.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Contacts ---
pub mod contact {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "contacts")]
    #[schema(as = Contact)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        pub name: String,
        pub phone: String,
        #[schema(value_type = Vec<String>)]
        pub tags: Json,
        pub category_id: Option<i64>,
        #[schema(value_type = String, format = DateTime)]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::tenant::Entity",
            from = "Column::TenantId",
            to = "super::tenant::Column::Id"
        )]
        Tenant,
        #[sea_orm(
            belongs_to = "super::category::Entity",
            from = "Column::CategoryId",
            to = "super::category::Column::Id"
        )]
        Category,
        #[sea_orm(has_many = "super::opportunity::Entity")]
        Opportunity,
        #[sea_orm(has_many = "super::activity::Entity")]
        Activity,
        #[sea_orm(has_many = "super::campaign_message::Entity")]
        CampaignMessage,
    }

    impl Related<super::tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tenant.def()
        }
    }

    impl Related<super::category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Category.def()
        }
    }

    impl Related<super::opportunity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Opportunity.def()
        }
    }

    impl Related<super::activity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Activity.def()
        }
    }

    impl Related<super::campaign_message::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CampaignMessage.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Companies ---
pub mod company {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "companies")]
    #[schema(as = Company)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        pub name: String,
        pub size: CompanySize,
        #[schema(value_type = Vec<String>)]
        pub tags: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::opportunity::Entity")]
        Opportunity,
    }

    impl Related<super::opportunity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Opportunity.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Opportunities ---
pub mod opportunity {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "opportunities")]
    #[schema(as = Opportunity)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        pub title: String,
        pub contact_id: i64,
        pub company_id: Option<i64>,
        pub stage: OpportunityStage,
        // 0-100; monotonic with stage by convention only, not enforced.
        pub probability: i32,
        pub value: f64,
        #[schema(value_type = String, format = DateTime)]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::contact::Entity",
            from = "Column::ContactId",
            to = "super::contact::Column::Id"
        )]
        Contact,
        #[sea_orm(
            belongs_to = "super::company::Entity",
            from = "Column::CompanyId",
            to = "super::company::Column::Id"
        )]
        Company,
        #[sea_orm(has_many = "super::activity::Entity")]
        Activity,
    }

    impl Related<super::contact::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Contact.def()
        }
    }

    impl Related<super::company::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Company.def()
        }
    }

    impl Related<super::activity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Activity.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Activities ---
pub mod activity {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "activities")]
    #[schema(as = Activity)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        pub title: String,
        pub opportunity_id: Option<i64>,
        pub contact_id: Option<i64>,
        pub r#type: ActivityType,
        pub status: ActivityStatus,
        pub priority: ActivityPriority,
        #[schema(value_type = Option<String>, format = DateTime)]
        pub due_date: Option<DateTimeUtc>,
        // Set only when status is COMPLETED.
        #[schema(value_type = Option<String>, format = DateTime)]
        pub completed_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::opportunity::Entity",
            from = "Column::OpportunityId",
            to = "super::opportunity::Column::Id"
        )]
        Opportunity,
        #[sea_orm(
            belongs_to = "super::contact::Entity",
            from = "Column::ContactId",
            to = "super::contact::Column::Id"
        )]
        Contact,
    }

    impl Related<super::opportunity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Opportunity.def()
        }
    }

    impl Related<super::contact::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Contact.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- WhatsappSessions ---
pub mod whatsapp_session {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "whatsapp_sessions")]
    #[schema(as = WhatsappSession)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        // Unique per tenant; enforced by the create path, not a DB constraint.
        pub name: String,
        pub status: SessionStatus,
        pub provider: SessionProvider,
        #[schema(value_type = String, format = DateTime)]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::tenant::Entity",
            from = "Column::TenantId",
            to = "super::tenant::Column::Id"
        )]
        Tenant,
        #[sea_orm(has_many = "super::chat::Entity")]
        Chat,
    }

    impl Related<super::tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tenant.def()
        }
    }

    impl Related<super::chat::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Chat.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Chats ---
pub mod chat {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "chats")]
    #[schema(as = Chat)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        // Nullable for legacy rows; `admin-cli fix-chats` backfills these.
        pub session_id: Option<i64>,
        pub phone: String,
        #[schema(value_type = String, format = DateTime)]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::whatsapp_session::Entity",
            from = "Column::SessionId",
            to = "super::whatsapp_session::Column::Id"
        )]
        WhatsappSession,
        #[sea_orm(
            belongs_to = "super::tenant::Entity",
            from = "Column::TenantId",
            to = "super::tenant::Column::Id"
        )]
        Tenant,
    }

    impl Related<super::whatsapp_session::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::WhatsappSession.def()
        }
    }

    impl Related<super::tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tenant.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Campaigns ---
pub mod campaign {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "campaigns")]
    #[schema(as = Campaign)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub tenant_id: i64,
        pub name: String,
        #[schema(value_type = Vec<String>)]
        pub target_tags: Json,
        // Dispatch sessions are referenced by name, not FK: a campaign may
        // outlive the sessions it was dispatched through.
        #[schema(value_type = Vec<String>)]
        pub session_names: Json,
        pub message_type: MessageType,
        pub message_content: String,
        pub status: CampaignStatus,
        #[schema(value_type = String, format = DateTime)]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::tenant::Entity",
            from = "Column::TenantId",
            to = "super::tenant::Column::Id"
        )]
        Tenant,
        #[sea_orm(has_many = "super::campaign_message::Entity")]
        CampaignMessage,
    }

    impl Related<super::tenant::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tenant.def()
        }
    }

    impl Related<super::campaign_message::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CampaignMessage.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- CampaignMessages ---
pub mod campaign_message {
    use super::*;
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel, ToSchema)]
    #[sea_orm(table_name = "campaign_messages")]
    #[schema(as = CampaignMessage)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub campaign_id: i64,
        pub contact_id: i64,
        pub session_name: String,
        pub status: CampaignMessageStatus,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::campaign::Entity",
            from = "Column::CampaignId",
            to = "super::campaign::Column::Id"
        )]
        Campaign,
        #[sea_orm(
            belongs_to = "super::contact::Entity",
            from = "Column::ContactId",
            to = "super::contact::Column::Id"
        )]
        Contact,
    }

    impl Related<super::campaign::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Campaign.def()
        }
    }

    impl Related<super::contact::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Contact.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
