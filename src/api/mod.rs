pub mod campaigns;
pub mod companies;
pub mod contacts;
pub mod pipeline;
pub mod sessions;
pub mod tenants;
pub mod users;

use serde::Deserialize;
use utoipa::IntoParams;

/// Tenant scope for list endpoints. All business data is read per tenant.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TenantScope {
    pub tenant_id: i64,
}
