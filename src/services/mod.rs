pub mod chat_repair;
pub mod seed;
pub mod session_check;
pub mod tenant_settings;
