use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Shared application state. Not `Clone`: workers share one instance through
/// the `web::Data` handle, which is an `Arc` underneath.
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn workers_share_one_state_through_the_data_handle() {
        let state = web::Data::new(AppState {
            db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 8080,
                public_url: None,
            },
        });

        let worker = state.clone();
        assert!(std::ptr::eq(state.get_ref(), worker.get_ref()));
        assert_eq!(worker.config.port, 8080);
    }
}
