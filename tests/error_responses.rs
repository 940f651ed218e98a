use actix_web::{http::StatusCode, ResponseError};
use zapcrm::errors::AppError;

#[test]
fn error_variants_map_to_expected_status_codes() {
    assert_eq!(
        AppError::NotFound("Tenant 7 not found".to_string()).status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::InvalidInput("bad".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(AppError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        AppError::DbError(sea_orm::DbErr::Custom("boom".to_string())).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(AppError::NotFound(String::new()).code(), "NOT_FOUND");
    assert_eq!(AppError::InvalidInput(String::new()).code(), "INVALID_INPUT");
    assert_eq!(AppError::Internal.code(), "INTERNAL");
    assert_eq!(
        AppError::DbError(sea_orm::DbErr::Custom(String::new())).code(),
        "DB_ERROR"
    );
}
