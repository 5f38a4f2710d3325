use clima_core::{AppError, NetworkError, ReqwestErrorExt, StoreError};
use clima_services::StoreError as ProductError;

use super::IntoAppError;

impl IntoAppError for ProductError {
    fn into_app_error(self) -> AppError {
        match self {
            ProductError::NotFound(id) => AppError::Store(StoreError::ProductNotFound(id)),
            ProductError::HttpStatus(status) => AppError::Network(NetworkError::ServerError {
                status,
                message: format!("product request failed with status {}", status),
            }),
            ProductError::Network(e) => AppError::Network(e.into_network_error()),
            ProductError::Parse(s) => AppError::Store(StoreError::ApiError(s)),
        }
    }
}
