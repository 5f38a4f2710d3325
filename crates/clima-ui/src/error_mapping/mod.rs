//! Maps screen-level errors to clima_core::AppError for consistent user-facing messages.
//! Each service has its own module to keep mappings small and readable.

mod store;
mod weather;

use clima_core::AppError;

/// Conversion into the application error type for errors defined in other crates.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
