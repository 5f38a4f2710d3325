use clima_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use clima_weather::{LocationError, WeatherError as FetchError};

use super::IntoAppError;

impl IntoAppError for FetchError {
    fn into_app_error(self) -> AppError {
        match self {
            FetchError::PermissionDenied | FetchError::Location(LocationError::PermissionDenied) => {
                AppError::Weather(WeatherError::PermissionDenied)
            }
            FetchError::Location(e) => {
                AppError::Weather(WeatherError::LocationUnavailable(e.to_string()))
            }
            FetchError::HttpStatus(status) => AppError::Weather(WeatherError::HttpStatus(status)),
            FetchError::Network(e) => AppError::Network(e.into_network_error()),
            FetchError::Parse(s) => AppError::Network(NetworkError::InvalidResponse(s)),
            FetchError::Unknown => AppError::Weather(WeatherError::ApiError("unknown".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_maps_to_weather() {
        let err = FetchError::Location(LocationError::PermissionDenied).into_app_error();
        assert!(matches!(err, AppError::Weather(WeatherError::PermissionDenied)));
    }

    #[test]
    fn test_http_status_keeps_code() {
        let err = FetchError::HttpStatus(403).into_app_error();
        assert!(matches!(err, AppError::Weather(WeatherError::HttpStatus(403))));
        assert!(err.user_message().contains("API key"));
    }

    #[test]
    fn test_parse_is_invalid_response() {
        let err = FetchError::Parse("eof".into()).into_app_error();
        assert!(matches!(err, AppError::Network(NetworkError::InvalidResponse(_))));
    }
}
