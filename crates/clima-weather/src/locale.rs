//! Display language for the forecast screen.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" => Some(Self::Es),
            "en" | "en-us" | "en-gb" => Some(Self::En),
            _ => None,
        }
    }

    /// Value for the service's `lang` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Label that replaces the weekday of the first row when it is today
    pub fn today_label(&self) -> &'static str {
        match self {
            Self::Es => "Hoy",
            Self::En => "Today",
        }
    }

    /// Lowercase weekday name as the locale spells it
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (Self::Es, Weekday::Mon) => "lunes",
            (Self::Es, Weekday::Tue) => "martes",
            (Self::Es, Weekday::Wed) => "miércoles",
            (Self::Es, Weekday::Thu) => "jueves",
            (Self::Es, Weekday::Fri) => "viernes",
            (Self::Es, Weekday::Sat) => "sábado",
            (Self::Es, Weekday::Sun) => "domingo",
            (Self::En, Weekday::Mon) => "monday",
            (Self::En, Weekday::Tue) => "tuesday",
            (Self::En, Weekday::Wed) => "wednesday",
            (Self::En, Weekday::Thu) => "thursday",
            (Self::En, Weekday::Fri) => "friday",
            (Self::En, Weekday::Sat) => "saturday",
            (Self::En, Weekday::Sun) => "sunday",
        }
    }

    pub fn permission_denied(&self) -> &'static str {
        match self {
            Self::Es => "Permiso de ubicación denegado",
            Self::En => "Location permission denied",
        }
    }

    pub fn http_error(&self, status: u16) -> String {
        match self {
            Self::Es => format!("Error HTTP: {}", status),
            Self::En => format!("HTTP error: {}", status),
        }
    }

    pub fn location_unavailable(&self) -> &'static str {
        match self {
            Self::Es => "Servicio de ubicación no disponible",
            Self::En => "Location service unavailable",
        }
    }

    pub fn location_error(&self, detail: &str) -> String {
        match self {
            Self::Es => format!("Error de ubicación: {}", detail),
            Self::En => format!("Location error: {}", detail),
        }
    }

    pub fn network_error(&self, detail: &str) -> String {
        match self {
            Self::Es => format!("Error de red: {}", detail),
            Self::En => format!("Network error: {}", detail),
        }
    }

    pub fn parse_error(&self, detail: &str) -> String {
        match self {
            Self::Es => format!("Respuesta no válida: {}", detail),
            Self::En => format!("Parse error: {}", detail),
        }
    }

    pub fn unknown_error(&self) -> &'static str {
        match self {
            Self::Es => "Error desconocido",
            Self::En => "Unknown error",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self {
            Self::Es => "Cargando...",
            Self::En => "Loading...",
        }
    }

    pub fn forecast_title(&self, location_name: &str) -> String {
        match self {
            Self::Es => format!("Pronóstico del Clima de 5 días - {}", location_name),
            Self::En => format!("5-day weather forecast - {}", location_name),
        }
    }

    /// Labels for the max, min and rain lines of a forecast card
    pub fn card_labels(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Es => ("Máx", "Mín", "Lluvia"),
            Self::En => ("Max", "Min", "Rain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("es"), Some(Locale::Es));
        assert_eq!(Locale::from_code("ES-es"), Some(Locale::Es));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Locale::Es.weekday_name(Weekday::Sat), "sábado");
        assert_eq!(Locale::En.weekday_name(Weekday::Wed), "wednesday");
    }
}
