//! Root component registration.

use clima_core::{App, AppError, ScreenDescriptor};

use crate::models::{forecast_model, login_model, store_model, tips_model};

pub const SCREENS: [ScreenDescriptor; 4] = [
    ScreenDescriptor::new(forecast_model::SCREEN_ID, "Clima"),
    ScreenDescriptor::new(tips_model::SCREEN_ID, "Calculadora de propinas"),
    ScreenDescriptor::new(login_model::SCREEN_ID, "Login"),
    ScreenDescriptor::new(store_model::SCREEN_ID, "Tienda"),
];

/// The screen shown when none is named.
pub const ROOT_SCREEN: &str = forecast_model::SCREEN_ID;

/// Register every screen and mark the forecast as the root component.
pub fn register_screens(app: &mut App) -> Result<(), AppError> {
    for screen in SCREENS {
        app.register_screen(screen);
    }
    app.register_root_component(ROOT_SCREEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_core::Config;

    #[test]
    fn test_root_is_forecast() {
        let mut app = App::new(Config::default());
        register_screens(&mut app).unwrap();
        assert_eq!(app.resolve(None).unwrap().id, "clima");
        assert_eq!(app.screens().len(), 4);
        assert_eq!(app.resolve(Some("tienda")).unwrap().name, "Tienda");
    }
}
