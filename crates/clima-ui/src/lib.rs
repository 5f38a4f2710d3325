pub mod app_services;
pub mod error_mapping;
pub mod models;
pub mod registry;
pub mod services;

pub use error_mapping::IntoAppError;
pub use models::{ForecastModel, LoginModel, StoreModel, TipsModel};
pub use registry::{register_screens, ROOT_SCREEN, SCREENS};
