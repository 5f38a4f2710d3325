pub mod forecast_model;
pub mod login_model;
pub mod store_model;
pub mod tips_model;

pub use forecast_model::ForecastModel;
pub use login_model::{LoginModel, LoginOutcome};
pub use store_model::StoreModel;
pub use tips_model::TipsModel;
