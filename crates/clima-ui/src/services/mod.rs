pub mod store_service;
pub mod weather_service;

pub use store_service::{request_product, StoreServiceMessage};
pub use weather_service::{request_fetch as request_weather_fetch, WeatherServiceMessage};
