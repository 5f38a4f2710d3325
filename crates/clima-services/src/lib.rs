pub mod store;
pub mod tips;

pub use store::{Product, ProductClient, Rating, StoreError};
pub use tips::{calculate, TipEntry, TipHistory};
