//! Single-product viewer. Rendering never assumes the product has arrived.

use clima_core::Screen;
use clima_services::{Product, StoreError};

use crate::services::StoreServiceMessage;

pub const SCREEN_ID: &str = "tienda";

#[derive(Debug, Clone)]
pub struct StoreModel {
    loading: bool,
    product: Option<Product>,
    error: Option<String>,
}

impl Default for StoreModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreModel {
    /// A freshly mounted screen is loading and has no product yet.
    pub fn new() -> Self {
        Self {
            loading: true,
            product: None,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Back to the loading state before a new request ("Carga datos").
    pub fn begin_reload(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn handle_message(&mut self, msg: StoreServiceMessage) {
        match msg {
            StoreServiceMessage::ProductLoaded(Ok(product)) => {
                tracing::info!("Product loaded: {}", product.title);
                self.product = Some(product);
                self.error = None;
            }
            StoreServiceMessage::ProductLoaded(Err(e)) => {
                tracing::error!("Failed to load product: {}", e);
                self.error = Some(error_text(&e));
            }
        }
        self.loading = false;
    }
}

fn error_text(e: &StoreError) -> String {
    match e {
        StoreError::HttpStatus(status) => format!("Ocurrió un error: {}", status),
        StoreError::NotFound(id) => format!("Producto {} no encontrado", id),
        other => format!("Ocurrió un error: {}", other),
    }
}

impl Screen for StoreModel {
    fn id(&self) -> &'static str {
        SCREEN_ID
    }

    fn title(&self) -> String {
        "Tienda".to_string()
    }

    fn render(&self) -> String {
        if self.loading {
            return "Cargando datos\n[ Carga datos ]".to_string();
        }

        let mut lines = vec![self.title()];
        match &self.product {
            Some(product) => {
                lines.push(product.title.clone());
                lines.push(format!("Precio: ${:.2}", product.price));
                if !product.category.is_empty() {
                    lines.push(format!("Categoría: {}", product.category));
                }
                if let Some(rating) = &product.rating {
                    lines.push(format!("Valoración: {} ({} reseñas)", rating.rate, rating.count));
                }
            }
            None => lines.push("Sin datos".to_string()),
        }
        if let Some(error) = &self.error {
            lines.push(error.clone());
        }
        lines.join("\n")
    }
}
