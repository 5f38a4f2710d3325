use crate::error::AppError;
use crate::{Config, ScreenDescriptor};

/// Main application state: configuration plus the screen registry.
///
/// Exactly one registered screen can be the root component; it is what gets
/// shown when no screen is named explicitly.
pub struct App {
    config: Config,
    screens: Vec<ScreenDescriptor>,
    root: Option<&'static str>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self {
            config,
            screens: Vec::new(),
            root: None,
        }
    }

    /// Register a screen. Re-registering an id replaces the previous entry.
    pub fn register_screen(&mut self, screen: ScreenDescriptor) {
        tracing::debug!("Registering screen: {} ({})", screen.name, screen.id);
        match self.screens.iter_mut().find(|s| s.id == screen.id) {
            Some(existing) => *existing = screen,
            None => self.screens.push(screen),
        }
    }

    /// Mark a registered screen as the root component.
    pub fn register_root_component(&mut self, id: &str) -> Result<(), AppError> {
        let screen = self
            .screen(id)
            .ok_or_else(|| AppError::UnknownScreen(id.to_string()))?;
        tracing::info!("Root component: {}", screen.name);
        self.root = Some(screen.id);
        Ok(())
    }

    /// The root screen, if one was registered.
    pub fn root(&self) -> Option<&ScreenDescriptor> {
        self.root.and_then(|id| self.screen(id))
    }

    pub fn screen(&self, id: &str) -> Option<&ScreenDescriptor> {
        self.screens.iter().find(|s| s.id == id)
    }

    /// Resolve the screen to show: the named one, or the root when `None`.
    pub fn resolve(&self, id: Option<&str>) -> Result<&ScreenDescriptor, AppError> {
        match id {
            Some(id) => self
                .screen(id)
                .ok_or_else(|| AppError::UnknownScreen(id.to_string())),
            None => self
                .root()
                .ok_or_else(|| AppError::UnknownScreen("<root>".to_string())),
        }
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get list of all registered screens
    pub fn screens(&self) -> &[ScreenDescriptor] {
        &self.screens
    }

    pub fn shutdown(&mut self) {
        tracing::info!("Shutting down application");
    }
}
