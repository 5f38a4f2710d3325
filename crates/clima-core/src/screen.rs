/// A screen that can draw its current state as text.
///
/// Each screen owns its own state; nothing is shared between screens.
pub trait Screen {
    /// Stable identifier used on the command line
    fn id(&self) -> &'static str;

    /// Heading shown above the screen body
    fn title(&self) -> String;

    /// Render the current state
    fn render(&self) -> String;
}

/// Registry entry for a screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
    pub id: &'static str,
    pub name: &'static str,
}

impl ScreenDescriptor {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}
