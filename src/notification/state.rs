/// Flash category, mirroring the service's alert levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
}

/// Notification state
///
/// Holds at most one flash message; a new one replaces the old.
#[derive(Default)]
pub struct NotificationState {
    flash: Option<(FlashLevel, String)>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash(&mut self, level: FlashLevel, message: impl Into<String>) {
        self.flash = Some((level, message.into()));
    }

    pub fn clear(&mut self) {
        self.flash = None;
    }

    pub fn current(&self) -> Option<(FlashLevel, &str)> {
        self.flash
            .as_ref()
            .map(|(level, message)| (*level, message.as_str()))
    }
}
