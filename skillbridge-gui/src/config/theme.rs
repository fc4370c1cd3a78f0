use serde::{Deserialize, Serialize};

/// Color theme selection, persisted in the GUI config file.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
        }
    }
}
