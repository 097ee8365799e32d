/// Application configuration
///
/// Page metadata and appearance, fixed at build time. Nothing is read from
/// disk or the environment.

pub const TITLE: &str = "Product Manager";
pub const DESCRIPTION: &str = "Manage a list of products";

/// Colour scheme of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Window title and page heading
    pub title: String,
    /// Short line shown under the heading
    pub description: String,
    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            theme: ThemeChoice::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let config = AppConfig::default();
        assert_eq!(config.title, TITLE);
        assert_eq!(config.description, DESCRIPTION);
        assert_eq!(config.theme.to_theme(), iced::Theme::Dark);
    }

    #[test]
    fn test_light_theme() {
        assert_eq!(ThemeChoice::Light.to_theme(), iced::Theme::Light);
    }
}
