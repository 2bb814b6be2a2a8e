use serde::{Deserialize, Serialize};

/// Класс на `<html>`, включающий тёмную тему
pub const DARK_CLASS: &str = "dark";

/// Media query системной тёмной темы
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Цветовая схема документа
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert!(ColorScheme::from_dark(true).is_dark());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ColorScheme::Dark).unwrap(), r#""dark""#);
        let scheme: ColorScheme = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(scheme, ColorScheme::Light);
    }
}
