use serde::{Deserialize, Serialize};

/// Id колонки с чекбоксами выбора
pub const SELECTION_COLUMN_ID: &str = "select";

pub const DEFAULT_HEADER_CLASS: &str = "flex items-center justify-center";
pub const DEFAULT_CELL_CLASS: &str = "flex items-center justify-center";
pub const DEFAULT_CHECKBOX_CLASS: &str =
    "w-4 h-4 text-blue-600 bg-gray-100 border-gray-300 rounded focus:ring-blue-500 focus:ring-2";
pub const DEFAULT_SELECTION_COLUMN_SIZE: u32 = 50;

/// Настройки колонки выбора строк
///
/// Любое поле можно опустить в конфиге, подставится значение по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionColumnOptions {
    pub header_class: String,
    pub cell_class: String,
    pub checkbox_class: String,
    /// Фиксированная ширина колонки в пикселях
    pub size: u32,
}

impl Default for SelectionColumnOptions {
    fn default() -> Self {
        Self {
            header_class: DEFAULT_HEADER_CLASS.to_string(),
            cell_class: DEFAULT_CELL_CLASS.to_string(),
            checkbox_class: DEFAULT_CHECKBOX_CLASS.to_string(),
            size: DEFAULT_SELECTION_COLUMN_SIZE,
        }
    }
}

impl SelectionColumnOptions {
    pub fn with_header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = class.into();
        self
    }

    pub fn with_cell_class(mut self, class: impl Into<String>) -> Self {
        self.cell_class = class.into();
        self
    }

    pub fn with_checkbox_class(mut self, class: impl Into<String>) -> Self {
        self.checkbox_class = class.into();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Декларативная часть колонки (без рендереров)
    pub fn column_meta(&self) -> ColumnMeta {
        ColumnMeta {
            id: SELECTION_COLUMN_ID.to_string(),
            enable_sorting: false,
            size: Some(self.size),
        }
    }
}

/// Декларативное описание колонки таблицы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub id: String,
    pub enable_sorting: bool,
    /// Ширина в пикселях, `None` - по содержимому
    pub size: Option<u32>,
}

impl ColumnMeta {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enable_sorting: false,
            size: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.enable_sorting = true;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Inline-стиль ширины для `<th>`/`<td>`
    pub fn width_style(&self) -> Option<String> {
        self.size
            .map(|px| format!("width: {px}px; min-width: {px}px; max-width: {px}px;"))
    }
}

/// Состояние чекбокса в заголовке
///
/// `Indeterminate` нельзя выразить атрибутом `checked`, его выставляют
/// через DOM-свойство после рендера.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    /// Состояние по флагам "выбрано всё" / "выбрано частично"
    pub fn from_flags(all: bool, some: bool) -> Self {
        if all {
            CheckboxState::Checked
        } else if some {
            CheckboxState::Indeterminate
        } else {
            CheckboxState::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        matches!(self, CheckboxState::Checked)
    }

    pub fn is_indeterminate(self) -> bool {
        matches!(self, CheckboxState::Indeterminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SelectionColumnOptions::default();
        assert_eq!(opts.size, 50);
        assert_eq!(opts.header_class, "flex items-center justify-center");
        assert!(opts.checkbox_class.starts_with("w-4 h-4"));
    }

    #[test]
    fn test_partial_options_from_json() {
        let opts: SelectionColumnOptions = serde_json::from_str(r#"{"size": 64}"#).unwrap();
        assert_eq!(opts.size, 64);
        assert_eq!(opts.cell_class, DEFAULT_CELL_CLASS);
    }

    #[test]
    fn test_checkbox_state_from_flags() {
        assert_eq!(CheckboxState::from_flags(false, false), CheckboxState::Unchecked);
        assert_eq!(CheckboxState::from_flags(false, true), CheckboxState::Indeterminate);
        assert_eq!(CheckboxState::from_flags(true, false), CheckboxState::Checked);
        assert!(CheckboxState::from_flags(true, false).is_checked());
        assert!(!CheckboxState::from_flags(false, true).is_checked());
    }

    #[test]
    fn test_selection_column_meta() {
        let meta = SelectionColumnOptions::default().with_size(40).column_meta();
        assert_eq!(meta.id, "select");
        assert!(!meta.enable_sorting);
        assert_eq!(meta.size, Some(40));
        assert_eq!(
            meta.width_style().as_deref(),
            Some("width: 40px; min-width: 40px; max-width: 40px;")
        );
    }
}
