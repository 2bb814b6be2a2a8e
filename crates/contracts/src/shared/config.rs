use super::selection::SelectionColumnOptions;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

/// Настройки таблицы и её панели пагинации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Кнопок страниц с каждой стороны от текущей
    pub pagination_siblings: usize,
    pub selection: SelectionColumnOptions,
}

/// Конфигурация по умолчанию, встроенная в библиотеку
const DEFAULT_CONFIG: &str = r#"
page_size = 15
page_size_options = [10, 15, 25, 50, 100]
pagination_siblings = 1

[selection]
size = 50
"#;

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 15,
            page_size_options: vec![10, 15, 25, 50, 100],
            pagination_siblings: 1,
            selection: SelectionColumnOptions::default(),
        }
    }
}

impl TableConfig {
    /// Разбор встроенной конфигурации
    pub fn default_config() -> anyhow::Result<Self> {
        Self::from_toml(DEFAULT_CONFIG).context("embedded default table config")
    }

    /// Разбор TOML, отсутствующие ключи берутся по умолчанию
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: TableConfig = toml::from_str(text).context("failed to parse table config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Разбор JSON, например из `data-`атрибута точки монтирования
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: TableConfig =
            serde_json::from_str(text).context("failed to parse table config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.page_size > 0, "page_size must be positive");
        ensure!(
            !self.page_size_options.is_empty(),
            "page_size_options must not be empty"
        );
        ensure!(
            self.page_size_options.iter().all(|&size| size > 0),
            "page_size_options must be positive"
        );
        Ok(())
    }

    /// Варианты размера страницы вместе с `page_size`, по возрастанию
    pub fn effective_page_size_options(&self) -> Vec<usize> {
        let mut options = self.page_size_options.clone();
        if !options.contains(&self.page_size) {
            options.push(self.page_size);
        }
        options.sort_unstable();
        options.dedup();
        options
    }
}
