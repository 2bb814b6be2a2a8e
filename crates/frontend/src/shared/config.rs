//! Настройки таблиц в контексте Leptos
//!
//! Приложение один раз кладёт [`TableConfig`] в контекст (например, из
//! `data-`атрибута точки монтирования), таблицы ниже читают его через
//! [`use_table_config`], а без него берут встроенные значения.

use contracts::shared::config::TableConfig;
use leptos::prelude::*;

/// Передаёт настройки дочерним компонентам
pub fn provide_table_config(config: TableConfig) {
    provide_context(config);
}

/// Разбирает JSON и передаёт настройки; при ошибке остаются значения по умолчанию
pub fn provide_table_config_json(json: &str) {
    let config = TableConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("table config: {:#}; using defaults", err);
        TableConfig::default()
    });
    provide_table_config(config);
}

/// Настройки из контекста или значения по умолчанию
pub fn use_table_config() -> TableConfig {
    use_context::<TableConfig>().unwrap_or_default()
}
