//! Описание колонки для `DataTable`
//!
//! Колонка = декларативная часть (`ColumnMeta`) + два рендерера:
//! заголовок и ячейка строки. Таблица сама не знает, что внутри ячеек.

use contracts::shared::selection::ColumnMeta;
use leptos::prelude::*;
use std::sync::Arc;

pub type HeaderRenderer = Arc<dyn Fn() -> AnyView + Send + Sync>;
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Колонка таблицы
pub struct ColumnDef<T> {
    pub meta: ColumnMeta,
    pub header: HeaderRenderer,
    pub cell: CellRenderer<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            header: Arc::clone(&self.header),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: 'static> ColumnDef<T> {
    /// Колонка с текстовым заголовком
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        cell: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        let label: String = label.into();
        Self {
            meta: ColumnMeta::new(id),
            header: Arc::new(move || label.clone().into_any()),
            cell: Arc::new(cell),
        }
    }

    /// Текстовая колонка: значение берётся из строки
    pub fn text(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(id, label, move |row| value(row).into_any())
    }

    pub fn with_header(mut self, header: impl Fn() -> AnyView + Send + Sync + 'static) -> Self {
        self.header = Arc::new(header);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.meta = self.meta.sortable();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.meta = self.meta.with_size(size);
        self
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct User {
        name: String,
    }

    #[test]
    fn test_builder_meta() {
        let column = ColumnDef::text("name", "Name", |u: &User| u.name.clone())
            .sortable()
            .with_size(120);
        assert_eq!(column.id(), "name");
        assert!(column.meta.enable_sorting);
        assert_eq!(column.meta.size, Some(120));

        let plain = ColumnDef::<User>::text("email", "Email", |_| String::new());
        assert!(!plain.meta.enable_sorting);
        assert_eq!(plain.meta.width_style(), None);
    }
}
