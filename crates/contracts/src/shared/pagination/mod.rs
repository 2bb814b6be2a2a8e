//! Контракты пагинации для ответов в формате Laravel
//!
//! Страницы нумеруются с 1, как их присылает сервер. Принимаются оба
//! варианта: обычный `paginate()` и API resource (`data`/`links`/`meta`).
//! Метаданные приходят извне, поэтому вся арифметика здесь насыщающая.

pub mod error;

pub use error::PaginationError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Метаданные страницы из ответа сервера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
    pub total: usize,
    /// Номер первой строки страницы (с 1), `None` для пустой страницы
    #[serde(default)]
    pub from: Option<usize>,
    #[serde(default)]
    pub to: Option<usize>,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self::from_total(1, 15, 0)
    }
}

/// Элемент окна номеров страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl PaginationMeta {
    /// Метаданные так, как их считает сервер по числу строк
    pub fn from_total(current_page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let current_page = current_page.max(1);
        let last_page = total.div_ceil(per_page).max(1);
        let offset = (current_page - 1).saturating_mul(per_page);
        let (from, to) = if offset < total {
            (Some(offset + 1), Some(offset.saturating_add(per_page).min(total)))
        } else {
            (None, None)
        };
        Self {
            current_page,
            last_page,
            per_page,
            total,
            from,
            to,
        }
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.per_page == 0 {
            return Err(PaginationError::InvalidMeta("per_page must be positive"));
        }
        if self.current_page == 0 {
            return Err(PaginationError::InvalidMeta("current_page is 1-based"));
        }
        if self.last_page == 0 {
            return Err(PaginationError::InvalidMeta("last_page is 1-based"));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Запрошена страница за последней (сервер вернул пустой список)
    pub fn is_out_of_range(&self) -> bool {
        self.current_page > self.last_page
    }

    pub fn summary(&self) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                format!("Showing {} to {} of {} results", from, to, self.total)
            }
            _ => "No results".to_string(),
        }
    }

    /// Номера страниц вокруг текущей. Первая и последняя есть всегда;
    /// пропуск в одну страницу показывается самой страницей, а не многоточием.
    pub fn page_window(&self, siblings: usize) -> Vec<PageItem> {
        let last = self.last_page.max(1);
        let current = self.current_page.clamp(1, last);
        let start = current.saturating_sub(siblings).max(1);
        let end = current.saturating_add(siblings).min(last);

        let mut items = Vec::with_capacity((end - start).saturating_add(5));
        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 3 {
                items.push(PageItem::Ellipsis);
            } else if start == 3 {
                items.push(PageItem::Page(2));
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < last {
            if end.saturating_add(2) < last {
                items.push(PageItem::Ellipsis);
            } else if end.saturating_add(2) == last {
                items.push(PageItem::Page(last - 1));
            }
            items.push(PageItem::Page(last));
        }
        items
    }
}

/// Строки одной страницы и её метаданные
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T: DeserializeOwned> Paginated<T> {
    pub fn from_json(json: &str) -> Result<Self, PaginationError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, PaginationError> {
        let Value::Object(mut object) = value else {
            return Err(PaginationError::NotAnObject);
        };
        let data = object
            .remove("data")
            .ok_or(PaginationError::MissingField("data"))?;
        // API resource кладёт счётчики в `meta`, обычный paginate() - на верхний уровень
        let meta = match object.remove("meta") {
            Some(meta) => meta,
            None => Value::Object(object),
        };

        let data: Vec<T> = serde_json::from_value(data)?;
        let meta: PaginationMeta = serde_json::from_value(meta)?;
        meta.validate()?;

        log::debug!(
            "pagination: page {}/{} with {} rows",
            meta.current_page,
            meta.last_page,
            data.len()
        );
        Ok(Self { data, meta })
    }
}
