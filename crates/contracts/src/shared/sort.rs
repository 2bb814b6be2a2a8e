use serde::{Deserialize, Serialize};

/// Запрошенная сортировка таблицы (сортирует сервер)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub ascending: bool,
}

impl SortState {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    /// Клик по заголовку: та же колонка - меняем направление,
    /// другая колонка - сортируем по ней по возрастанию
    pub fn next(current: Option<&SortState>, column: &str) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column: state.column.clone(),
                ascending: !state.ascending,
            },
            _ => SortState::ascending(column),
        }
    }

    /// Параметр в стиле Laravel: `name` или `-name`
    pub fn to_query_value(&self) -> String {
        if self.ascending {
            self.column.clone()
        } else {
            format!("-{}", self.column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sort_state() {
        let first = SortState::next(None, "name");
        assert_eq!(first, SortState::ascending("name"));

        let flipped = SortState::next(Some(&first), "name");
        assert!(!flipped.ascending);

        let other = SortState::next(Some(&flipped), "email");
        assert_eq!(other, SortState::ascending("email"));
    }

    #[test]
    fn test_query_value() {
        assert_eq!(SortState::ascending("name").to_query_value(), "name");
        let desc = SortState {
            column: "created_at".into(),
            ascending: false,
        };
        assert_eq!(desc.to_query_value(), "-created_at");
    }
}
