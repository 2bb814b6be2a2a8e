//! Утилиты сортировки для заголовков таблиц
use contracts::shared::sort::SortState;

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(current: Option<&SortState>, column: &str) -> &'static str {
    match current {
        Some(state) if state.column == column => {
            if state.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current: Option<&SortState>, column: &str) -> &'static str {
    match current {
        Some(state) if state.column == column => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let asc = SortState::ascending("name");
        assert_eq!(get_sort_indicator(Some(&asc), "name"), " ▲");
        assert_eq!(get_sort_indicator(Some(&asc), "email"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");

        let desc = SortState::next(Some(&asc), "name");
        assert_eq!(get_sort_indicator(Some(&desc), "name"), " ▼");
    }

    #[test]
    fn test_sort_class() {
        let asc = SortState::ascending("name");
        assert!(get_sort_class(Some(&asc), "name").ends_with("--active"));
        assert_eq!(get_sort_class(None, "name"), "table__sort-indicator");
    }
}
