//! Выбор строк в таблицах с пагинацией
//!
//! Выбор живёт дольше видимой страницы: id, отмеченные на одной странице,
//! остаются в [`SelectionSet`], пока вызывающий код меняет данные страницы.
//! Все производные значения здесь - чистые функции от
//! `(выбор, страница, проекция id)`, реактивный слой только оборачивает их в мемо.

pub mod column;
pub mod set;

pub use column::{CheckboxState, ColumnMeta, SelectionColumnOptions, SELECTION_COLUMN_ID};
pub use set::SelectionSet;

use std::fmt;
use std::sync::Arc;

/// Строка, которая сама знает свой стабильный id
///
/// Неявного поиска поля `id` нет: тип строки либо реализует этот трейт,
/// либо вызывающий код передаёт проекцию в [`RowIdFn::new`].
pub trait RowIdentity {
    fn row_id(&self) -> String;
}

/// Проекция строки в ключ выбора
pub struct RowIdFn<T>(Arc<dyn Fn(&T) -> String + Send + Sync>);

impl<T> RowIdFn<T> {
    pub fn new(f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn id_of(&self, row: &T) -> String {
        (self.0)(row)
    }
}

impl<T: RowIdentity> RowIdFn<T> {
    pub fn from_identity() -> Self {
        Self::new(|row: &T| row.row_id())
    }
}

impl<T> Clone for RowIdFn<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for RowIdFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowIdFn(..)")
    }
}

/// Id строк страницы в порядке страницы
pub fn page_ids<T>(page: &[T], row_id: &RowIdFn<T>) -> Vec<String> {
    page.iter().map(|row| row_id.id_of(row)).collect()
}

/// Строки текущей страницы, чей id выбран. Выбор с других страниц
/// в строки не превращается.
pub fn selected_row_data<T: Clone>(
    selection: &SelectionSet,
    page: &[T],
    row_id: &RowIdFn<T>,
) -> Vec<T> {
    page.iter()
        .filter(|row| selection.contains(&row_id.id_of(row)))
        .cloned()
        .collect()
}

/// Страница не пуста и выбраны все её строки
pub fn is_all_page_selected<T>(selection: &SelectionSet, page: &[T], row_id: &RowIdFn<T>) -> bool {
    !page.is_empty() && page.iter().all(|row| selection.contains(&row_id.id_of(row)))
}

/// Выбраны некоторые, но не все строки страницы
pub fn is_some_page_selected<T>(selection: &SelectionSet, page: &[T], row_id: &RowIdFn<T>) -> bool {
    let any = page.iter().any(|row| selection.contains(&row_id.id_of(row)));
    any && !is_all_page_selected(selection, page, row_id)
}

/// Состояние чекбокса в заголовке для страницы
pub fn page_checkbox_state<T>(
    selection: &SelectionSet,
    page: &[T],
    row_id: &RowIdFn<T>,
) -> CheckboxState {
    CheckboxState::from_flags(
        is_all_page_selected(selection, page, row_id),
        is_some_page_selected(selection, page, row_id),
    )
}

/// Снимает выбор со всей страницы, если она выбрана целиком, иначе выбирает
/// все её строки. Id вне страницы не трогаются.
pub fn toggle_all_page<T>(selection: &mut SelectionSet, page: &[T], row_id: &RowIdFn<T>) {
    let ids = page_ids(page, row_id);
    if is_all_page_selected(selection, page, row_id) {
        log::debug!("selection: deselecting {} rows of current page", ids.len());
        selection.remove_many(ids);
    } else {
        log::debug!("selection: selecting {} rows of current page", ids.len());
        selection.insert_many(ids);
    }
}

/// Нереактивная модель выбора: хранит выбор и копию текущей страницы.
/// Работает без реактивного рантайма, реактивный хук ведёт себя так же.
#[derive(Debug, Clone)]
pub struct SelectionModel<T> {
    selection: SelectionSet,
    page: Vec<T>,
    row_id: RowIdFn<T>,
}

impl<T: Clone> SelectionModel<T> {
    pub fn new(row_id: RowIdFn<T>) -> Self {
        Self {
            selection: SelectionSet::new(),
            page: Vec::new(),
            row_id,
        }
    }

    /// Заменяет видимую страницу, выбор не меняется
    pub fn set_page(&mut self, page: Vec<T>) {
        self.page = page;
    }

    pub fn page(&self) -> &[T] {
        &self.page
    }

    pub fn row_selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_row_ids(&self) -> Vec<String> {
        self.selection.ids()
    }

    pub fn selected_row_data(&self) -> Vec<T> {
        selected_row_data(&self.selection, &self.page, &self.row_id)
    }

    pub fn is_all_current_page_selected(&self) -> bool {
        is_all_page_selected(&self.selection, &self.page, &self.row_id)
    }

    pub fn is_some_current_page_selected(&self) -> bool {
        is_some_page_selected(&self.selection, &self.page, &self.row_id)
    }

    pub fn is_row_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn header_state(&self) -> CheckboxState {
        page_checkbox_state(&self.selection, &self.page, &self.row_id)
    }

    pub fn clear_selection(&mut self) {
        self.selection = SelectionSet::new();
    }

    pub fn toggle_all_current_page(&mut self) {
        let mut next = self.selection.clone();
        toggle_all_page(&mut next, &self.page, &self.row_id);
        self.selection = next;
    }

    pub fn toggle_row_selection(&mut self, id: &str) {
        let mut next = self.selection.clone();
        next.toggle(id);
        self.selection = next;
    }

    pub fn select_rows<S: AsRef<str>>(&mut self, ids: &[S]) {
        let mut next = self.selection.clone();
        next.insert_many(ids.iter().map(|id| id.as_ref().to_string()));
        self.selection = next;
    }

    pub fn deselect_rows<S: AsRef<str>>(&mut self, ids: &[S]) {
        let mut next = self.selection.clone();
        next.remove_many(ids);
        self.selection = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
    }

    impl RowIdentity for Row {
        fn row_id(&self) -> String {
            self.id.clone()
        }
    }

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().map(|id| Row { id: id.to_string() }).collect()
    }

    fn model(page: &[&str]) -> SelectionModel<Row> {
        let mut m = SelectionModel::new(RowIdFn::from_identity());
        m.set_page(rows(page));
        m
    }

    fn sorted(mut ids: Vec<String>) -> Vec<String> {
        ids.sort();
        ids
    }

    #[test]
    fn test_toggle_parity() {
        let mut m = model(&["1", "2"]);
        for n in 1..=7 {
            m.toggle_row_selection("1");
            assert_eq!(m.is_row_selected("1"), n % 2 == 1);
        }
    }

    #[test]
    fn test_select_then_deselect_restores_previous() {
        let mut m = model(&["1", "2", "3"]);
        m.select_rows(&["1"]);
        let before = m.row_selection().clone();

        m.select_rows(&["2", "2", "9"]);
        m.deselect_rows(&["2", "2", "9"]);
        assert_eq!(m.row_selection(), &before);
    }

    #[test]
    fn test_clear_selection_resets_everything() {
        let mut m = model(&["1", "2"]);
        m.select_rows(&["1", "2", "off-page"]);
        m.clear_selection();
        assert!(m.selected_row_ids().is_empty());
        assert!(!m.is_all_current_page_selected());
        assert!(!m.is_some_current_page_selected());
    }

    #[test]
    fn test_empty_page_flags_are_false() {
        let mut m = model(&[]);
        m.select_rows(&["1"]);
        assert!(!m.is_all_current_page_selected());
        assert!(!m.is_some_current_page_selected());
        assert!(m.selected_row_data().is_empty());
    }

    #[test]
    fn test_flags_never_both_true() {
        let mut m = model(&["1", "2", "3"]);
        let steps: [&[&str]; 4] = [&["1"], &["2"], &["3"], &["x"]];
        for ids in steps {
            m.select_rows(ids);
            assert!(!(m.is_all_current_page_selected() && m.is_some_current_page_selected()));
        }
        assert!(m.is_all_current_page_selected());
        assert!(!m.is_some_current_page_selected());
    }

    #[test]
    fn test_toggle_all_current_page_twice() {
        let mut m = model(&["1", "2", "3"]);
        m.toggle_all_current_page();
        assert_eq!(sorted(m.selected_row_ids()), vec!["1", "2", "3"]);
        assert!(m.is_all_current_page_selected());

        m.toggle_all_current_page();
        assert!(m.selected_row_ids().is_empty());
    }

    #[test]
    fn test_toggle_all_from_partial_selects_page_and_keeps_off_page() {
        let mut m = model(&["1", "2"]);
        m.select_rows(&["1", "other"]);
        assert!(m.is_some_current_page_selected());

        m.toggle_all_current_page();
        assert_eq!(sorted(m.selected_row_ids()), vec!["1", "2", "other"]);

        m.toggle_all_current_page();
        assert_eq!(m.selected_row_ids(), vec!["other".to_string()]);
    }

    #[test]
    fn test_off_page_selection_survives_page_change() {
        let mut m = model(&["1", "2", "3"]);
        m.select_rows(&["5"]);
        assert!(m.selected_row_data().is_empty());
        assert!(!m.is_some_current_page_selected());

        m.set_page(rows(&["4", "5", "6"]));
        assert_eq!(m.selected_row_data(), rows(&["5"]));
        assert!(!m.is_all_current_page_selected());
        assert!(m.is_some_current_page_selected());

        assert_eq!(m.header_state(), CheckboxState::Indeterminate);

        m.select_rows(&["4", "6"]);
        assert!(m.is_all_current_page_selected());
        assert_eq!(m.header_state(), CheckboxState::Checked);
    }

    #[test]
    fn test_deselect_only_selected_row() {
        let mut m = model(&["1", "2", "3"]);
        m.toggle_row_selection("2");
        assert!(m.is_some_current_page_selected());

        m.toggle_row_selection("2");
        assert!(!m.is_some_current_page_selected());
        assert!(m.selected_row_ids().is_empty());
    }

    #[test]
    fn test_page_checkbox_state() {
        let page = rows(&["1", "2"]);
        let row_id = RowIdFn::from_identity();
        let mut selection = SelectionSet::new();
        assert_eq!(page_checkbox_state(&selection, &page, &row_id), CheckboxState::Unchecked);

        selection.insert("1");
        assert_eq!(page_checkbox_state(&selection, &page, &row_id), CheckboxState::Indeterminate);

        selection.insert("2");
        assert_eq!(page_checkbox_state(&selection, &page, &row_id), CheckboxState::Checked);
    }

    #[test]
    fn test_explicit_projection() {
        let page = vec![(10_u32, "a"), (20, "b")];
        let row_id = RowIdFn::new(|row: &(u32, &str)| row.0.to_string());
        let selection: SelectionSet = ["20"].into_iter().collect();
        assert_eq!(selected_row_data(&selection, &page, &row_id), vec![(20, "b")]);
        assert_eq!(page_ids(&page, &row_id), vec!["10", "20"]);
    }
}
