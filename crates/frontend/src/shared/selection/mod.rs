//! Реактивный выбор строк для таблиц с пагинацией
//!
//! `use_row_selection` держит [`SelectionSet`] в сигнале и выводит из него
//! значения для текущей страницы через мемо. Строками страницы владеет
//! вызывающий код и может менять их когда угодно, выбор от этого не меняется.

use crate::shared::class_names::cn;
use crate::shared::components::table::{ColumnDef, TableCellCheckbox, TableHeaderCheckbox};
use contracts::shared::selection::{
    self as pure, CheckboxState, RowIdFn, RowIdentity, SelectionColumnOptions, SelectionSet,
};
use leptos::prelude::*;
use std::sync::Arc;

/// BEM-классы колонки выбора, остаются при любых пользовательских классах
pub const SELECT_HEADER_CLASS: &str = "data-table__select-header";
pub const SELECT_CELL_CLASS: &str = "data-table__select-cell";
pub const SELECT_CHECKBOX_CLASS: &str = "data-table__checkbox";

/// Итоговые классы колонки выбора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionColumnClasses {
    pub header: String,
    pub cell: String,
    pub checkbox: String,
}

/// BEM-класс + классы из настроек (по умолчанию или заданные вызывающим)
pub fn selection_column_classes(options: &SelectionColumnOptions) -> SelectionColumnClasses {
    SelectionColumnClasses {
        header: cn(&[SELECT_HEADER_CLASS, options.header_class.as_str()]),
        cell: cn(&[SELECT_CELL_CLASS, options.cell_class.as_str()]),
        checkbox: cn(&[SELECT_CHECKBOX_CLASS, options.checkbox_class.as_str()]),
    }
}

/// Состояние выбора и операции одной таблицы
pub struct RowSelection<T: Send + Sync + 'static> {
    /// Сам набор выбранных id, например чтобы сохранить его
    pub row_selection: RwSignal<SelectionSet>,
    pub selected_row_ids: Memo<Vec<String>>,
    pub selected_row_data: Signal<Vec<T>>,
    pub is_all_current_page_selected: Memo<bool>,
    pub is_some_current_page_selected: Memo<bool>,
    page: Signal<Vec<T>>,
    row_id: StoredValue<RowIdFn<T>>,
}

impl<T: Send + Sync + 'static> Clone for RowSelection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RowSelection<T> {}

/// Выбор строк `page` с явной проекцией id
pub fn use_row_selection<T>(page: impl Into<Signal<Vec<T>>>, row_id: RowIdFn<T>) -> RowSelection<T>
where
    T: Clone + Send + Sync + 'static,
{
    let page: Signal<Vec<T>> = page.into();
    let row_selection = RwSignal::new(SelectionSet::new());
    let row_id = StoredValue::new(row_id);

    let selected_row_ids = Memo::new(move |_| row_selection.with(|selection| selection.ids()));

    let selected_row_data = Signal::derive(move || {
        row_selection.with(|selection| {
            page.with(|rows| row_id.with_value(|f| pure::selected_row_data(selection, rows, f)))
        })
    });

    let is_all_current_page_selected = Memo::new(move |_| {
        row_selection.with(|selection| {
            page.with(|rows| row_id.with_value(|f| pure::is_all_page_selected(selection, rows, f)))
        })
    });

    let is_some_current_page_selected = Memo::new(move |_| {
        row_selection.with(|selection| {
            page.with(|rows| row_id.with_value(|f| pure::is_some_page_selected(selection, rows, f)))
        })
    });

    RowSelection {
        row_selection,
        selected_row_ids,
        selected_row_data,
        is_all_current_page_selected,
        is_some_current_page_selected,
        page,
        row_id,
    }
}

/// Выбор строк, которые сами знают свой id
pub fn use_row_selection_by_identity<T>(page: impl Into<Signal<Vec<T>>>) -> RowSelection<T>
where
    T: RowIdentity + Clone + Send + Sync + 'static,
{
    use_row_selection(page, RowIdFn::from_identity())
}

impl<T> RowSelection<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn is_row_selected(&self, id: &str) -> bool {
        self.row_selection.with(|selection| selection.contains(id))
    }

    /// Состояние чекбокса в заголовке
    pub fn header_state(&self) -> CheckboxState {
        CheckboxState::from_flags(
            self.is_all_current_page_selected.get(),
            self.is_some_current_page_selected.get(),
        )
    }

    pub fn row_id_of(&self, row: &T) -> String {
        self.row_id.with_value(|f| f.id_of(row))
    }

    /// Сбрасывает весь выбор, включая строки других страниц
    pub fn clear_selection(&self) {
        log::debug!("selection: cleared");
        self.row_selection.set(SelectionSet::new());
    }

    pub fn toggle_all_current_page(&self) {
        let mut next = self.row_selection.get_untracked();
        self.page.with_untracked(|rows| {
            self.row_id.with_value(|f| pure::toggle_all_page(&mut next, rows, f))
        });
        self.row_selection.set(next);
    }

    pub fn toggle_row_selection(&self, id: &str) {
        let mut next = self.row_selection.get_untracked();
        let selected = next.toggle(id);
        log::debug!("selection: row {} -> {}", id, selected);
        self.row_selection.set(next);
    }

    pub fn select_rows<S: AsRef<str>>(&self, ids: &[S]) {
        let mut next = self.row_selection.get_untracked();
        next.insert_many(ids.iter().map(|id| id.as_ref().to_string()));
        log::debug!("selection: select {} rows, {} selected", ids.len(), next.len());
        self.row_selection.set(next);
    }

    pub fn deselect_rows<S: AsRef<str>>(&self, ids: &[S]) {
        let mut next = self.row_selection.get_untracked();
        next.remove_many(ids);
        log::debug!("selection: deselect {} rows, {} selected", ids.len(), next.len());
        self.row_selection.set(next);
    }

    /// Колонка с чекбоксом "выбрать всё" в заголовке и чекбоксом в каждой строке
    pub fn get_selection_column(&self, options: SelectionColumnOptions) -> ColumnDef<T> {
        let selection = *self;
        let SelectionColumnClasses {
            header: header_class,
            cell: cell_class,
            checkbox: checkbox_class,
        } = selection_column_classes(&options);
        let header_checkbox_class = checkbox_class.clone();

        let header = move || {
            view! {
                <div class=header_class.clone()>
                    <TableHeaderCheckbox
                        state=Signal::derive(move || selection.header_state())
                        on_toggle=Callback::new(move |_| selection.toggle_all_current_page())
                        class=header_checkbox_class.clone()
                    />
                </div>
            }
            .into_any()
        };

        let cell = move |row: &T| {
            let id = selection.row_id_of(row);
            let id_for_toggle = id.clone();
            view! {
                <div class=cell_class.clone()>
                    <TableCellCheckbox
                        checked=Signal::derive(move || selection.is_row_selected(&id))
                        on_toggle=Callback::new(move |_| selection.toggle_row_selection(&id_for_toggle))
                        class=checkbox_class.clone()
                    />
                </div>
            }
            .into_any()
        };

        ColumnDef {
            meta: options.column_meta(),
            header: Arc::new(header),
            cell: Arc::new(cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
    }

    impl RowIdentity for Row {
        fn row_id(&self) -> String {
            self.id.to_string()
        }
    }

    fn rows(ids: &[u32]) -> Vec<Row> {
        ids.iter().map(|&id| Row { id }).collect()
    }

    #[test]
    fn test_memos_follow_mutations() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(rows(&[1, 2, 3]));
            let selection = use_row_selection_by_identity(page);

            assert_eq!(selection.header_state(), CheckboxState::Unchecked);
            selection.toggle_all_current_page();
            assert_eq!(selection.header_state(), CheckboxState::Checked);
            assert!(selection.is_all_current_page_selected.get_untracked());
            assert!(!selection.is_some_current_page_selected.get_untracked());
            assert_eq!(selection.selected_row_ids.get_untracked().len(), 3);

            selection.toggle_row_selection("2");
            assert_eq!(selection.header_state(), CheckboxState::Indeterminate);
            assert!(selection.is_some_current_page_selected.get_untracked());
            assert_eq!(selection.selected_row_data.get_untracked(), rows(&[1, 3]));

            selection.clear_selection();
            assert!(selection.selected_row_ids.get_untracked().is_empty());
            assert!(!selection.is_some_current_page_selected.get_untracked());
        });
    }

    #[test]
    fn test_page_change_keeps_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(rows(&[1, 2]));
            let selection = use_row_selection(page, RowIdFn::new(|row: &Row| format!("{}", row.id)));

            selection.select_rows(&["5"]);
            assert!(selection.selected_row_data.get_untracked().is_empty());

            page.set(rows(&[4, 5, 6]));
            assert_eq!(selection.selected_row_data.get_untracked(), rows(&[5]));
            assert!(selection.is_some_current_page_selected.get_untracked());

            selection.deselect_rows(&["5"]);
            assert!(selection.row_selection.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_empty_page_header_state() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(Vec::<Row>::new());
            let selection = use_row_selection_by_identity(page);
            selection.select_rows(&["1"]);
            assert!(!selection.is_all_current_page_selected.get_untracked());
            assert!(!selection.is_some_current_page_selected.get_untracked());
        });
    }

    #[test]
    fn test_selection_column_meta() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(rows(&[1]));
            let selection = use_row_selection_by_identity(page);
            let column = selection.get_selection_column(SelectionColumnOptions::default().with_size(32));
            assert_eq!(column.id(), "select");
            assert!(!column.meta.enable_sorting);
            assert_eq!(column.meta.size, Some(32));
        });
    }

    #[test]
    fn test_selection_column_classes() {
        let classes = selection_column_classes(&SelectionColumnOptions::default());
        assert_eq!(classes.header, "data-table__select-header flex items-center justify-center");
        assert_eq!(classes.cell, "data-table__select-cell flex items-center justify-center");
        assert!(classes.checkbox.starts_with("data-table__checkbox w-4 h-4"));

        let custom = SelectionColumnOptions::default()
            .with_checkbox_class("checkbox  data-table__checkbox")
            .with_cell_class("");
        let classes = selection_column_classes(&custom);
        assert_eq!(classes.checkbox, "data-table__checkbox checkbox");
        assert_eq!(classes.cell, "data-table__select-cell");
    }
}
