//! Универсальная таблица данных
//!
//! Рендерит текущую страницу строк по списку `ColumnDef`. Сортировку
//! таблица не выполняет: клик по сортируемому заголовку только сообщает
//! новое `SortState` наружу, данные пересортировывает сервер.
//!
//! # Примеры
//!
//! ```rust,ignore
//! let selection = use_row_selection_by_identity(rows);
//! let columns = vec![
//!     selection.get_selection_column(SelectionColumnOptions::default()),
//!     ColumnDef::text("name", "Name", |u: &User| u.name.clone()).sortable(),
//! ];
//!
//! <DataTable
//!     rows=rows
//!     columns=columns
//!     row_id=RowIdFn::from_identity()
//!     sort=sort
//!     on_sort=Callback::new(move |s| set_sort.set(Some(s)))
//! />
//! ```

use super::column_def::ColumnDef;
use super::sortable_header_cell::SortableHeaderCell;
use contracts::shared::selection::RowIdFn;
use contracts::shared::sort::SortState;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

const DEFAULT_EMPTY_TEXT: &str = "No data";

#[component]
pub fn DataTable<T>(
    /// Строки текущей страницы
    #[prop(into)]
    rows: Signal<Vec<T>>,

    /// Колонки в порядке отображения
    columns: Vec<ColumnDef<T>>,

    /// Ключ строки для `<For>`
    row_id: RowIdFn<T>,

    /// Текущая сортировка
    #[prop(optional, into)]
    sort: MaybeProp<SortState>,

    /// Callback при клике на сортируемый заголовок
    #[prop(optional)]
    on_sort: Option<Callback<SortState>>,

    /// Идёт загрузка страницы
    #[prop(optional, into)]
    loading: MaybeProp<bool>,

    /// Текст для пустой страницы
    #[prop(optional, into)]
    empty_text: Option<String>,

    #[prop(optional, into)]
    class: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let column_count = columns.len();
    let columns = StoredValue::new(columns);
    let empty_text = empty_text.unwrap_or_else(|| DEFAULT_EMPTY_TEXT.to_string());
    let sort_signal = Signal::derive(move || sort.get());

    let request_sort = Callback::new(move |column: String| {
        let next = sort_signal.with_untracked(|current| SortState::next(current.as_ref(), &column));
        log::debug!(
            "data table: sort by {} ({})",
            next.column,
            if next.ascending { "asc" } else { "desc" }
        );
        if let Some(on_sort) = on_sort {
            on_sort.run(next);
        }
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let style = col.meta.width_style().unwrap_or_default();
                let header = Arc::clone(&col.header);
                if col.meta.enable_sorting && on_sort.is_some() {
                    view! {
                        <SortableHeaderCell
                            column_id=col.id().to_string()
                            sort=sort_signal
                            on_sort=request_sort
                            style=style
                        >
                            {header()}
                        </SortableHeaderCell>
                    }
                    .into_any()
                } else {
                    view! {
                        <TableHeaderCell resizable=false attr:style=style>
                            {header()}
                        </TableHeaderCell>
                    }
                    .into_any()
                }
            })
            .collect_view()
    });

    view! {
        <div class=move || {
            if loading.get().unwrap_or(false) { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }
        }>
            <Table class=class attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>
                    <Show when=move || rows.with(|r| r.is_empty())>
                        <tr class="data-table__empty">
                            <td colspan=column_count.to_string()>{empty_text.clone()}</td>
                        </tr>
                    </Show>
                    <For
                        each=move || rows.get()
                        key=move |row: &T| row_id.id_of(row)
                        children=move |row: T| {
                            let cells = columns.with_value(|cols| {
                                cols.iter()
                                    .map(|col| {
                                        let style = col.meta.width_style().unwrap_or_default();
                                        let cell = Arc::clone(&col.cell);
                                        let row = row.clone();
                                        view! {
                                            <TableCell attr:style=style>{cell(&row)}</TableCell>
                                        }
                                    })
                                    .collect_view()
                            });
                            view! { <TableRow>{cells}</TableRow> }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
