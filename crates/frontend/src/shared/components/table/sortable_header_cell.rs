//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     column_id="amount"
//!     sort=Signal::derive(move || sort.get())
//!     on_sort=Callback::new(move |column: String| request_sort(column))
//! >
//!     "Сумма"
//! </SortableHeaderCell>
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::sort::SortState;
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Добавляет индикатор сортировки (▲▼)
/// - По клику сообщает id колонки в `on_sort`
#[component]
pub fn SortableHeaderCell(
    /// Id колонки
    #[prop(into)]
    column_id: String,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<Option<SortState>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Inline-стиль ширины
    #[prop(optional, into)]
    style: String,

    children: Children,
) -> impl IntoView {
    let column_for_click = column_id.clone();
    let column_for_indicator = column_id.clone();
    let column_for_class = column_id;

    view! {
        <TableHeaderCell resizable=false attr:style=style>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(column_for_click.clone())
            >
                {children()}
                <span class=move || sort.with(|s| get_sort_class(s.as_ref(), &column_for_class))>
                    {move || sort.with(|s| get_sort_indicator(s.as_ref(), &column_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
