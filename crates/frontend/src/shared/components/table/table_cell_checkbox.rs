//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     checked=Signal::derive(move || selection.is_row_selected(&id))
//!     on_toggle=Callback::new(move |_| selection.toggle_row_selection(&id))
//! />
//! ```

use leptos::prelude::*;

/// Компонент чекбокса в ячейке таблицы
///
/// Останавливает propagation клика, чтобы не срабатывал клик по строке.
#[component]
pub fn TableCellCheckbox(
    /// Выбрана ли строка
    #[prop(into)]
    checked: Signal<bool>,

    /// Callback при изменении
    on_toggle: Callback<()>,

    /// CSS-класс input
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class=class
            aria-label="Select row"
            prop:checked=move || checked.get()
            on:click=|e| e.stop_propagation()
            on:change=move |_| on_toggle.run(())
        />
    }
}
