//! Компонент чекбокса в заголовке таблицы для выбора всех строк страницы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || selection.header_state())
//!     on_toggle=Callback::new(move |_| selection.toggle_all_current_page())
//! />
//! ```

use contracts::shared::selection::CheckboxState;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Компонент чекбокса в заголовке таблицы
///
/// Автоматически:
/// - Показывает три состояния: unchecked, checked, indeterminate
/// - indeterminate выставляется после рендера, когда input уже в DOM
/// - Любой клик передаётся в `on_toggle`, решение принимает владелец состояния
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние чекбокса для текущей страницы
    #[prop(into)]
    state: Signal<CheckboxState>,

    /// Callback при клике
    on_toggle: Callback<()>,

    /// CSS-класс input
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate - только DOM-свойство, атрибутом его не задать
    Effect::new(move |_| {
        let is_indeterminate = state.get().is_indeterminate();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <input
            node_ref=checkbox_ref
            type="checkbox"
            class=class
            aria-label="Select all rows on this page"
            prop:checked=move || state.get().is_checked()
            on:change=move |_| on_toggle.run(())
        />
    }
}
