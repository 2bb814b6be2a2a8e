//! Тёмная тема для компонентов таблицы
//!
//! Следит за системным `prefers-color-scheme` и переносит текущее значение
//! в класс `dark` на `<html>`. Вне браузера значение остаётся `false`,
//! DOM не трогается.

use contracts::shared::theme::{ColorScheme, DARK_CLASS, PREFERS_DARK_QUERY};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Состояние тёмной темы
#[derive(Clone, Copy)]
pub struct DarkMode {
    /// Текущее значение
    pub is_dark_mode: RwSignal<bool>,
}

impl DarkMode {
    pub fn toggle_dark_mode(&self) {
        self.is_dark_mode.update(|dark| *dark = !*dark);
    }

    pub fn set_dark_mode(&self, dark: bool) {
        self.is_dark_mode.set(dark);
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.is_dark_mode.get())
    }
}

fn prefers_dark_query() -> Option<web_sys::MediaQueryList> {
    window()?.match_media(PREFERS_DARK_QUERY).ok().flatten()
}

/// Добавляет или убирает класс `dark` на `<html>`
fn apply_color_scheme(scheme: ColorScheme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        Some(root) => root,
        None => return,
    };

    let classes = root.class_list();
    let result = if scheme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(err) = result {
        log::warn!("dark mode: failed to update <html> class list: {:?}", err);
    }
}

/// Тёмная тема, синхронизированная с системной настройкой
pub fn use_dark_mode() -> DarkMode {
    let is_dark_mode = RwSignal::new(false);

    if let Some(query) = prefers_dark_query() {
        is_dark_mode.set(query.matches());

        let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| {
                // сигнал мог быть уничтожен вместе с владельцем
                _ = is_dark_mode.try_set(event.matches());
            },
        );
        match query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
            Ok(()) => on_change.forget(),
            Err(err) => log::warn!("dark mode: cannot listen to {}: {:?}", PREFERS_DARK_QUERY, err),
        }
    }

    Effect::new(move |_| {
        apply_color_scheme(ColorScheme::from_dark(is_dark_mode.get()));
    });

    DarkMode { is_dark_mode }
}

/// Передаёт состояние темы дочерним компонентам
#[component]
pub fn DarkModeProvider(children: Children) -> impl IntoView {
    provide_context(use_dark_mode());
    children()
}

/// Состояние темы из контекста, паникует без `DarkModeProvider`
pub fn expect_dark_mode() -> DarkMode {
    use_context::<DarkMode>().expect("DarkMode not found. Wrap your app with DarkModeProvider.")
}

/// Кнопка переключения светлой и тёмной темы
#[component]
pub fn DarkModeToggle(#[prop(optional, into)] class: String) -> impl IntoView {
    let ctx = expect_dark_mode();

    view! {
        <button
            class=class
            title=move || if ctx.is_dark_mode.get() { "Light theme" } else { "Dark theme" }
            on:click=move |_| ctx.toggle_dark_mode()
        >
            {move || if ctx.is_dark_mode.get() {
                crate::shared::icons::icon("sun")
            } else {
                crate::shared::icons::icon("moon")
            }}
        </button>
    }
}
