use crate::shared::config::use_table_config;
use crate::shared::icons::icon;
use contracts::shared::pagination::{PageItem, PaginationMeta};
use leptos::prelude::*;

/// Панель пагинации для таблицы с серверной пагинацией
///
/// Страницы нумеруются с 1, как в `PaginationMeta` сервера.
#[component]
pub fn DataTablePagination(
    /// Метаданные показанной страницы
    #[prop(into)]
    meta: Signal<PaginationMeta>,

    /// Смена страницы (номер с 1)
    on_page_change: Callback<usize>,

    /// Смена размера страницы. Обычно после неё возвращаются на первую страницу.
    on_page_size_change: Callback<usize>,

    /// Варианты размера страницы (по умолчанию из настроек таблицы)
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    /// Кнопок страниц с каждой стороны от текущей (по умолчанию из настроек таблицы)
    #[prop(optional)]
    siblings: Option<usize>,
) -> impl IntoView {
    let config = use_table_config();
    let siblings = siblings.unwrap_or(config.pagination_siblings);
    let page_size_opts = page_size_options.unwrap_or_else(|| config.effective_page_size_options());

    let go_to = move |page: usize| {
        let (current, last) = meta.with_untracked(|m| (m.current_page, m.last_page));
        if page >= 1 && page <= last && page != current {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || meta.with(|m| m.summary())}</span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(1)
                disabled=move || !meta.with(|m| m.has_previous())
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(meta.with_untracked(|m| m.current_page.saturating_sub(1)))
                disabled=move || !meta.with(|m| m.has_previous())
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = meta.with(|m| m.current_page);
                meta.with(|m| m.page_window(siblings))
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => view! {
                            <button
                                class=if page == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                aria-current=if page == current { Some("page") } else { None }
                                on:click=move |_| go_to(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| go_to(meta.with_untracked(|m| m.current_page.saturating_add(1)))
                disabled=move || !meta.with(|m| m.has_next())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(meta.with_untracked(|m| m.last_page))
                disabled=move || !meta.with(|m| m.has_next())
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<usize>() {
                        Ok(size) if size > 0 => on_page_size_change.run(size),
                        _ => log::warn!("pagination: ignoring invalid page size"),
                    }
                }
                prop:value=move || meta.with(|m| m.per_page.to_string())
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || meta.with(|m| m.per_page == size)>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
