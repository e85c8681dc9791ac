use crate::shared::icons::icon;
use contracts::shared::list::pagination::{Pagination, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// First/previous/next/last buttons, "page / pages (rows)" and a page size select
#[component]
pub fn PaginationControls(
    /// Page and page size of the list
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Rows left after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Defaults to [`PAGE_SIZE_OPTIONS`]
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());
    let at_start = move || pagination.with(Pagination::is_first);
    let at_end = move || !pagination.with(|p| p.has_next(total_count.get()));
    let go = move |target: fn(&Pagination, usize) -> usize| {
        let page = pagination.with(|p| target(p, total_count.get()));
        if page != pagination.with(|p| p.page) {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(|_, _| 0)
                disabled=at_start
                title="Primera página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(|p, _| p.page.saturating_sub(1))
                disabled=at_start
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || pagination.with(|p| p.summary(total_count.get()))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(|p, total| (p.page + 1).min(p.last_page(total)))
                disabled=at_end
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(Pagination::last_page)
                disabled=at_end
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(PAGE_SIZE_OPTIONS[0]);
                    on_page_size_change.run(size);
                }
                prop:value=move || pagination.with(|p| p.page_size.to_string())
            >
                {page_size_opts.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || pagination.with(|p| p.page_size == size)
                        >
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
