//! Helpers shared by the list screens: search box, match highlighting,
//! spreadsheet export and server report downloads.

use contracts::shared::errors::ApiError;
use contracts::shared::export::{build_table, Exportable};
use contracts::shared::list::{max_selection_warning, SelectionChange};
use contracts::shared::notice::Notice;
use contracts::shared::search::normalize_query;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::excel::write_export_table;
use super::export::{download_bytes, XLSX_MIME};
use super::http::get_binary;
use super::icons::icon;
use super::toast::NotifierHandle;

pub const NOTHING_TO_EXPORT: &str = "No hay datos para exportar";
pub const REPORT_READY: &str = "Reporte generado correctamente";

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Highlights case-insensitive matches of `query` inside `text`
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let Some(needle) = normalize_query(query) else {
        return view! { <span>{text.to_string()}</span> }.into_any();
    };

    let lower = text.to_lowercase();
    // Lowercasing may change byte lengths outside ASCII
    if lower.len() != text.len() || !lower.contains(&needle) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    while let Some(pos) = lower[last..].find(&needle) {
        let start = last + pos;
        let end = start + needle.len();
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied search text
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    // Clearing from outside (e.g. "Limpiar filtros") empties the box too
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() {
            input_value.set(String::new());
        }
    });

    let handle_input = move |text: String| {
        input_value.set(text.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(text));
        // Replacing the handle cancels the previous timer
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                class=move || {
                    if normalize_query(&value.get()).is_some() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Limpiar">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

pub fn notify_all(notifier: &NotifierHandle, notices: Vec<Notice>) {
    for notice in notices {
        notifier.notify(notice);
    }
}

/// Warns when a selection change hit the cap
pub fn warn_if_truncated(notifier: &NotifierHandle, change: SelectionChange, max: Option<usize>) {
    if let (true, Some(max)) = (change.truncated, max) {
        notifier.warn(max_selection_warning(max));
    }
}

/// Writes `records` to an `.xlsx` through SheetJS
pub fn export_records<T: Exportable>(
    notifier: &NotifierHandle,
    sheet_name: &str,
    records: &[T],
    file_name: &str,
) {
    if records.is_empty() {
        notifier.warn(NOTHING_TO_EXPORT);
        return;
    }
    let table = build_table(sheet_name, records);
    match write_export_table(&table, file_name) {
        Ok(()) => {
            log::info!("Exported {} rows to {}", table.len(), file_name);
            notifier.success(format!("Exportados {} registros a {}", table.len(), file_name));
        }
        Err(e) => {
            log::error!("Export failed: {}", e);
            notifier.error(format!("No se pudo exportar: {}", e));
        }
    }
}

/// Downloads a report generated by the server
pub async fn download_report(url: &str, fallback_name: &str) -> Result<String, ApiError> {
    let reply = get_binary(url).await?;
    let name = reply.file_name.unwrap_or_else(|| fallback_name.to_string());
    let mime = if reply.content_type.is_empty() {
        XLSX_MIME.to_string()
    } else {
        reply.content_type
    };
    download_bytes(&reply.bytes, &mime, &name).map_err(ApiError::Decode)?;
    Ok(name)
}
