use contracts::shared::errors::ApiError;
use contracts::shared::notice::Notice;
use contracts::usecases::u501_spreadsheet_import::eta::{is_overdue, remaining_ms, size_mb, FINALIZING_MESSAGE};
use contracts::usecases::u501_spreadsheet_import::mapping::ColumnMapping;
use contracts::usecases::u501_spreadsheet_import::row_count::count_data_rows;
use contracts::usecases::u501_spreadsheet_import::{
    check_spreadsheet, estimate_upload_ms, format_duration, UploadMetrics,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{AbortController, File};

use super::api::{upload_spreadsheet, UploadReply};
use super::mapping_form::MappingForm;
use super::result_panel::{ResultPanel, UploadSummary};
use super::ticker::UploadTicker;
use crate::shared::config;
use crate::shared::date_utils::now_local;
use crate::shared::excel::read_excel_from_file;
use crate::shared::export::{download_bytes, XLSX_MIME};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::{use_notifier, NotifierHandle};

/// What one screen uploads and how
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Name used in report titles and file names
    pub chain_label: &'static str,
    /// Report title subject: `VENTAS`, `PRODUCTOS`, `TIPO MUEBLE`
    pub subject: &'static str,
    pub endpoint: String,
    pub max_mb: Option<u32>,
    /// Static template workbook served next to the app
    pub template_href: Option<&'static str>,
    /// Info toast once the upload runs past 1.2 × ETA
    pub overdue_notice: bool,
    /// Ask for the column mapping before sending
    pub with_mapping: bool,
    pub button_label: &'static str,
}

/// File picked and checked, waiting for confirmation
#[derive(Clone)]
struct PendingUpload {
    file: File,
    rows: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
struct Progress {
    file_name: String,
    eta_ms: u64,
    elapsed_ms: u64,
}

fn countdown_text(p: &Progress) -> String {
    let left = remaining_ms(p.eta_ms, p.elapsed_ms);
    if left == 0 {
        FINALIZING_MESSAGE.to_string()
    } else {
        format!("Tiempo restante estimado: {}", format_duration(left))
    }
}

fn report_reply(notifier: &NotifierHandle, reply: &UploadReply) {
    if let Some(wb) = &reply.workbook {
        if let Err(e) = download_bytes(&wb.bytes, XLSX_MIME, &wb.file_name) {
            notifier.error(e);
        }
    }
    let outcome = &reply.outcome;
    notifier.notify(
        Notice::success(outcome.summary_line())
            .titled("Archivo procesado")
            .with_life(6_000),
    );
    if outcome.has_failures() {
        notifier.notify(
            Notice::warn(format!(
                "{} código(s) no se pudieron procesar. Guarde el reporte de incidencias para ver el detalle.",
                outcome.errors.len().max(outcome.counts.con_error as usize)
            ))
            .with_life(10_000),
        );
    }
    if !outcome.warnings.is_empty() {
        let preview: Vec<&str> = outcome.warnings.iter().take(5).map(String::as_str).collect();
        notifier.notify(
            Notice::warn(preview.join("\n"))
                .titled(format!("Advertencias del servidor ({})", outcome.warnings.len()))
                .with_life(12_000),
        );
    }
}

#[component]
pub fn UploadPanel(
    options: UploadOptions,
    /// Called after a successful upload so the screen reloads
    on_uploaded: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifier();
    let options = StoredValue::new(options);

    let file_input = NodeRef::<leptos::html::Input>::new();
    let pending = RwSignal::new_local(None::<PendingUpload>);
    let mapping = RwSignal::new(ColumnMapping::default());
    let progress = RwSignal::new(None::<Progress>);
    let summary = RwSignal::new(None::<UploadSummary>);
    let reading = RwSignal::new(false);

    let ticker = StoredValue::new_local(None::<UploadTicker>);
    let controller = StoredValue::new_local(None::<AbortController>);
    let overdue_warned = StoredValue::new(false);

    // Teardown while uploading: stop the ticker and the request
    on_cleanup(move || {
        let _ = ticker.try_update_value(|t| *t = None);
        let _ = controller.try_update_value(|c| {
            if let Some(c) = c.take() {
                c.abort();
            }
        });
    });

    let pick_file = move |_| {
        if let Some(input) = file_input.get() {
            input.set_value("");
            input.click();
        }
    };

    let on_file_change = {
        let notifier = notifier.clone();
        move |_| {
            let Some(file) = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let max_mb = options.with_value(|o| o.max_mb);
            if let Err(e) = check_spreadsheet(&file.name(), file.size() as u64, max_mb) {
                notifier.api_error(&e);
                return;
            }
            reading.set(true);
            spawn_local(async move {
                let rows = match read_excel_from_file(&file).await {
                    Ok(grid) => Some(count_data_rows(&grid)),
                    Err(e) => {
                        log::warn!("row count unavailable for {}: {}", file.name(), e);
                        None
                    }
                };
                let _ = reading.try_set(false);
                let _ = pending.try_set(Some(PendingUpload { file, rows }));
            });
        }
    };

    let start_upload = {
        let notifier = notifier.clone();
        move || {
            let Some(PendingUpload { file, rows }) = pending.get_untracked() else {
                return;
            };
            pending.set(None);

            let abort = match AbortController::new() {
                Ok(c) => c,
                Err(e) => {
                    notifier.error(format!("No se pudo iniciar la carga: {:?}", e));
                    return;
                }
            };
            let opts = options.get_value();
            let size_bytes = file.size() as u64;
            let eta_ms = estimate_upload_ms(size_bytes);
            let file_name = file.name();
            let started_at = now_local();
            let fields = if opts.with_mapping {
                mapping.get_untracked().form_params()
            } else {
                Vec::new()
            };
            let timeout_ms = config::current().upload.timeout_ms;

            log::info!(
                "Upload started: {} ({} bytes, {} rows), ETA {} ms",
                file_name,
                size_bytes,
                rows.map(|r| r.to_string()).unwrap_or_else(|| "?".into()),
                eta_ms
            );

            summary.set(None);
            overdue_warned.set_value(false);
            progress.set(Some(Progress {
                file_name: file_name.clone(),
                eta_ms,
                elapsed_ms: 0,
            }));
            controller.set_value(Some(abort.clone()));

            let tick_notifier = notifier.clone();
            let overdue_notice = opts.overdue_notice;
            ticker.set_value(Some(UploadTicker::start(move |elapsed| {
                progress.update(|p| {
                    if let Some(p) = p {
                        p.elapsed_ms = elapsed;
                    }
                });
                if overdue_notice && !overdue_warned.get_value() && is_overdue(eta_ms, elapsed) {
                    overdue_warned.set_value(true);
                    tick_notifier.info("La carga está tardando más de lo estimado. El servidor sigue procesando el archivo.");
                }
            })));

            let notifier = notifier.clone();
            spawn_local(async move {
                let result = upload_spreadsheet(&opts.endpoint, &file, &fields, &abort, timeout_ms).await;

                let elapsed_ms = ticker
                    .try_with_value(|t| t.as_ref().map(UploadTicker::elapsed_ms))
                    .flatten()
                    .unwrap_or(0);
                let _ = ticker.try_update_value(|t| *t = None);
                let _ = controller.try_update_value(|c| *c = None);
                let _ = progress.try_set(None);

                match result {
                    Ok(reply) => {
                        log::info!("Upload settled: {} in {} ms", file_name, elapsed_ms);
                        report_reply(&notifier, &reply);
                        let metrics = UploadMetrics {
                            file_name,
                            size_bytes,
                            started_at,
                            finished_at: now_local(),
                            eta_ms,
                            elapsed_ms,
                            rows_read: rows,
                        };
                        let _ = summary.try_set(Some(UploadSummary {
                            metrics,
                            outcome: reply.outcome,
                        }));
                        on_uploaded.run(());
                    }
                    Err(ApiError::Cancelled) => {
                        log::info!("Upload cancelled: {}", file_name);
                        notifier.api_error(&ApiError::Cancelled);
                    }
                    Err(e) => {
                        log::error!("Upload failed: {}: {}", file_name, e);
                        notifier.api_error(&e);
                    }
                }
            });
        }
    };

    let cancel_upload = move |_| {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.abort();
            }
        });
    };

    let busy = move || progress.with(Option::is_some) || reading.get();
    let opts = options.get_value();
    let chain_label = opts.chain_label;
    let subject = opts.subject;

    view! {
        <div class="upload-panel">
            <div class="upload-panel__actions">
                <input
                    node_ref=file_input
                    type="file"
                    accept=".xlsx,.xls"
                    style="display: none;"
                    on:change=on_file_change
                />
                <button class="btn btn-primary" on:click=pick_file disabled=busy>
                    {icon("upload")}
                    {opts.button_label}
                </button>
                {opts.template_href.map(|href| view! {
                    <a class="btn btn-link" href=href download="">
                        {icon("download")}
                        "Descargar plantilla"
                    </a>
                })}
            </div>

            {move || progress.get().map(|p| view! {
                <div class="upload-progress" role="status">
                    <div class="upload-progress__title">
                        {icon("clock")}
                        <span>{format!("Subiendo {}…", p.file_name)}</span>
                    </div>
                    <div class="upload-progress__bar">
                        <div
                            class="upload-progress__fill"
                            style=format!(
                                "width: {:.0}%;",
                                (p.elapsed_ms as f64 / p.eta_ms.max(1) as f64 * 100.0).min(100.0)
                            )
                        ></div>
                    </div>
                    <div class="upload-progress__times">
                        <span>{countdown_text(&p)}</span>
                        <span>{format!("Transcurrido: {}", format_duration(p.elapsed_ms))}</span>
                    </div>
                    <button class="btn btn-secondary" on:click=cancel_upload>
                        {icon("x")}
                        "Cancelar carga"
                    </button>
                </div>
            })}

            {move || summary.get().map(|s| view! {
                <ResultPanel
                    chain_label=chain_label
                    subject=subject
                    summary=s
                    on_close=Callback::new(move |_| summary.set(None))
                />
            })}

            {move || pending.get().map(|p| {
                let start = start_upload.clone();
                let size = p.file.size() as u64;
                let with_mapping = options.with_value(|o| o.with_mapping);
                view! {
                    <Modal
                        title="Confirmar carga".to_string()
                        on_close=Callback::new(move |_| pending.set(None))
                        class=if with_mapping { "modal--wide" } else { "" }
                    >
                        <div class="upload-confirm">
                            <p>{format!("Archivo: {}", p.file.name())}</p>
                            <p>{format!("Tamaño: {:.2} MB", size_mb(size))}</p>
                            <p>{format!(
                                "Filas detectadas: {}",
                                p.rows.map(|r| r.to_string()).unwrap_or_else(|| "N/D".into())
                            )}</p>
                            <p>{format!("Tiempo estimado: {}", format_duration(estimate_upload_ms(size)))}</p>
                        </div>
                        {with_mapping.then(|| view! { <MappingForm mapping=mapping /> })}
                        <div class="details-actions">
                            <button class="btn btn-primary" on:click=move |_| start()>
                                {icon("upload")}
                                "Subir"
                            </button>
                            <button class="btn btn-secondary" on:click=move |_| pending.set(None)>
                                "Cancelar"
                            </button>
                        </div>
                    </Modal>
                }
            })}
        </div>
    }
}
