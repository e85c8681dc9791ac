use contracts::usecases::u501_spreadsheet_import::{format_duration, IncidentReport, UploadMetrics, UploadOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::export::{save_text_file, SaveOutcome};
use crate::shared::icons::icon;
use crate::shared::toast::use_notifier;

/// Last finished upload, kept until closed or replaced
#[derive(Debug, Clone)]
pub struct UploadSummary {
    pub metrics: UploadMetrics,
    pub outcome: UploadOutcome,
}

#[derive(Clone, Copy)]
enum ReportKind {
    Incidents,
    DetailedLog,
}

#[component]
pub fn ResultPanel(
    chain_label: &'static str,
    /// Report title subject, e.g. `VENTAS`
    subject: &'static str,
    summary: UploadSummary,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifier();
    let summary = StoredValue::new(summary);

    let save = move |kind: ReportKind| {
        let (text, name) = summary.with_value(|s| {
            let report = IncidentReport::new(chain_label, &s.metrics, &s.outcome).about(subject);
            match kind {
                ReportKind::Incidents => (report.render(), report.incident_file_name()),
                ReportKind::DetailedLog => (report.render_detailed_log(), report.log_file_name()),
            }
        });
        let notifier = notifier.clone();
        spawn_local(async move {
            match save_text_file(&text, &name).await {
                Ok(SaveOutcome::NotSaved) => notifier.info("Archivo no guardado"),
                Ok(_) => notifier.success(format!("Archivo guardado: {}", name)),
                Err(e) => notifier.error(e),
            }
        });
    };
    let save_incidents = save.clone();

    let (counts, metrics, errors, warnings) = summary.with_value(|s| {
        (
            s.outcome.counts.clone(),
            s.metrics.clone(),
            s.outcome.errors.len(),
            s.outcome.warnings.len(),
        )
    });

    view! {
        <div class="upload-result">
            <div class="upload-result__header">
                <strong>{format!("Resultado de la carga: {}", metrics.file_name)}</strong>
                <button class="button button--icon" on:click=move |_| on_close.run(()) title="Cerrar">
                    {icon("x")}
                </button>
            </div>
            <div class="upload-result__counts">
                <span>{format!("Insertadas: {}", counts.insertadas)}</span>
                <span>{format!("Actualizadas: {}", counts.actualizadas)}</span>
                <span>{format!("Ignoradas: {}", counts.ignoradas)}</span>
                <span>{format!("Con error: {}", counts.con_error)}</span>
                <span>{format!("Códigos no encontrados: {}", errors)}</span>
                <span>{format!("Advertencias: {}", warnings)}</span>
            </div>
            <div class="upload-result__timing">
                {format!(
                    "Tiempo real: {} · Estimado: {}",
                    format_duration(metrics.elapsed_ms),
                    format_duration(metrics.eta_ms),
                )}
            </div>
            <div class="upload-result__actions">
                <button class="btn btn-secondary" on:click=move |_| save_incidents(ReportKind::Incidents)>
                    {icon("file-text")}
                    "Guardar incidencias (.txt)"
                </button>
                <button class="btn btn-secondary" on:click=move |_| save(ReportKind::DetailedLog)>
                    {icon("file-text")}
                    "Guardar log detallado (.txt)"
                </button>
            </div>
        </div>
    }
}
