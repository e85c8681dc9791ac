use chrono::NaiveDateTime;

use super::eta::{format_hhmmss, size_mb};
use super::response::UploadOutcome;

const RULE: &str = "==============================================";

/// Timing and file facts of one finished upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadMetrics {
    pub file_name: String,
    pub size_bytes: u64,
    pub started_at: NaiveDateTime,
    pub finished_at: NaiveDateTime,
    pub eta_ms: u64,
    pub elapsed_ms: u64,
    /// Data rows counted in the browser before sending
    pub rows_read: Option<usize>,
}

/// Text reports offered after an upload settles
#[derive(Debug, Clone)]
pub struct IncidentReport<'a> {
    /// Upper-cased into the title, lower-cased into file names
    pub chain: &'a str,
    /// What was loaded, `VENTAS` unless set with [`IncidentReport::about`]
    pub subject: &'a str,
    pub metrics: &'a UploadMetrics,
    pub outcome: &'a UploadOutcome,
}

fn or_nd<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/D".to_string())
}

impl<'a> IncidentReport<'a> {
    pub fn new(chain: &'a str, metrics: &'a UploadMetrics, outcome: &'a UploadOutcome) -> Self {
        Self {
            chain,
            subject: "VENTAS",
            metrics,
            outcome,
        }
    }

    pub fn about(mut self, subject: &'a str) -> Self {
        self.subject = subject;
        self
    }

    fn rows_read(&self) -> String {
        match self.metrics.rows_read {
            Some(n) => n.to_string(),
            None => or_nd(self.outcome.counts.filas_leidas),
        }
    }

    fn file_slug(&self) -> String {
        self.chain.to_lowercase().replace(' ', "_")
    }

    fn timestamp(&self) -> String {
        self.metrics.finished_at.format("%Y-%m-%d-%H-%M-%S").to_string()
    }

    pub fn incident_file_name(&self) -> String {
        format!("incidencias_{}_{}.txt", self.file_slug(), self.timestamp())
    }

    pub fn log_file_name(&self) -> String {
        format!("log_carga_{}_{}.txt", self.file_slug(), self.timestamp())
    }

    /// Incident report: header with timings and counts, then per-code detail
    pub fn render(&self) -> String {
        let m = self.metrics;
        let c = &self.outcome.counts;
        let errors = &self.outcome.errors;
        let successes = &self.outcome.successes;

        let mut lines = vec![
            format!(
                "==== INCIDENCIAS DE CARGA — {} {} ====",
                self.subject.to_uppercase(),
                self.chain.to_uppercase()
            ),
            format!("Fecha: {}", m.started_at.format("%d/%m/%Y")),
            format!("Hora inicio: {}", m.started_at.format("%H:%M:%S")),
            format!("Hora fin: {}", m.finished_at.format("%H:%M:%S")),
            format!("Archivo: {}", if m.file_name.is_empty() { "N/D" } else { m.file_name.as_str() }),
            format!("Tamaño: {:.2} MB ({} bytes)", size_mb(m.size_bytes), m.size_bytes),
            format!("ETA (estimado): {} ({} ms)", format_hhmmss(m.eta_ms), m.eta_ms),
            format!("Tiempo real: {} ({} ms)", format_hhmmss(m.elapsed_ms), m.elapsed_ms),
            format!("Filas leídas: {}", self.rows_read()),
            format!("Filas procesadas: {}", c.total),
            format!("Insertadas: {}", c.insertadas),
            format!("Actualizadas: {}", c.actualizadas),
            format!("Ignoradas: {}", c.ignoradas),
            format!("Con error: {}", c.con_error),
            format!("Códigos exitosos: {}", successes.len()),
            format!("Códigos no encontrados: {}", errors.len()),
            String::new(),
        ];

        if errors.is_empty() && successes.is_empty() {
            lines.push("SIN DETALLE DE CÓDIGOS. El backend no devolvió listas de éxito o error.".into());
            lines.push(String::new());
        }
        if !successes.is_empty() {
            lines.push("---- DETALLE CÓDIGOS EXITOSOS ----".into());
            lines.extend(successes.iter().map(|code| format!("OK: {}", code)));
            lines.push(String::new());
        }

        lines.push("---- DETALLE ERRORES / NO ENCONTRADOS ----".into());
        if errors.is_empty() {
            lines.push("(sin incidencias)".into());
        } else {
            lines.extend(
                errors
                    .iter()
                    .map(|e| format!("(el codigo : {}) - {}", e.codigo, e.motivo)),
            );
        }
        lines.push(String::new());

        if !self.outcome.warnings.is_empty() {
            lines.push("---- ADVERTENCIAS DEL SERVIDOR ----".into());
            lines.extend(self.outcome.warnings.iter().cloned());
            lines.push(String::new());
        }

        lines.push(RULE.into());
        lines.join("\n")
    }

    /// Machine-friendly log with throughput figures
    pub fn render_detailed_log(&self) -> String {
        let m = self.metrics;
        let c = &self.outcome.counts;
        let elapsed_sec = ((m.elapsed_ms + 500) / 1000).max(1) as f64;
        let (per_sec, per_min) = if c.total == 0 {
            (0.0, 0.0)
        } else {
            (c.total as f64 / elapsed_sec, c.total as f64 * 60.0 / elapsed_sec)
        };

        let mut lines = vec![
            "LOG_CARGA_DETALLADO_TEMPLATE".to_string(),
            format!("CADENA: {}", self.chain.to_uppercase()),
            format!("ARCHIVO: {}", if m.file_name.is_empty() { "N/D" } else { m.file_name.as_str() }),
            format!("TAMANO_MB: {:.2}", size_mb(m.size_bytes)),
            format!("TIEMPO_ESTIMADO: {}s", (m.eta_ms + 500) / 1000),
            format!("TIEMPO_TRANSCURRIDO_REAL: {}s", (m.elapsed_ms + 500) / 1000),
            String::new(),
            "RESUMEN_FILAS:".to_string(),
            format!("  LEIDAS: {}", self.rows_read()),
            format!("  INSERTADAS: {}", c.insertadas),
            format!("  ACTUALIZADAS: {}", c.actualizadas),
            format!("  IGNORADAS: {}", c.ignoradas),
            format!("  CON_ERROR: {}", c.con_error),
            format!("  TOTAL: {}", c.total),
            String::new(),
            "RENDIMIENTO:".to_string(),
            format!("  THROUGHPUT_filas_por_seg: {:.2}", per_sec),
            format!("  THROUGHPUT_filas_por_min: {:.2}", per_min),
            String::new(),
            "INCIDENCIAS:".to_string(),
        ];

        let incidents: Vec<String> = self
            .outcome
            .errors
            .iter()
            .map(|e| format!("(el codigo : {}) - {}", e.codigo, e.motivo))
            .chain(self.outcome.warnings.iter().cloned())
            .collect();
        if incidents.is_empty() {
            lines.push("  (sin incidencias)".into());
        } else {
            lines.extend(incidents.into_iter().map(|l| format!("  {}", l)));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_spreadsheet_import::response::{CodeIssue, UploadCounts};
    use chrono::NaiveDate;

    fn metrics() -> UploadMetrics {
        let day = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        UploadMetrics {
            file_name: "ventas_enero.xlsx".into(),
            size_bytes: 2 * 1024 * 1024,
            started_at: day.and_hms_opt(9, 0, 0).unwrap(),
            finished_at: day.and_hms_opt(9, 1, 30).unwrap(),
            eta_ms: 27_000,
            elapsed_ms: 90_000,
            rows_read: Some(180),
        }
    }

    #[test]
    fn failed_code_appears_as_detail_line() {
        let outcome = UploadOutcome {
            counts: UploadCounts { insertadas: 179, con_error: 1, total: 180, ..UploadCounts::default() },
            errors: vec![CodeIssue { codigo: "A1".into(), motivo: "x".into() }],
            ..UploadOutcome::default()
        };
        let m = metrics();
        let text = IncidentReport::new("Fybeca", &m, &outcome).render();
        assert!(text.contains("(el codigo : A1) - x"));
        assert!(text.starts_with("==== INCIDENCIAS DE CARGA — VENTAS FYBECA ===="));
        assert!(text.contains("Tamaño: 2.00 MB (2097152 bytes)"));
        assert!(text.contains("ETA (estimado): 00:00:27 (27000 ms)"));
        assert!(text.contains("Filas leídas: 180"));
        assert!(text.contains("Códigos no encontrados: 1"));
        assert!(!text.contains("SIN DETALLE"));
    }

    #[test]
    fn empty_lists_say_so() {
        let outcome = UploadOutcome::default();
        let m = UploadMetrics { rows_read: None, ..metrics() };
        let text = IncidentReport::new("Deprati", &m, &outcome).render();
        assert!(text.contains("SIN DETALLE DE CÓDIGOS."));
        assert!(text.contains("(sin incidencias)"));
        assert!(text.contains("Filas leídas: N/D"));
        assert!(text.ends_with(RULE));
    }

    #[test]
    fn subject_names_what_was_loaded() {
        let outcome = UploadOutcome::default();
        let m = metrics();
        let text = IncidentReport::new("Fybeca", &m, &outcome).about("Productos").render();
        assert!(text.starts_with("==== INCIDENCIAS DE CARGA — PRODUCTOS FYBECA ===="));
    }

    #[test]
    fn detailed_log_has_throughput_and_file_names() {
        let outcome = UploadOutcome {
            counts: UploadCounts { total: 180, ..UploadCounts::default() },
            warnings: vec!["Fila 3: sin marca".into()],
            ..UploadOutcome::default()
        };
        let m = metrics();
        let report = IncidentReport::new("Template General", &m, &outcome);
        let log = report.render_detailed_log();
        assert!(log.contains("THROUGHPUT_filas_por_seg: 2.00"));
        assert!(log.contains("THROUGHPUT_filas_por_min: 120.00"));
        assert!(log.contains("  Fila 3: sin marca"));
        assert_eq!(
            report.incident_file_name(),
            "incidencias_template_general_2025-02-03-09-01-30.txt"
        );
        assert_eq!(report.log_file_name(), "log_carga_template_general_2025-02-03-09-01-30.txt");
    }
}
