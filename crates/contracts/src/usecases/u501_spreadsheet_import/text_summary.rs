use once_cell::sync::Lazy;
use regex::Regex;

use super::response::UploadCounts;

static PAIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z_]+)\s*=\s*(.+)$").expect("valid key=value regex"));

/// Counts from the `[RESUMEN]` block of a plain-text upload reply:
///
/// ```text
/// [RESUMEN]
/// filasLeidas=120
/// insertados=100
/// ----
/// ```
pub fn parse_text_summary(text: &str) -> UploadCounts {
    let mut counts = UploadCounts::default();
    let mut in_summary = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with("[RESUMEN]") {
            in_summary = true;
            continue;
        }
        if !in_summary {
            continue;
        }
        if line.starts_with("----") {
            in_summary = false;
            continue;
        }
        let Some(caps) = PAIR_RE.captures(line) else {
            continue;
        };
        let value = caps[2].trim().parse::<f64>().ok().map(|v| v.max(0.0) as u64);
        match caps[1].to_ascii_lowercase().as_str() {
            "filasleidas" => counts.filas_leidas = value,
            "insertados" => counts.insertadas = value.unwrap_or(0),
            "actualizados" => counts.actualizadas = value.unwrap_or(0),
            "omitidos" => counts.ignoradas = value.unwrap_or(0),
            "errores" => counts.con_error = value.unwrap_or(0),
            _ => {}
        }
    }

    counts.total = counts.insertadas + counts.actualizadas + counts.ignoradas + counts.con_error;
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_only_the_summary_block() {
        let text = "Proceso terminado\n\
                    insertados=999\n\
                    [RESUMEN]\n\
                    filasLeidas = 120\n\
                    insertados=100\n\
                    actualizados=15\n\
                    omitidos=3\n\
                    errores=2\n\
                    ----\n\
                    errores=50\n";
        let counts = parse_text_summary(text);
        assert_eq!(counts.filas_leidas, Some(120));
        assert_eq!(counts.insertadas, 100);
        assert_eq!(counts.con_error, 2);
        assert_eq!(counts.total, 120);
    }

    #[test]
    fn non_numeric_values_count_as_zero() {
        let counts = parse_text_summary("[RESUMEN]\ninsertados=muchos\nfilasLeidas=N/D");
        assert_eq!(counts.insertadas, 0);
        assert_eq!(counts.filas_leidas, None);
    }
}
