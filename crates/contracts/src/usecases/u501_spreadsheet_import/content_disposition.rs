use once_cell::sync::Lazy;
use regex::Regex;

static FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)filename\*=UTF-8''([^;\n]+)|filename="?([^";\n]+)"?"#)
        .expect("valid filename regex")
});

/// File name announced by a `Content-Disposition` header
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let caps = FILENAME_RE.captures(header)?;
    let raw = caps.get(1).or_else(|| caps.get(2))?.as_str().trim();
    if raw.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_form_is_decoded() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename*=UTF-8''reporte%20ventas.xlsx")
                .as_deref(),
            Some("reporte ventas.xlsx")
        );
    }

    #[test]
    fn quoted_and_bare_forms() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="procesado.xlsx""#).as_deref(),
            Some("procesado.xlsx")
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=a.xlsx; size=3").as_deref(),
            Some("a.xlsx")
        );
        assert_eq!(filename_from_content_disposition("inline"), None);
    }
}
