use crate::shared::errors::ApiError;

const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

pub fn extension_of(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Synchronous rejection before any upload starts
pub fn check_spreadsheet(file_name: &str, size_bytes: u64, max_mb: Option<u32>) -> Result<(), ApiError> {
    let ok_ext = extension_of(file_name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);
    if !ok_ext {
        return Err(ApiError::Validation(
            "Tipo de archivo no soportado. Sube un Excel (.xlsx o .xls).".to_string(),
        ));
    }
    if let Some(max) = max_mb {
        if size_bytes > u64::from(max) * 1024 * 1024 {
            return Err(ApiError::Validation(format!(
                "El archivo es demasiado grande. Máximo {}MB.",
                max
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_excel_extensions_pass() {
        assert!(check_spreadsheet("ventas.XLSX", 10, None).is_ok());
        assert!(check_spreadsheet("ventas.xls", 10, None).is_ok());
        assert!(check_spreadsheet("ventas.csv", 10, None).is_err());
        assert!(check_spreadsheet("ventas", 10, None).is_err());
    }

    #[test]
    fn size_limit_is_inclusive() {
        let max = 10 * 1024 * 1024;
        assert!(check_spreadsheet("a.xlsx", max, Some(10)).is_ok());
        let err = check_spreadsheet("a.xlsx", max + 1, Some(10)).unwrap_err();
        assert_eq!(err.to_string(), "El archivo es demasiado grande. Máximo 10MB.");
    }
}
