/// Nombres de meses usados en filtros, tablas y reportes
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// `1..=12` -> month name; anything else is rendered as the raw number
pub fn month_label(month: u32) -> String {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize].to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_all_months() {
        assert_eq!(month_label(1), "Enero");
        assert_eq!(month_label(12), "Diciembre");
        assert_eq!(month_label(13), "13");
    }
}
