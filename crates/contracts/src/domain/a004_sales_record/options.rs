//! Filter option lists served by `/anios-disponibles`, `/meses-disponibles`
//! and `/marcas-ventas`. Items come either as bare values or as objects.

use serde_json::Value;

fn number_of(item: &Value, keys: &[&str]) -> Option<i64> {
    let raw = match item {
        Value::Object(map) => keys.iter().find_map(|k| map.get(*k))?,
        other => other,
    };
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Years, ascending
pub fn parse_years(data: &Value) -> Vec<i32> {
    let mut years: Vec<i32> = data
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|i| number_of(i, &["anio", "year", "value"]))
                .filter_map(|n| i32::try_from(n).ok())
                .collect()
        })
        .unwrap_or_default();
    years.sort_unstable();
    years.dedup();
    years
}

/// Months 1..=12 with data; all twelve when the server lists none
pub fn parse_months(data: &Value) -> Vec<i32> {
    let mut months: Vec<i32> = data
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|i| number_of(i, &["mes", "month", "value"]))
                .filter(|m| (1..=12).contains(m))
                .map(|m| m as i32)
                .collect()
        })
        .unwrap_or_default();
    months.sort_unstable();
    months.dedup();
    if months.is_empty() {
        (1..=12).collect()
    } else {
        months
    }
}

pub fn parse_brands(data: &Value) -> Vec<String> {
    data.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn years_accept_numbers_strings_and_objects() {
        let data = json!([2024, "2023", {"anio": 2025}, {"year": 2023}, {"otro": 1}, null]);
        assert_eq!(parse_years(&data), vec![2023, 2024, 2025]);
    }

    #[test]
    fn months_out_of_range_are_dropped() {
        let data = json!([{"mes": 3}, 0, 13, "1", {"value": 3}]);
        assert_eq!(parse_months(&data), vec![1, 3]);
    }

    #[test]
    fn no_months_means_the_whole_year() {
        assert_eq!(parse_months(&json!([])).len(), 12);
        assert_eq!(parse_months(&json!({"error": "x"})).len(), 12);
    }

    #[test]
    fn brands_skip_blanks() {
        let data = json!(["ESSENCE", " ", "CATRICE ", 5]);
        assert_eq!(parse_brands(&data), vec!["ESSENCE", "CATRICE"]);
    }
}
