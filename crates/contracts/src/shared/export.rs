//! In-memory spreadsheet model for client-side report export.
//!
//! The frontend hands an [`ExportTable`] to the SheetJS binding as JSON; the
//! binary workbook encoding happens there.

use serde::Serialize;

pub const CURRENCY_FORMAT: &str = "#,##0.00";
pub const UNITS_FORMAT: &str = "#,##0";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "t", rename_all = "lowercase")]
pub enum Cell {
    #[serde(rename = "s")]
    Text { v: String },
    #[serde(rename = "n")]
    Number {
        v: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        z: Option<&'static str>,
    },
    #[serde(rename = "z")]
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        let v = value.into();
        if v.is_empty() {
            Cell::Empty
        } else {
            Cell::Text { v }
        }
    }

    pub fn int(value: Option<i32>) -> Self {
        match value {
            Some(v) => Cell::Number {
                v: f64::from(v),
                z: None,
            },
            None => Cell::Empty,
        }
    }

    pub fn currency(value: f64) -> Self {
        Cell::Number {
            v: value,
            z: Some(CURRENCY_FORMAT),
        }
    }

    pub fn units(value: f64) -> Self {
        Cell::Number {
            v: value,
            z: Some(UNITS_FORMAT),
        }
    }

    /// Plain text rendering, as a spreadsheet reader returns the cell
    pub fn display(&self) -> String {
        match self {
            Cell::Text { v } => v.clone(),
            Cell::Number { v, .. } => {
                if v.fract() == 0.0 {
                    format!("{:.0}", v)
                } else {
                    v.to_string()
                }
            }
            Cell::Empty => String::new(),
        }
    }
}

/// One worksheet: a header row plus one row per record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTable {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ExportTable {
    pub fn new(sheet_name: &str, headers: &[&str]) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Header + rows as text, the shape a spreadsheet reader produces
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.headers.clone());
        grid.extend(
            self.rows
                .iter()
                .map(|row| row.iter().map(Cell::display).collect()),
        );
        grid
    }
}

/// Records that have a fixed report layout
pub trait Exportable {
    fn export_headers() -> Vec<&'static str>;
    fn export_row(&self) -> Vec<Cell>;
}

pub fn build_table<T: Exportable>(sheet_name: &str, records: &[T]) -> ExportTable {
    let mut table = ExportTable::new(sheet_name, &T::export_headers());
    for record in records {
        table.push_row(record.export_row());
    }
    table
}

/// `d-m-yyyy` stamp used at the end of report file names
pub fn date_stamp(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_serialize_in_sheetjs_shape() {
        let json = serde_json::to_value(vec![
            Cell::text("ESSENCE"),
            Cell::currency(10.5),
            Cell::text(""),
        ])
        .unwrap();
        assert_eq!(json[0]["t"], "s");
        assert_eq!(json[1]["t"], "n");
        assert_eq!(json[1]["z"], "#,##0.00");
        assert_eq!(json[2]["t"], "z");
    }

    #[test]
    fn grid_has_header_first() {
        let mut table = ExportTable::new("Hoja", &["A", "B"]);
        table.push_row(vec![Cell::int(Some(2024)), Cell::currency(1.25)]);
        assert_eq!(
            table.to_grid(),
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["2024".to_string(), "1.25".to_string()]
            ]
        );
    }

    #[test]
    fn date_stamp_has_no_padding() {
        let d = chrono::NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_stamp(d), "7-3-2025");
    }
}
