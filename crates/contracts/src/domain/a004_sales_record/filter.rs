use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::aggregate::SalesRecord;
use crate::shared::calendar::month_label;
use crate::shared::list::RecordFilter;

pub const MONTH_NEEDS_YEAR: &str = "Para filtrar por Mes, selecciona primero un Año.";
pub const LOCAL_FILTER_FALLBACK: &str = "No se pudo conectar a la API. Aplicando filtros localmente...";

pub fn found_message(count: usize) -> String {
    format!("Se encontraron {} registros con los filtros aplicados.", count)
}

/// Draft / applied filter values of a sales screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesFilter {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub brand: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Which filter a tag chip removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesFilterField {
    Year,
    Month,
    Brand,
    Date,
}

/// Query string of `GET /venta`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anio: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_cliente: Option<String>,
}

impl SalesFilter {
    /// A month alone is ambiguous across years
    pub fn check(&self) -> Result<(), &'static str> {
        if self.month.is_some() && self.year.is_none() {
            return Err(MONTH_NEEDS_YEAR);
        }
        Ok(())
    }

    pub fn query(&self, client_code: Option<&str>) -> SalesQuery {
        SalesQuery {
            anio: self.year,
            mes: self.month,
            marca: self.brand.clone(),
            fecha: self.date.map(|d| d.format("%Y-%m-%d").to_string()),
            cod_cliente: client_code.map(str::to_string),
        }
    }

    pub fn tags(&self) -> Vec<(SalesFilterField, String)> {
        let mut tags = Vec::new();
        if let Some(y) = self.year {
            tags.push((SalesFilterField::Year, format!("Año: {}", y)));
        }
        if let Some(m) = self.month {
            tags.push((SalesFilterField::Month, format!("Mes: {}", month_label(m as u32))));
        }
        if let Some(b) = &self.brand {
            tags.push((SalesFilterField::Brand, format!("Marca: {}", b)));
        }
        if let Some(d) = self.date {
            tags.push((SalesFilterField::Date, format!("Fecha: {}", d.format("%d/%m/%Y"))));
        }
        tags
    }

    pub fn without(&self, field: SalesFilterField) -> Self {
        let mut next = self.clone();
        match field {
            SalesFilterField::Year => {
                next.year = None;
                next.month = None;
            }
            SalesFilterField::Month => next.month = None,
            SalesFilterField::Brand => next.brand = None,
            SalesFilterField::Date => next.date = None,
        }
        next
    }
}

impl RecordFilter<SalesRecord> for SalesFilter {
    fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.brand.is_none() && self.date.is_none()
    }

    fn matches(&self, r: &SalesRecord) -> bool {
        if let Some(year) = self.year {
            if r.anio != Some(year) {
                return false;
            }
        }
        if let Some(month) = self.month {
            if r.mes != Some(month) {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if !r.marca.trim().eq_ignore_ascii_case(brand.trim()) {
                return false;
            }
        }
        if let Some(date) = self.date {
            let same_day = r.anio == Some(date.year())
                && r.mes == Some(date.month() as i32)
                && r.dia.unwrap_or(1) == date.day() as i32;
            if !same_day {
                return false;
            }
        }
        true
    }
}

/// Keeps only the records registered under `client_code`
pub fn for_client(records: Vec<SalesRecord>, client_code: Option<&str>) -> Vec<SalesRecord> {
    match client_code {
        None => records,
        Some(code) => records
            .into_iter()
            .filter(|r| r.client_code() == code)
            .collect(),
    }
}

/// Years present in the data, newest first
pub fn years_in(records: &[SalesRecord]) -> Vec<i32> {
    let set: BTreeSet<i32> = records.iter().filter_map(|r| r.anio).collect();
    set.into_iter().rev().collect()
}

pub fn months_in(records: &[SalesRecord], year: Option<i32>) -> Vec<i32> {
    let set: BTreeSet<i32> = records
        .iter()
        .filter(|r| year.map_or(true, |y| r.anio == Some(y)))
        .filter_map(|r| r.mes)
        .filter(|m| (1..=12).contains(m))
        .collect();
    set.into_iter().collect()
}

pub fn brands_in(records: &[SalesRecord]) -> Vec<String> {
    let set: BTreeSet<String> = records
        .iter()
        .map(|r| r.marca.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::aggregate::Client;
    use crate::shared::list::{ListWorkflow, LoadPolicy};

    fn rec(id: i64, anio: i32, mes: i32, dia: i32, marca: &str) -> SalesRecord {
        SalesRecord {
            id: Some(id),
            anio: Some(anio),
            mes: Some(mes),
            dia: Some(dia),
            marca: marca.into(),
            cliente: Some(Client::with_code("MZCL-000014")),
            ..SalesRecord::default()
        }
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            rec(1, 2024, 3, 1, "ESSENCE"),
            rec(2, 2024, 3, 15, "CATRICE"),
            rec(3, 2024, 4, 2, "ESSENCE"),
            rec(4, 2023, 3, 9, "ESSENCE"),
        ]
    }

    #[test]
    fn year_and_month_select_exact_subset() {
        let filter = SalesFilter {
            year: Some(2024),
            month: Some(3),
            ..SalesFilter::default()
        };
        let ids: Vec<i64> = sample()
            .iter()
            .filter(|r| filter.matches(r))
            .filter_map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn clearing_restores_policy_view_and_first_page() {
        let mut wf: ListWorkflow<SalesRecord, SalesFilter> = ListWorkflow::new(LoadPolicy::Eager, 1);
        wf.load_snapshot(sample());
        wf.apply_locally(SalesFilter {
            year: Some(2024),
            month: Some(3),
            ..SalesFilter::default()
        });
        wf.set_page(1);
        wf.clear();
        assert_eq!(wf.visible_len(), 4);
        assert_eq!(wf.pagination.page, 0);
    }

    #[test]
    fn month_without_year_is_rejected() {
        let filter = SalesFilter {
            month: Some(3),
            ..SalesFilter::default()
        };
        assert_eq!(filter.check(), Err(MONTH_NEEDS_YEAR));
    }

    #[test]
    fn exact_date_matches_day() {
        let filter = SalesFilter {
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..SalesFilter::default()
        };
        let hits: Vec<i64> = sample()
            .iter()
            .filter(|r| filter.matches(r))
            .filter_map(|r| r.id)
            .collect();
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn brand_match_ignores_case() {
        let filter = SalesFilter {
            brand: Some("catrice".into()),
            ..SalesFilter::default()
        };
        assert_eq!(sample().iter().filter(|r| filter.matches(r)).count(), 1);
    }

    #[test]
    fn query_serializes_only_set_values() {
        let filter = SalesFilter {
            year: Some(2024),
            date: NaiveDate::from_ymd_opt(2024, 1, 5),
            ..SalesFilter::default()
        };
        let q = filter.query(Some("MZCL-000014"));
        assert_eq!(q.fecha.as_deref(), Some("2024-01-05"));
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("mes").is_none());
        assert_eq!(json["codCliente"], "MZCL-000014");
    }

    #[test]
    fn removing_year_tag_also_drops_month() {
        let filter = SalesFilter {
            year: Some(2024),
            month: Some(2),
            ..SalesFilter::default()
        };
        let next = filter.without(SalesFilterField::Year);
        assert!(next.year.is_none() && next.month.is_none());
        assert_eq!(filter.tags().len(), 2);
    }

    #[test]
    fn option_lists_come_from_data() {
        let data = sample();
        assert_eq!(years_in(&data), vec![2024, 2023]);
        assert_eq!(months_in(&data, Some(2024)), vec![3, 4]);
        assert_eq!(brands_in(&data), vec!["CATRICE".to_string(), "ESSENCE".to_string()]);
    }

    #[test]
    fn for_client_drops_foreign_rows() {
        let mut data = sample();
        data.push(SalesRecord {
            id: Some(99),
            cliente: Some(Client::with_code("MZCL-000009")),
            ..SalesRecord::default()
        });
        assert_eq!(for_client(data.clone(), Some("MZCL-000014")).len(), 4);
        assert_eq!(for_client(data, None).len(), 5);
    }
}
