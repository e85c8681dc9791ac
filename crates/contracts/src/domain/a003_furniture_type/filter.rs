use std::collections::BTreeSet;

use super::aggregate::FurnitureType;
use crate::shared::list::RecordFilter;
use crate::shared::search::normalize_query;

/// Filter state of the furniture-type screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurnitureFilter {
    pub text: String,
    pub essence: Option<String>,
    pub catrice: Option<String>,
}

impl FurnitureFilter {
    pub fn is_active(&self) -> bool {
        normalize_query(&self.text).is_some() || self.essence.is_some() || self.catrice.is_some()
    }

    pub fn active_count(&self) -> usize {
        [
            normalize_query(&self.text).is_some(),
            self.essence.is_some(),
            self.catrice.is_some(),
        ]
        .iter()
        .filter(|v| **v)
        .count()
    }

    pub fn matches(&self, item: &FurnitureType) -> bool {
        if let Some(q) = normalize_query(&self.text) {
            let client = item.cliente.as_ref();
            let haystack = [
                item.cod_pdv.as_str(),
                item.nombre_pdv.as_str(),
                item.ciudad.as_str(),
                client.map(|c| c.cod_cliente.as_str()).unwrap_or(""),
                client.map(|c| c.nombre_cliente.as_str()).unwrap_or(""),
                item.tipo_mueble_essence.as_str(),
                item.tipo_mueble_catrice.as_str(),
            ];
            if !haystack.iter().any(|v| v.to_lowercase().contains(&q)) {
                return false;
            }
        }
        if let Some(essence) = &self.essence {
            if &item.tipo_mueble_essence != essence {
                return false;
            }
        }
        if let Some(catrice) = &self.catrice {
            if &item.tipo_mueble_catrice != catrice {
                return false;
            }
        }
        true
    }
}

impl RecordFilter<FurnitureType> for FurnitureFilter {
    fn is_empty(&self) -> bool {
        !self.is_active()
    }

    fn matches(&self, record: &FurnitureType) -> bool {
        FurnitureFilter::matches(self, record)
    }
}

/// Rows visible for one client code, after the screen filter
pub fn visible_items(
    items: &[FurnitureType],
    client_code: &str,
    filter: &FurnitureFilter,
) -> Vec<FurnitureType> {
    items
        .iter()
        .filter(|ft| ft.client_code() == client_code)
        .filter(|ft| filter.matches(ft))
        .cloned()
        .collect()
}

/// Sorted distinct non-empty values for a dropdown
pub fn distinct_values<F>(items: &[FurnitureType], field: F) -> Vec<String>
where
    F: Fn(&FurnitureType) -> &str,
{
    items
        .iter()
        .map(|ft| field(ft).trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::aggregate::Client;

    fn ft(id: i64, pdv: &str, essence: &str, catrice: &str, client: &str) -> FurnitureType {
        FurnitureType {
            id: Some(id),
            cod_pdv: pdv.into(),
            nombre_pdv: format!("Local {}", pdv),
            tipo_mueble_essence: essence.into(),
            tipo_mueble_catrice: catrice.into(),
            cliente: Some(Client::with_code(client)),
            ..FurnitureType::default()
        }
    }

    #[test]
    fn only_rows_of_the_pinned_client_are_visible() {
        let items = vec![
            ft(1, "A", "GONDOLA", "", "MZCL-000014"),
            ft(2, "B", "GONDOLA", "", "MZCL-000009"),
        ];
        let visible = visible_items(&items, "MZCL-000014", &FurnitureFilter::default());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, Some(1));
    }

    #[test]
    fn dropdown_and_text_filters_combine() {
        let items = vec![
            ft(1, "UIO-1", "GONDOLA", "ISLA", "C"),
            ft(2, "UIO-2", "MURO", "ISLA", "C"),
            ft(3, "GYE-1", "GONDOLA", "MURO", "C"),
        ];
        let filter = FurnitureFilter {
            text: "uio".into(),
            essence: Some("GONDOLA".into()),
            catrice: None,
        };
        let visible = visible_items(&items, "C", &filter);
        assert_eq!(visible.iter().filter_map(|f| f.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn distinct_values_are_sorted_and_skip_blanks() {
        let items = vec![
            ft(1, "A", "MURO", "", "C"),
            ft(2, "B", "GONDOLA", "", "C"),
            ft(3, "C", "MURO", "", "C"),
        ];
        assert_eq!(
            distinct_values(&items, |f| &f.tipo_mueble_essence),
            vec!["GONDOLA".to_string(), "MURO".to_string()]
        );
        assert!(distinct_values(&items, |f| &f.tipo_mueble_catrice).is_empty());
    }
}
