use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use super::catalog::{Company, Module};

/// Navigation state of the shell, mirrored to `?empresa=&modulo=`
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub company: RwSignal<Option<Company>>,
    pub module: RwSignal<Option<Module>>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulo: Option<String>,
}

impl ShellQuery {
    pub fn from_selection(company: Option<Company>, module: Option<Module>) -> Self {
        Self {
            empresa: company.map(|c| c.code().to_string()),
            modulo: company.and(module).map(|m| m.key().to_string()),
        }
    }

    /// Unknown codes are dropped; a module needs its company
    pub fn selection(&self) -> (Option<Company>, Option<Module>) {
        let company = self.empresa.as_deref().and_then(Company::from_code);
        let module = match (company, self.modulo.as_deref()) {
            (Some(c), Some(key)) => c.module_by_key(key),
            _ => None,
        };
        (company, module)
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            company: RwSignal::new(None),
            module: RwSignal::new(None),
        }
    }

    pub fn select_company(&self, company: Company) {
        log::debug!("company selected: {}", company.code());
        self.module.set(None);
        self.company.set(Some(company));
    }

    pub fn select_module(&self, module: Module) {
        log::debug!("module selected: {}", module.key());
        self.module.set(Some(module));
    }

    pub fn back_to_companies(&self) {
        self.module.set(None);
        self.company.set(None);
    }

    pub fn back_to_modules(&self) {
        self.module.set(None);
    }

    pub fn reset(&self) {
        self.back_to_companies();
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: ShellQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let (company, module) = query.selection();
        self.company.set(company);
        self.module.set(module);

        let this = *self;
        Effect::new(move |_| {
            let query = ShellQuery::from_selection(this.company.get(), this.module.get());
            let query_string = serde_qs::to_string(&query).unwrap_or_default();

            let Some(w) = window() else { return };
            let path = w.location().pathname().unwrap_or_default();
            let new_url = if query_string.is_empty() {
                path
            } else {
                format!("{}?{}", path, query_string)
            };

            let current_search = w.location().search().unwrap_or_default();
            let new_search = if query_string.is_empty() {
                String::new()
            } else {
                format!("?{}", query_string)
            };

            // Only update URL if it actually changed
            if current_search != new_search {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::retail_chain::RetailChain;

    #[test]
    fn query_restores_company_and_module() {
        let query: ShellQuery = serde_qs::from_str("empresa=deprati&modulo=tipo-mueble").unwrap();
        assert_eq!(
            query.selection(),
            (
                Some(Company::Deprati),
                Some(Module::FurnitureTypes(RetailChain::Deprati))
            )
        );
    }

    #[test]
    fn module_of_another_company_is_ignored() {
        let query: ShellQuery = serde_qs::from_str("empresa=deprati&modulo=productos").unwrap();
        assert_eq!(query.selection(), (Some(Company::Deprati), None));
        let query: ShellQuery = serde_qs::from_str("modulo=ventas").unwrap();
        assert_eq!(query.selection(), (None, None));
    }

    #[test]
    fn empty_selection_serializes_to_nothing() {
        let qs = serde_qs::to_string(&ShellQuery::from_selection(None, None)).unwrap();
        assert_eq!(qs, "");
        let qs = serde_qs::to_string(&ShellQuery::from_selection(
            Some(Company::Fybeca),
            Some(Module::Products),
        ))
        .unwrap();
        assert_eq!(qs, "empresa=fybeca&modulo=productos");
    }
}
