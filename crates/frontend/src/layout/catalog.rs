//! Companies and the modules each one exposes in the shell.

use contracts::enums::retail_chain::RetailChain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Company {
    Fybeca,
    Deprati,
    TemplateGeneral,
    Clients,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Sales(RetailChain),
    Products,
    FurnitureTypes(RetailChain),
    Clients,
}

impl Company {
    pub fn all() -> [Company; 4] {
        [
            Company::Fybeca,
            Company::Deprati,
            Company::TemplateGeneral,
            Company::Clients,
        ]
    }

    /// Value of `?empresa=`
    pub fn code(&self) -> &'static str {
        match self {
            Company::Fybeca => "fybeca",
            Company::Deprati => "deprati",
            Company::TemplateGeneral => "template-general",
            Company::Clients => "clientes",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Company::all().into_iter().find(|c| c.code() == code)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Company::Fybeca => "Fybeca",
            Company::Deprati => "Deprati",
            Company::TemplateGeneral => "Template General",
            Company::Clients => "Clientes",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Company::Fybeca => "#4f46e5",
            Company::Deprati => "#e11d48",
            Company::TemplateGeneral => "#16a34a",
            Company::Clients => "#0284c7",
        }
    }

    pub fn modules(&self) -> Vec<Module> {
        match self {
            Company::Fybeca => vec![
                Module::Sales(RetailChain::Fybeca),
                Module::Products,
                Module::FurnitureTypes(RetailChain::Fybeca),
            ],
            Company::Deprati => vec![
                Module::Sales(RetailChain::Deprati),
                Module::FurnitureTypes(RetailChain::Deprati),
            ],
            Company::TemplateGeneral => vec![Module::Sales(RetailChain::TemplateGeneral)],
            Company::Clients => vec![Module::Clients],
        }
    }

    pub fn module_by_key(&self, key: &str) -> Option<Module> {
        self.modules().into_iter().find(|m| m.key() == key)
    }

    pub fn modules_caption(&self) -> String {
        let n = self.modules().len();
        if n == 1 {
            "1 módulo disponible".to_string()
        } else {
            format!("{} módulos disponibles", n)
        }
    }
}

impl Module {
    /// Value of `?modulo=`, unique inside one company
    pub fn key(&self) -> &'static str {
        match self {
            Module::Sales(RetailChain::TemplateGeneral) => "template-general",
            Module::Sales(_) => "ventas",
            Module::Products => "productos",
            Module::FurnitureTypes(_) => "tipo-mueble",
            Module::Clients => "clientes",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Module::Sales(RetailChain::TemplateGeneral) => "Template General",
            Module::Sales(_) => "Ventas",
            Module::Products => "Mantenimiento Producto",
            Module::FurnitureTypes(_) => "Tipo Mueble",
            Module::Clients => "Clientes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Module::Sales(RetailChain::TemplateGeneral) => "Carga por plantilla fija",
            Module::Sales(_) => "Gestión de ventas y transacciones",
            Module::Products => "Gestión de inventario y productos",
            Module::FurnitureTypes(_) => "Configuración de tipos de muebles",
            Module::Clients => "Gestión de clientes",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Module::Sales(RetailChain::TemplateGeneral) => "template",
            Module::Sales(_) => "sales",
            Module::Products => "products",
            Module::FurnitureTypes(_) => "inventory",
            Module::Clients => "customers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_codes_round_trip() {
        for company in Company::all() {
            assert_eq!(Company::from_code(company.code()), Some(company));
        }
        assert_eq!(Company::from_code("otra"), None);
    }

    #[test]
    fn fybeca_exposes_three_modules() {
        let modules = Company::Fybeca.modules();
        assert_eq!(modules.len(), 3);
        assert_eq!(
            Company::Fybeca.module_by_key("tipo-mueble"),
            Some(Module::FurnitureTypes(RetailChain::Fybeca))
        );
        assert_eq!(Company::Deprati.module_by_key("productos"), None);
        assert_eq!(Company::Fybeca.modules_caption(), "3 módulos disponibles");
        assert_eq!(Company::Clients.modules_caption(), "1 módulo disponible");
    }

    #[test]
    fn template_general_sales_has_its_own_key() {
        let module = Company::TemplateGeneral.modules()[0];
        assert_eq!(module.key(), "template-general");
        assert_eq!(module.description(), "Carga por plantilla fija");
    }
}
