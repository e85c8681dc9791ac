use serde::{Deserialize, Serialize};

/// Cadenas minoristas con pantallas propias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetailChain {
    Fybeca,
    Deprati,
    TemplateGeneral,
}

impl RetailChain {
    /// Código para la URL y los nombres de archivo
    pub fn code(&self) -> &'static str {
        match self {
            RetailChain::Fybeca => "fybeca",
            RetailChain::Deprati => "deprati",
            RetailChain::TemplateGeneral => "template-general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RetailChain::Fybeca => "Fybeca",
            RetailChain::Deprati => "Deprati",
            RetailChain::TemplateGeneral => "Template General",
        }
    }

    /// Client code the chain's records are registered under
    pub fn client_code(&self) -> Option<&'static str> {
        match self {
            RetailChain::Fybeca => Some("MZCL-000014"),
            RetailChain::Deprati => Some("MZCL-000009"),
            RetailChain::TemplateGeneral => None,
        }
    }

    pub fn all() -> Vec<RetailChain> {
        vec![
            RetailChain::Fybeca,
            RetailChain::Deprati,
            RetailChain::TemplateGeneral,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fybeca" => Some(RetailChain::Fybeca),
            "deprati" => Some(RetailChain::Deprati),
            "template-general" => Some(RetailChain::TemplateGeneral),
            _ => None,
        }
    }
}

impl std::fmt::Display for RetailChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for chain in RetailChain::all() {
            assert_eq!(RetailChain::from_code(chain.code()), Some(chain));
        }
        assert_eq!(RetailChain::from_code("otro"), None);
    }
}
