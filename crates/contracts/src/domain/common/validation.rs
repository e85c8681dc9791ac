use std::collections::BTreeMap;
use std::fmt;

/// Field key -> message, rendered as inline markers next to form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `field` when the trimmed value is empty
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.insert(field, format!("{} es obligatorio", label));
        }
    }

    pub fn require_some<T>(&mut self, field: &'static str, label: &str, value: Option<T>) {
        if value.is_none() {
            self.0.insert(field, format!("{} es obligatorio", label));
        }
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Client-side required-field checks run before any network call
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_reported() {
        let mut errors = FieldErrors::new();
        errors.require("codCliente", "Código", "   ");
        errors.require("nombreCliente", "Nombre", "Farmacia");
        errors.require_some::<i32>("anio", "Año", None);

        assert_eq!(errors.len(), 2);
        assert!(errors.has("codCliente"));
        assert!(!errors.has("nombreCliente"));
        assert_eq!(errors.get("anio"), Some("Año es obligatorio"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
