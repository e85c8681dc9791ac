use serde::{Deserialize, Serialize};

/// Toast severity; also decides the default lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Info => "toast-info",
            Severity::Warn => "toast-warn",
            Severity::Error => "toast-error",
        }
    }

    pub fn default_summary(&self) -> &'static str {
        match self {
            Severity::Success => "Éxito",
            Severity::Info => "Información",
            Severity::Warn => "Advertencia",
            Severity::Error => "Error",
        }
    }
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub summary: String,
    pub detail: Option<String>,
    /// `None` keeps the toast until closed
    pub life_ms: Option<u32>,
}

impl Notice {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail,
            life_ms: Some(3000),
        }
    }

    fn of(severity: Severity, detail: impl Into<String>) -> Self {
        Self::new(severity, severity.default_summary(), Some(detail.into()))
    }

    pub fn success(detail: impl Into<String>) -> Self {
        Self::of(Severity::Success, detail)
    }

    pub fn info(detail: impl Into<String>) -> Self {
        Self::of(Severity::Info, detail)
    }

    pub fn warn(detail: impl Into<String>) -> Self {
        Self::of(Severity::Warn, detail)
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::of(Severity::Error, detail).with_life(6000)
    }

    pub fn titled(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_life(mut self, life_ms: u32) -> Self {
        self.life_ms = Some(life_ms);
        self
    }

    pub fn sticky(mut self) -> Self {
        self.life_ms = None;
        self
    }
}
