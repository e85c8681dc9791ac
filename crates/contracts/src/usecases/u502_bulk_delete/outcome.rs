use once_cell::sync::Lazy;
use regex::Regex;

use super::response::{bracketed_ids, BlockedInfo, DeleteResponse};
use crate::domain::common::RecordId;
use crate::shared::errors::ApiError;
use crate::shared::notice::Notice;

static SALES_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ventas asociadas|foreign key|reference").expect("valid constraint regex")
});

pub const REASON_HAS_SALES: &str = "Tiene ventas asociadas";
pub const REASON_INTEGRITY: &str = "Restricción de integridad referencial";
const DEFAULT_MESSAGE: &str = "Operación completada";

/// Decides how blocked records are described in the warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedKind {
    Product,
    FurnitureType,
    Record,
}

impl BlockedKind {
    fn noun(&self) -> &'static str {
        match self {
            BlockedKind::Product => "producto(s)",
            BlockedKind::FurnitureType | BlockedKind::Record => "registro(s)",
        }
    }

    fn describe(&self, info: &BlockedInfo) -> String {
        let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        match self {
            BlockedKind::Product => format!(
                "ID {} (Item: {}, Barra: {})",
                info.id,
                dash(&info.cod_item),
                dash(&info.cod_barra_sap)
            ),
            BlockedKind::FurnitureType => format!("ID {} (PDV: {})", info.id, dash(&info.cod_pdv)),
            BlockedKind::Record => format!("ID {}", info.id),
        }
    }
}

/// Ids whose request failed for a reason other than a blocked record:
/// transport errors, or a server error that does not name a constraint
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteFailure {
    pub ids: Vec<RecordId>,
    pub error: ApiError,
}

/// Aggregate of one or more delete batches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteOutcome {
    pub eliminados: Vec<RecordId>,
    pub bloqueados: Vec<RecordId>,
    pub bloqueados_info: Vec<BlockedInfo>,
    pub message: String,
    pub failures: Vec<DeleteFailure>,
}

pub fn reason_for(message: &str) -> &'static str {
    if SALES_LINK_RE.is_match(message) {
        REASON_HAS_SALES
    } else {
        REASON_INTEGRITY
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl DeleteOutcome {
    /// `ids` never reached a verdict because the request itself failed
    pub fn unsent(ids: Vec<RecordId>, error: ApiError) -> Self {
        Self {
            failures: vec![DeleteFailure { ids, error }],
            ..Self::default()
        }
    }

    /// Interprets one reply. `status` is the HTTP status and `requested`
    /// the ids the batch asked to delete.
    pub fn from_reply(response: DeleteResponse, status: u16, requested: &[RecordId]) -> Self {
        let ok = is_success(status);
        match response {
            DeleteResponse::Structured(report) => Self {
                eliminados: report.eliminados,
                bloqueados: report.bloqueados,
                bloqueados_info: report.bloqueados_info,
                message: report
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
                failures: Vec::new(),
            },
            DeleteResponse::Text(text) if ok => Self {
                eliminados: requested.to_vec(),
                message: text,
                ..Self::default()
            },
            DeleteResponse::Unrecognized if ok => Self {
                eliminados: requested.to_vec(),
                message: DEFAULT_MESSAGE.to_string(),
                ..Self::default()
            },
            DeleteResponse::Text(text) => {
                let ids = bracketed_ids(&text);
                if !ids.is_empty() {
                    Self {
                        bloqueados: ids,
                        message: text,
                        ..Self::default()
                    }
                } else if SALES_LINK_RE.is_match(&text) {
                    Self {
                        bloqueados: requested.to_vec(),
                        message: text,
                        ..Self::default()
                    }
                } else {
                    Self::unsent(requested.to_vec(), ApiError::http(status, &text, None))
                }
            }
            DeleteResponse::Unrecognized => {
                Self::unsent(requested.to_vec(), ApiError::http(status, "", None))
            }
        }
    }

    /// Folds a later batch in; earlier batches stay counted
    pub fn merge(&mut self, other: DeleteOutcome) {
        self.eliminados.extend(other.eliminados);
        self.bloqueados.extend(other.bloqueados);
        self.bloqueados_info.extend(other.bloqueados_info);
        self.failures.extend(other.failures);
        if !other.message.is_empty() {
            if !self.message.is_empty() {
                self.message.push_str(" | ");
            }
            self.message.push_str(&other.message);
        }
    }

    pub fn reason(&self) -> &'static str {
        reason_for(&self.message)
    }

    /// Toasts summarizing the whole operation
    pub fn notices(&self, kind: BlockedKind) -> Vec<Notice> {
        let mut out = Vec::new();
        if !self.eliminados.is_empty() {
            out.push(Notice::success(format!("Eliminados: {}", self.eliminados.len())));
        }
        if !self.bloqueados.is_empty() {
            let detail = if self.bloqueados_info.is_empty() {
                let ids: Vec<String> = self.bloqueados.iter().map(|id| id.to_string()).collect();
                format!("IDs: {}", ids.join(", "))
            } else {
                let parts: Vec<String> = self
                    .bloqueados_info
                    .iter()
                    .map(|info| kind.describe(info))
                    .collect();
                parts.join("; ")
            };
            out.push(
                Notice::warn(format!(
                    "No se pudieron eliminar {} {}. Motivo: {}. {}",
                    self.bloqueados.len(),
                    kind.noun(),
                    self.reason(),
                    detail
                ))
                .with_life(10_000),
            );
        }
        for failure in &self.failures {
            let ids: Vec<String> = failure.ids.iter().map(|id| id.to_string()).collect();
            out.push(
                Notice::error(format!("{} | IDs sin eliminar: {}", failure.error, ids.join(", ")))
                    .with_life(10_000),
            );
        }
        if out.is_empty() {
            let message = if self.message.is_empty() {
                DEFAULT_MESSAGE
            } else {
                self.message.as_str()
            };
            out.push(Notice::info(message));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notice::Severity;

    #[test]
    fn failed_text_reply_blocks_bracketed_ids() {
        let out = DeleteOutcome::from_reply(
            DeleteResponse::parse("DELETE conflicted with the REFERENCE constraint [12, 45, 7]"),
            409,
            &[1, 12, 45, 7],
        );
        assert_eq!(out.bloqueados, vec![12, 45, 7]);
        assert_eq!(out.reason(), REASON_HAS_SALES);
    }

    #[test]
    fn constraint_text_without_ids_blocks_the_batch() {
        let out = DeleteOutcome::from_reply(
            DeleteResponse::parse("violates foreign key constraint fk_venta_cliente"),
            409,
            &[4, 5],
        );
        assert_eq!(out.bloqueados, vec![4, 5]);
        assert!(out.failures.is_empty());
        assert_eq!(out.reason(), REASON_HAS_SALES);
    }

    #[test]
    fn server_error_text_is_an_error_not_a_block() {
        let out = DeleteOutcome::from_reply(DeleteResponse::parse("Internal Server Error"), 500, &[5]);
        assert!(out.bloqueados.is_empty());
        assert_eq!(out.failures.len(), 1);
        assert_eq!(out.failures[0].ids, vec![5]);

        let notices = out.notices(BlockedKind::Record);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Error);
        assert_eq!(
            notices[0].detail.as_deref(),
            Some("Error del servidor (500) | Detalle: Internal Server Error | IDs sin eliminar: 5")
        );
    }

    #[test]
    fn empty_not_found_reply_uses_the_status_message() {
        let out = DeleteOutcome::from_reply(DeleteResponse::parse(""), 404, &[8]);
        let notices = out.notices(BlockedKind::Record);
        assert_eq!(notices[0].severity, Severity::Error);
        assert!(notices[0]
            .detail
            .as_deref()
            .unwrap()
            .starts_with("No encontrado (404)"));
    }

    #[test]
    fn unreachable_batches_are_reported_as_connection_errors() {
        let mut total = DeleteOutcome::from_reply(
            DeleteResponse::parse(r#"{"eliminados":[1,2]}"#),
            200,
            &[1, 2],
        );
        total.merge(DeleteOutcome::unsent(vec![3, 4], ApiError::Network("offline".into())));

        assert_eq!(total.eliminados, vec![1, 2]);
        assert!(total.bloqueados.is_empty());
        let notices = total.notices(BlockedKind::Record);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, Severity::Success);
        assert_eq!(notices[1].severity, Severity::Error);
        let detail = notices[1].detail.as_deref().unwrap();
        assert!(detail.starts_with(crate::shared::errors::NETWORK_MESSAGE));
        assert!(detail.ends_with("IDs sin eliminar: 3, 4"));
        assert!(!detail.contains(REASON_INTEGRITY));
    }

    #[test]
    fn timeout_keeps_its_own_message() {
        let out = DeleteOutcome::unsent(vec![7], ApiError::Timeout);
        let notices = out.notices(BlockedKind::Product);
        assert_eq!(notices[0].severity, Severity::Error);
        assert!(notices[0]
            .detail
            .as_deref()
            .unwrap()
            .starts_with(crate::shared::errors::TIMEOUT_MESSAGE));
    }

    #[test]
    fn ok_without_lists_means_deleted() {
        let out = DeleteOutcome::from_reply(DeleteResponse::parse(""), 200, &[4, 5]);
        assert_eq!(out.eliminados, vec![4, 5]);
    }

    #[test]
    fn batches_merge_and_messages_join() {
        let mut total = DeleteOutcome::from_reply(
            DeleteResponse::parse(r#"{"eliminados":[1,2],"message":"lote 1"}"#),
            200,
            &[1, 2],
        );
        total.merge(DeleteOutcome::from_reply(
            DeleteResponse::parse(r#"{"bloqueados":[3],"message":"tiene ventas asociadas"}"#),
            200,
            &[3],
        ));
        assert_eq!(total.eliminados, vec![1, 2]);
        assert_eq!(total.bloqueados, vec![3]);
        assert_eq!(total.message, "lote 1 | tiene ventas asociadas");
    }

    #[test]
    fn notices_describe_blocked_products() {
        let outcome = DeleteOutcome {
            eliminados: vec![1],
            bloqueados: vec![9],
            bloqueados_info: vec![BlockedInfo {
                id: 9,
                cod_item: Some("IT9".into()),
                ..BlockedInfo::default()
            }],
            message: "ventas asociadas".into(),
            ..DeleteOutcome::default()
        };
        let notices = outcome.notices(BlockedKind::Product);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].detail.as_deref(), Some("Eliminados: 1"));
        assert_eq!(notices[1].severity, Severity::Warn);
        assert_eq!(
            notices[1].detail.as_deref(),
            Some("No se pudieron eliminar 1 producto(s). Motivo: Tiene ventas asociadas. ID 9 (Item: IT9, Barra: -)")
        );
    }

    #[test]
    fn furniture_and_fallback_details() {
        let with_info = DeleteOutcome {
            bloqueados: vec![2],
            bloqueados_info: vec![BlockedInfo { id: 2, cod_pdv: Some("P01".into()), ..BlockedInfo::default() }],
            ..DeleteOutcome::default()
        };
        assert!(with_info.notices(BlockedKind::FurnitureType)[0]
            .detail
            .as_deref()
            .unwrap()
            .ends_with("ID 2 (PDV: P01)"));

        let ids_only = DeleteOutcome { bloqueados: vec![2, 3], ..DeleteOutcome::default() };
        assert!(ids_only.notices(BlockedKind::Record)[0]
            .detail
            .as_deref()
            .unwrap()
            .ends_with("IDs: 2, 3"));
    }

    #[test]
    fn nothing_reported_shows_server_message() {
        let outcome = DeleteOutcome { message: "Sin cambios".into(), ..DeleteOutcome::default() };
        let notices = outcome.notices(BlockedKind::Record);
        assert_eq!(notices[0].severity, Severity::Info);
        assert_eq!(notices[0].detail.as_deref(), Some("Sin cambios"));
    }
}
