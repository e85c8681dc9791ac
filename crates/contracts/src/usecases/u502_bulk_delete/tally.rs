use crate::domain::common::RecordId;
use crate::shared::notice::Notice;

/// Result of deleting records one request at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerIdTally {
    pub deleted: Vec<RecordId>,
    pub failed: Vec<RecordId>,
}

impl PerIdTally {
    pub fn record(&mut self, id: RecordId, ok: bool) {
        if ok {
            self.deleted.push(id);
        } else {
            self.failed.push(id);
        }
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    pub fn notice(&self) -> Notice {
        if self.failed.is_empty() {
            Notice::success("Clientes eliminados")
        } else if self.deleted.is_empty() {
            Notice::error("No se pudo eliminar ninguno")
        } else {
            Notice::warn(format!(
                "Algunos no se pudieron eliminar ({}/{})",
                self.failed.len(),
                self.attempted()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notice::Severity;

    #[test]
    fn partial_failure_reports_ratio() {
        let mut tally = PerIdTally::default();
        tally.record(1, true);
        tally.record(2, false);
        tally.record(3, true);
        let notice = tally.notice();
        assert_eq!(notice.severity, Severity::Warn);
        assert_eq!(notice.detail.as_deref(), Some("Algunos no se pudieron eliminar (1/3)"));
    }

    #[test]
    fn all_or_nothing() {
        let mut ok = PerIdTally::default();
        ok.record(1, true);
        assert_eq!(ok.notice().severity, Severity::Success);

        let mut bad = PerIdTally::default();
        bad.record(1, false);
        assert_eq!(bad.notice().severity, Severity::Error);
    }
}
