use crate::domain::models::{AuditReport, CategoryReport, IssueKind};

/// Accumulating record of audit findings.
///
/// Categories keep first-recorded order; evidence within a category is
/// duplicate-free by value. Some findings carry no evidence payload (a
/// missing access-control file is a fact about the repository, not about
/// one commit) — those are stored as `None` and still de-duplicated.
#[derive(Debug, Default)]
pub struct IssueLedger {
    entries: Vec<(IssueKind, Vec<Option<String>>)>,
}

impl IssueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: IssueKind, evidence: Option<String>) {
        if let Some((_, list)) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            if !list.contains(&evidence) {
                list.push(evidence);
            }
        } else {
            self.entries.push((kind, vec![evidence]));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (IssueKind, &[Option<String>])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn report(&self) -> AuditReport {
        AuditReport {
            clean: self.entries.is_empty(),
            categories: self
                .entries
                .iter()
                .map(|(kind, evidence)| CategoryReport {
                    category: kind.label().to_string(),
                    count: evidence.len(),
                    evidence: evidence.iter().flatten().cloned().collect(),
                })
                .collect(),
        }
    }
}
