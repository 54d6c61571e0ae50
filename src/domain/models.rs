use serde::Serialize;

/// Process exit codes. Operational errors (bad usage, unopenable
/// repository, the ancestry depth bound) stay distinct from a completed
/// audit that found issues.
pub const AUDIT_OK: i32 = 0;
pub const AUDIT_FAILED: i32 = 1;
pub const OPERATIONAL_ERROR: i32 = 2;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Fixed vocabulary of audit findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    NonMergeOnTrunk,
    SelfMergedBranch,
    MissingPolicyFile,
    MalformedPolicyLine,
    UnauthorizedCommitter,
}

impl IssueKind {
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::NonMergeOnTrunk => "Non-merge commit on trunk",
            IssueKind::SelfMergedBranch => "Feature branch merged by one of its contributors",
            IssueKind::MissingPolicyFile => "Repository has no access-control file",
            IssueKind::MalformedPolicyLine => "Malformed access-control line",
            IssueKind::UnauthorizedCommitter => "Unauthorised committer on restricted branch",
        }
    }
}

#[derive(Serialize)]
pub struct CategoryReport {
    pub category: String,
    pub count: usize,
    pub evidence: Vec<String>,
}

#[derive(Serialize)]
pub struct AuditReport {
    pub clean: bool,
    pub categories: Vec<CategoryReport>,
}
