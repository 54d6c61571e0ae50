use crate::domain::models::IssueKind;
use crate::services::ledger::IssueLedger;
use crate::services::repo::{CommitId, RepoReader};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Branch name to the set of identities allowed to commit to it, as read
/// from one commit's tree. Two commits may disagree for the same branch.
pub type AccessPolicy = HashMap<String, HashSet<String>>;

/// Reads and parses the access-control file as recorded at `commit`.
///
/// A missing file is a finding, not a failure: it is recorded once and an
/// empty policy is returned, so every branch reads as unconfigured. Lines
/// without a `branch:users` delimiter (or with an empty branch name) are
/// skipped and recorded; the rest of the file is still honored. An empty
/// identity list is kept as-is and restricts the branch to nobody.
pub fn resolve(
    repo: &dyn RepoReader,
    commit: &CommitId,
    policy_file: &str,
    ledger: &mut IssueLedger,
) -> anyhow::Result<AccessPolicy> {
    let raw = match repo.read_file(commit, policy_file)? {
        Some(raw) => raw,
        None => {
            ledger.record(IssueKind::MissingPolicyFile, None);
            return Ok(AccessPolicy::new());
        }
    };
    Ok(parse(&raw, ledger))
}

fn parse(raw: &str, ledger: &mut IssueLedger) -> AccessPolicy {
    let mut policy = AccessPolicy::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((branch, users)) = line.split_once(':') else {
            ledger.record(IssueKind::MalformedPolicyLine, Some(line.to_string()));
            continue;
        };
        let branch = branch.trim();
        if branch.is_empty() {
            ledger.record(IssueKind::MalformedPolicyLine, Some(line.to_string()));
            continue;
        }
        let users: HashSet<String> = users
            .split(',')
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();
        debug!(branch, ?users, "access-control entry");
        policy.insert(branch.to_string(), users);
    }
    policy
}
