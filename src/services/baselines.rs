use crate::domain::models::IssueKind;
use crate::services::ledger::IssueLedger;
use crate::services::repo::{CommitId, RepoReader};
use tracing::debug;

/// Walks the trunk line from `head` backwards and collects every commit
/// that marks a historical head-of-trunk position, newest first.
///
/// A single-parent commit on the trunk is an anomaly (work landed without
/// a merge); it is recorded as a finding but still kept as a baseline so
/// the walk can continue past it. The root commit is never included.
pub fn find_baselines(
    repo: &dyn RepoReader,
    head: &CommitId,
    ledger: &mut IssueLedger,
) -> anyhow::Result<Vec<CommitId>> {
    let mut baselines = Vec::new();
    let mut current = repo.commit(head)?;
    loop {
        match current.parents.len() {
            0 => {
                debug!(commit = %current.id, "reached the end of the branch");
                return Ok(baselines);
            }
            1 => {
                ledger.record(IssueKind::NonMergeOnTrunk, Some(current.id.0.clone()));
                baselines.push(current.id.clone());
                current = repo.commit(&current.parents[0])?;
            }
            _ => {
                baselines.push(current.id.clone());
                current = repo.commit(&current.parents[0])?;
            }
        }
    }
}
