use crate::domain::models::IssueKind;
use crate::services::ledger::IssueLedger;
use crate::services::repo::{CommitId, RepoReader};
use anyhow::bail;
use std::collections::HashSet;
use tracing::{debug, info};

/// Upper bound on first-parent hops from a feature tip back to a known
/// baseline. No legitimate feature branch should need more; exceeding it
/// means the history is malformed and the audit is aborted.
pub const MAX_TRACE_DEPTH: u32 = 20;

/// Follows a feature-branch tip back towards the nearest known baseline,
/// recording a self-merge finding if any commit on the way was authored by
/// the identity that performed the enclosing merge.
///
/// Only the first-parent line is followed: merges nested inside a feature
/// branch are not explored. One finding per branch tip is enough, so the
/// trace stops at the first offending commit. A parentless commit ends the
/// trace silently (the branch was rooted before any baseline existed).
pub fn trace(
    repo: &dyn RepoReader,
    tip: &CommitId,
    excluded_author: &str,
    baselines: &HashSet<CommitId>,
    ledger: &mut IssueLedger,
) -> anyhow::Result<()> {
    let mut current = repo.commit(tip)?;
    let mut depth: u32 = 1;
    loop {
        debug!(commit = %current.id, author = %current.author_email, depth, "checking feature branch commit");
        if depth > MAX_TRACE_DEPTH {
            bail!(
                "max depth exceeded while looking for the parents of {} ({})",
                current.id,
                current.summary
            );
        }
        if baselines.contains(&current.id) {
            debug!(commit = %current.id, "tracked back to base; nothing further to do");
            return Ok(());
        }
        if current.author_email == excluded_author {
            info!(
                commit = %current.id,
                author = %current.author_email,
                "feature branch contains a commit authored by the merger"
            );
            ledger.record(IssueKind::SelfMergedBranch, Some(current.id.0.clone()));
            return Ok(());
        }
        match current.parents.first() {
            Some(parent) => {
                current = repo.commit(parent)?;
                depth += 1;
            }
            None => return Ok(()),
        }
    }
}
