use crate::domain::models::IssueKind;
use crate::services::ancestry;
use crate::services::baselines::find_baselines;
use crate::services::ledger::IssueLedger;
use crate::services::policy;
use crate::services::repo::{CommitId, RepoReader};
use std::collections::HashSet;
use tracing::debug;

/// Runs both audit phases over the repository and returns the accumulated
/// findings. Operational failures (unreadable objects, the ancestry depth
/// bound) propagate as errors; policy findings never do.
pub fn run(
    repo: &dyn RepoReader,
    branch: &str,
    policy_file: &str,
) -> anyhow::Result<IssueLedger> {
    let mut ledger = IssueLedger::new();
    let head = repo.head()?;
    let baselines = find_baselines(repo, &head, &mut ledger)?;
    let baseline_set: HashSet<CommitId> = baselines.iter().cloned().collect();

    check_merge_authors(repo, &head, &baseline_set, &mut ledger)?;
    check_branch_permissions(repo, branch, policy_file, &baselines, &mut ledger)?;

    Ok(ledger)
}

/// Phase A: every merge on the trunk line is checked for feature-branch
/// commits authored by the person who performed the merge.
///
/// The trunk cursor always advances via the first parent, independently of
/// what the feature-branch trace finds. Non-merge commits on the trunk are
/// re-derived here over the same path as the baseline walk; the ledger
/// collapses the duplicates.
fn check_merge_authors(
    repo: &dyn RepoReader,
    head: &CommitId,
    baselines: &HashSet<CommitId>,
    ledger: &mut IssueLedger,
) -> anyhow::Result<()> {
    let mut current = repo.commit(head)?;
    loop {
        if current.parents.is_empty() {
            // Reached the end of the repository.
            return Ok(());
        }
        if current.parents.len() < 2 {
            ledger.record(IssueKind::NonMergeOnTrunk, Some(current.id.0.clone()));
            current = repo.commit(&current.parents[0])?;
            continue;
        }
        // ASSUMPTION: the first parent was the previous position of the
        // branch. An unconventional merge could misclassify the trunk here.
        debug!(merge = %current.id, base = %current.parents[0], "base of this merge");
        for tip in &current.parents[1..] {
            ancestry::trace(repo, tip, &current.author_email, baselines, ledger)?;
        }
        current = repo.commit(&current.parents[0])?;
    }
}

/// Phase B: each trunk advance is checked against the access policy that
/// was in force one baseline earlier. The lag is deliberate: a committer is
/// judged against the approved list that existed before their commit, not
/// the one their commit introduces.
fn check_branch_permissions(
    repo: &dyn RepoReader,
    branch: &str,
    policy_file: &str,
    baselines: &[CommitId],
    ledger: &mut IssueLedger,
) -> anyhow::Result<()> {
    for pair in baselines.windows(2) {
        let (newer, older) = (&pair[0], &pair[1]);
        let resolved = policy::resolve(repo, older, policy_file, ledger)?;
        let Some(allowed) = resolved.get(branch) else {
            // An unconfigured branch is unrestricted.
            continue;
        };
        let commit = repo.commit(newer)?;
        if !allowed.contains(&commit.author_email) {
            ledger.record(
                IssueKind::UnauthorizedCommitter,
                Some(format!(
                    "{} committed to {} at {}",
                    commit.author_email, branch, newer
                )),
            );
        }
    }
    Ok(())
}
