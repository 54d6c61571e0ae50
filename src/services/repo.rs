use anyhow::Context;
use std::fmt;
use std::path::Path;

/// Content-addressed commit identifier (hex object id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(pub String);

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the audit needs to know about one commit. Tree contents are
/// read on demand via `RepoReader::read_file`, never stored here.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub id: CommitId,
    pub author_email: String,
    pub summary: String,
    /// Parent ids in recorded order; parent 0 is treated as the previous
    /// position of the branch everywhere in this crate.
    pub parents: Vec<CommitId>,
}

/// Read-only access to a repository's commit graph.
///
/// The audit engine only ever sees this trait; `GitRepo` adapts git2 to it
/// and the unit tests substitute a hand-built in-memory graph.
pub trait RepoReader {
    fn head(&self) -> anyhow::Result<CommitId>;
    fn commit(&self, id: &CommitId) -> anyhow::Result<CommitInfo>;
    /// Content of the named top-level tree entry at `id`, or `None` when
    /// the tree has no entry of that name.
    fn read_file(&self, id: &CommitId, name: &str) -> anyhow::Result<Option<String>>;
}

pub struct GitRepo {
    inner: git2::Repository,
}

impl GitRepo {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let inner = git2::Repository::open(path)
            .with_context(|| format!("failed to open git repository {}", path.display()))?;
        Ok(Self { inner })
    }

    fn find(&self, id: &CommitId) -> anyhow::Result<git2::Commit<'_>> {
        let oid = git2::Oid::from_str(&id.0)
            .with_context(|| format!("invalid commit id {}", id))?;
        self.inner
            .find_commit(oid)
            .with_context(|| format!("commit {} not found", id))
    }
}

impl RepoReader for GitRepo {
    fn head(&self) -> anyhow::Result<CommitId> {
        let head = self
            .inner
            .head()
            .context("repository has no resolvable head")?
            .peel_to_commit()
            .context("head does not point at a commit")?;
        Ok(CommitId(head.id().to_string()))
    }

    fn commit(&self, id: &CommitId) -> anyhow::Result<CommitInfo> {
        let commit = self.find(id)?;
        let info = CommitInfo {
            id: CommitId(commit.id().to_string()),
            author_email: commit.author().email().unwrap_or_default().to_string(),
            summary: commit.summary().unwrap_or_default().to_string(),
            parents: commit.parent_ids().map(|p| CommitId(p.to_string())).collect(),
        };
        Ok(info)
    }

    fn read_file(&self, id: &CommitId, name: &str) -> anyhow::Result<Option<String>> {
        let commit = self.find(id)?;
        let tree = commit.tree()?;
        let entry = match tree.get_name(name) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let blob = self
            .inner
            .find_blob(entry.id())
            .with_context(|| format!("{} at {} is not a readable blob", name, id))?;
        Ok(Some(String::from_utf8_lossy(blob.content()).into_owned()))
    }
}
