use assert_cmd::Command;
use git2::{Oid, Repository, Signature};
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixture git repository built object-by-object, so merge commits and
/// per-commit file contents can be shaped exactly.
pub struct FixtureRepo {
    _tmp: TempDir,
    pub path: PathBuf,
    pub repo: Repository,
}

impl FixtureRepo {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("repo");
        let repo = Repository::init(&path).expect("init repository");
        Self {
            _tmp: tmp,
            path,
            repo,
        }
    }

    /// Writes a commit with the given author, parents, and file changes.
    /// The first parent's tree is carried forward; `files` overlay it.
    /// Does not move any ref; call `set_head` once the graph is built.
    pub fn commit(
        &self,
        email: &str,
        message: &str,
        parents: &[Oid],
        files: &[(&str, &str)],
    ) -> Oid {
        let base_tree = parents.first().map(|oid| {
            self.repo
                .find_commit(*oid)
                .expect("find parent commit")
                .tree()
                .expect("parent tree")
        });
        let mut builder = self
            .repo
            .treebuilder(base_tree.as_ref())
            .expect("treebuilder");
        for (name, content) in files {
            let blob = self.repo.blob(content.as_bytes()).expect("write blob");
            builder.insert(*name, blob, 0o100644).expect("insert blob");
        }
        let tree_id = builder.write().expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");

        let parent_commits: Vec<_> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit> = parent_commits.iter().collect();
        let sig = Signature::now("Fixture", email).expect("signature");
        self.repo
            .commit(None, &sig, &sig, message, &tree, &parent_refs)
            .expect("write commit")
    }

    pub fn set_head(&self, oid: Oid) {
        self.repo
            .reference("refs/heads/master", oid, true, "fixture head")
            .expect("update master");
        self.repo.set_head("refs/heads/master").expect("set head");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("trunkcheck").expect("binary built");
        cmd.arg(&self.path);
        cmd
    }
}

/// root -> feature (by `feature_author`) -> merge (by `merge_author`).
/// The smallest history whose trunk is all merges.
pub fn single_merge_repo(feature_author: &str, merge_author: &str) -> FixtureRepo {
    let fx = FixtureRepo::new();
    let root = fx.commit("root@example.com", "root", &[], &[("README", "hello\n")]);
    let feature = fx.commit(feature_author, "feature work", &[root], &[("f.txt", "f\n")]);
    let merge = fx.commit(merge_author, "merge feature", &[root, feature], &[]);
    fx.set_head(merge);
    fx
}
