// Shared fixture: a throwaway git repository built with git2.
#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'static> {
        Signature::now("Test User", "test@example.com").expect("Could not build signature")
    }

    /// Commit on top of HEAD without touching the work tree.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();
        let tree_id = self
            .repo
            .index()
            .expect("Could not get index")
            .write_tree()
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let parents: Vec<Commit<'_>> = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().expect("HEAD is not a commit")],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .expect("Could not create commit")
    }

    /// Lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Could not create tag");
    }

    /// Annotated tag on HEAD
    pub fn annotated_tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag(name, head.as_object(), &self.signature(), "release", false)
            .expect("Could not create annotated tag");
    }

    /// Tags 1.1.0 and 1.2.0 (plus a non-semver tag) followed by `messages`.
    pub fn released_at_1_2_0(messages: &[&str]) -> Self {
        let repo = TestRepo::new();
        repo.commit("chore: initial commit");
        repo.tag("1.1.0");
        repo.commit("feat: feature shipped in 1.2.0");
        repo.tag("1.2.0");
        repo.tag("not-a-version");
        for message in messages {
            repo.commit(message);
        }
        repo
    }
}
