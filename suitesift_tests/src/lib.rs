//! Helpers for tests that need a real git repository on disk.

use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Oid, Repository, Signature};

pub struct TempRepo {
    dir: tempfile::TempDir,
    repo: Repository,
}

impl TempRepo {
    pub fn init() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("suitesift-repo-")
            .tempdir()
            .unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) {
        write_file(&self.join(rel), contents);
    }

    /// Stages everything in the work tree and commits it on top of `HEAD`.
    pub fn commit_all(&self, message: &str) -> Oid {
        let mut index = self.repo.index().unwrap();
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("suitesift-test", "suitesift-test@example.com").unwrap();
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents = parent.iter().collect::<Vec<_>>();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// `file://` URL for a local path, as accepted by `--sha-url`.
pub fn file_url(path: &Path) -> String {
    let slashed = path.to_string_lossy().replace('\\', "/");
    if slashed.starts_with('/') {
        format!("file://{slashed}")
    } else {
        format!("file:///{slashed}")
    }
}
