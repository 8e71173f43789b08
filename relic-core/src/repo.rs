use crate::error::{Error, Result};
use crate::index::Index;
use crate::models::{Commit, ObjectId};
use crate::store::ObjectStore;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const REPO_DIR: &str = ".relic";
const OBJECTS_DIR: &str = "objects";
const INDEX_FILE: &str = "index";
const HEAD_FILE: &str = "HEAD";

/// An opened repository rooted at a working directory.
///
/// Holding a `Repository` value is the initialization guarantee: it can only
/// be obtained through [`Repository::init`] or [`Repository::open`], both of
/// which check the on-disk layout. All paths are resolved against the root,
/// never against ambient process state.
pub struct Repository {
    root: PathBuf,
    store: ObjectStore,
}

impl Repository {
    /// Creates the repository layout under `root` and returns the opened
    /// handle. The object directory, empty staging index and empty head
    /// reference are created as one bootstrap action.
    pub fn init<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let repo_dir = root.join(REPO_DIR);
        if repo_dir.exists() {
            return Err(Error::AlreadyInitialized);
        }

        fs::create_dir_all(repo_dir.join(OBJECTS_DIR))?;
        Index::create(repo_dir.join(INDEX_FILE))?;
        fs::write(repo_dir.join(HEAD_FILE), "")?;
        tracing::debug!(root = %root.display(), "initialized repository");

        Self::open(root)
    }

    /// Opens an existing repository under `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let repo_dir = root.join(REPO_DIR);
        if !repo_dir.exists() {
            return Err(Error::NotInitialized);
        }

        Ok(Self {
            root: root.to_path_buf(),
            store: ObjectStore::new(repo_dir.join(OBJECTS_DIR)),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    /// Stages `filename` for the next commit. The file must exist on disk
    /// at stage time; its content is not read until commit. Re-staging an
    /// already-staged name is a no-op.
    pub fn stage(&self, filename: &str) -> Result<bool> {
        if !self.root.join(filename).exists() {
            return Err(Error::FileNotFound(filename.to_string()));
        }
        self.index()?.stage(filename)
    }

    pub fn staged(&self) -> Result<Vec<String>> {
        Ok(self.index()?.entries().to_vec())
    }

    pub fn head(&self) -> Result<Option<ObjectId>> {
        let text = fs::read_to_string(self.repo_dir().join(HEAD_FILE))?;
        let text = text.trim();
        if text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::from_hex(text)?))
        }
    }

    /// Commits the staged files.
    ///
    /// Reads each staged file's current content (which may differ from what
    /// existed at stage time), stores the blobs, writes the commit record
    /// with the current head as parent, advances the head and clears the
    /// index. Files deleted since staging are skipped with a warning; they
    /// are simply absent from the snapshot. The head and index are mutated
    /// last, so a crash mid-commit leaves only orphaned blobs behind.
    pub fn commit(&self, message: &str) -> Result<ObjectId> {
        let mut index = self.index()?;
        if index.is_empty() {
            return Err(Error::NothingToCommit);
        }

        let mut snapshot = BTreeMap::new();
        for filename in index.entries() {
            let bytes = match fs::read(self.root.join(filename)) {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::warn!(file = %filename, "staged file missing at commit time, skipping");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            let id = self.store.put_bytes(&bytes)?;
            snapshot.insert(filename.clone(), id);
        }

        let commit = Commit::new(message.to_string(), snapshot, self.head()?);
        let id = self.store.put_commit(&commit)?;

        fs::write(self.repo_dir().join(HEAD_FILE), id.as_str())?;
        index.clear()?;
        tracing::debug!(id = %id, "created commit");

        Ok(id)
    }

    /// Walks the commit chain from the current head, newest first.
    pub fn history(&self) -> Result<History<'_>> {
        Ok(History {
            store: &self.store,
            next: self.head()?,
        })
    }

    fn repo_dir(&self) -> PathBuf {
        self.root.join(REPO_DIR)
    }

    fn index(&self) -> Result<Index> {
        Index::load(self.repo_dir().join(INDEX_FILE))
    }
}

/// Pull-based backward traversal of the commit chain.
///
/// Each step resolves one identifier in the store and advances to its
/// parent. Any identifier the store cannot resolve - head included - is an
/// integrity failure yielded as [`Error::CorruptHistory`], after which the
/// iterator is exhausted.
pub struct History<'a> {
    store: &'a ObjectStore,
    next: Option<ObjectId>,
}

impl Iterator for History<'_> {
    type Item = Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        match self.store.get_commit(&id) {
            Ok(commit) => {
                self.next = commit.parent.clone();
                Some(Ok((id, commit)))
            }
            Err(Error::ObjectNotFound(_)) => Some(Err(Error::CorruptHistory(id.to_string()))),
            Err(e) => Some(Err(e)),
        }
    }
}
