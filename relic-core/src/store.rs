use crate::error::{Error, Result};
use crate::models::{Commit, ObjectId};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Content-addressed object store over a flat directory.
///
/// File snapshots and commit records share one namespace and one digest
/// function; both are opaque byte payloads here. Interpreting the bytes is
/// the caller's job.
pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    pub(crate) fn new(objects_dir: PathBuf) -> Self {
        Self { objects_dir }
    }

    /// Writes `bytes` under their digest if not already present and returns
    /// the identifier. Safe to call repeatedly with identical input.
    pub fn put_bytes(&self, bytes: &[u8]) -> Result<ObjectId> {
        let id = ObjectId::for_bytes(bytes);
        let path = self.object_path(&id);
        if !path.exists() {
            fs::write(&path, bytes)?;
            tracing::debug!(id = %id, len = bytes.len(), "stored object");
        }
        Ok(id)
    }

    pub fn get_bytes(&self, id: &ObjectId) -> Result<Vec<u8>> {
        match fs::read(self.object_path(id)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn put_commit(&self, commit: &Commit) -> Result<ObjectId> {
        self.put_bytes(&commit.to_canonical_json()?)
    }

    pub fn get_commit(&self, id: &ObjectId) -> Result<Commit> {
        Commit::from_json(&self.get_bytes(id)?)
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.object_path(id).exists()
    }

    fn object_path(&self, id: &ObjectId) -> PathBuf {
        self.objects_dir.join(id.as_str())
    }

    pub(crate) fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }
}
