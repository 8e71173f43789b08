use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Ordered list of filenames staged for the next commit.
///
/// Persisted as a JSON array; insertion order is preserved and duplicates
/// are rejected. The list survives across process invocations and is
/// cleared only by a successful commit.
pub struct Index {
    path: PathBuf,
    entries: Vec<String>,
}

impl Index {
    pub(crate) fn create(path: PathBuf) -> Result<Self> {
        let index = Self {
            path,
            entries: Vec::new(),
        };
        index.save()?;
        Ok(index)
    }

    pub(crate) fn load(path: PathBuf) -> Result<Self> {
        let text = fs::read_to_string(&path)?;
        let entries = serde_json::from_str(&text)?;
        Ok(Self { path, entries })
    }

    /// Appends `filename` unless already present. Returns whether the entry
    /// was newly added; re-staging an existing entry is a persisted no-op.
    pub fn stage(&mut self, filename: &str) -> Result<bool> {
        if self.entries.iter().any(|e| e == filename) {
            return Ok(false);
        }
        self.entries.push(filename.to_string());
        self.save()?;
        Ok(true)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
    }

    fn save(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string(&self.entries)?)?;
        Ok(())
    }
}
