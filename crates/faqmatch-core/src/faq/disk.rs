//! Disk-backed FAQ store (simple file-per-entry layout).

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use rkyv::rancor::Error as RkyvError;
use rkyv::{from_bytes, to_bytes};
use tracing::warn;

use super::error::{StoreError, StoreResult};
use super::model::FaqEntry;
use super::store::FaqStore;

const RKYV_EXTENSION: &str = "rkyv";

const TEMP_EXTENSION: &str = "rkyv.tmp";

/// Stores [`FaqEntry`] records under `{root}/{owner_id}/{entry_id}.rkyv`.
///
/// Writes go through a temp file and an atomic rename so readers never see a
/// partial record. Unreadable files are skipped with a warning when listing;
/// one corrupt entry must not take down an owner's whole FAQ set.
#[derive(Debug, Clone)]
pub struct DiskFaqStore {
    root: PathBuf,
}

impl DiskFaqStore {
    /// Creates a store rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the root storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensures the root storage directory exists.
    pub fn ensure_root(&self) -> StoreResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|_| StoreError::StorageUnavailable {
                path: self.root.clone(),
            })?;
        }
        Ok(())
    }

    fn owner_path(&self, owner_id: u64) -> PathBuf {
        self.root.join(owner_id.to_string())
    }

    fn entry_path(&self, owner_id: u64, entry_id: u64) -> PathBuf {
        self.owner_path(owner_id)
            .join(format!("{}.{}", entry_id, RKYV_EXTENSION))
    }

    fn temp_entry_path(&self, owner_id: u64, entry_id: u64) -> PathBuf {
        self.owner_path(owner_id)
            .join(format!("{}.{}", entry_id, TEMP_EXTENSION))
    }

    fn ensure_owner_dir(&self, owner_id: u64) -> StoreResult<()> {
        let owner_path = self.owner_path(owner_id);
        if !owner_path.exists() {
            fs::create_dir_all(&owner_path)
                .map_err(|_| StoreError::OwnerDirCreationFailed { path: owner_path })?;
        }
        Ok(())
    }

    /// Deletes the `(owner_id, entry_id)` record if present.
    pub fn delete(&self, owner_id: u64, entry_id: u64) -> StoreResult<bool> {
        let path = self.entry_path(owner_id, entry_id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    fn load_entry(&self, path: &Path) -> StoreResult<FaqEntry> {
        let bytes = fs::read(path)?;
        from_bytes::<FaqEntry, RkyvError>(&bytes)
            .map_err(|e| StoreError::Deserialization(format!("{:?}", e)))
    }
}

impl FaqStore for DiskFaqStore {
    fn insert(&self, entry: FaqEntry) -> StoreResult<()> {
        self.ensure_root()?;
        self.ensure_owner_dir(entry.owner_id)?;

        let bytes =
            to_bytes::<RkyvError>(&entry).map_err(|e| StoreError::Serialization(format!("{:?}", e)))?;

        let temp_path = self.temp_entry_path(entry.owner_id, entry.id);
        let final_path = self.entry_path(entry.owner_id, entry.id);

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    fn entries_for_owner(&self, owner_id: u64) -> StoreResult<Vec<FaqEntry>> {
        let owner_path = self.owner_path(owner_id);
        if !owner_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&owner_path)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();

            // Temp files carry a `.tmp` extension and are skipped here.
            if !path.extension().is_some_and(|ext| ext == RKYV_EXTENSION) {
                continue;
            }

            match self.load_entry(&path) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable FAQ record");
                }
            }
        }

        // Directory listing order is arbitrary; sort to keep enumeration
        // order stable for tie-breaking.
        entries.sort_by_key(|e| (e.created_at, e.id));

        Ok(entries)
    }

    fn count_for_owner(&self, owner_id: u64) -> StoreResult<u64> {
        Ok(self.entries_for_owner(owner_id)?.len() as u64)
    }
}
