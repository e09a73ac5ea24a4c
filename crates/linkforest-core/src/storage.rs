//! Persistent storage for the profile bundle using redb.
//!
//! The whole application state is one [`ProfileBundle`] serialized as JSON
//! under a single fixed key. Loading tolerates a corrupt slot by discarding
//! it and falling back to the default bundle.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::LinkForestError;
use crate::types::ProfileBundle;

const BUNDLE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("bundle");

/// The single storage slot key.
const BUNDLE_KEY: &str = "current";

/// Storage layer holding the serialized profile bundle.
#[derive(Clone)]
pub struct BundleStorage {
    db: Arc<RwLock<Database>>,
}

impl BundleStorage {
    /// Create or open the bundle database at the given path.
    ///
    /// Creates the parent directory and the table if they don't exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LinkForestError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(BUNDLE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Save the bundle, overwriting the previous slot contents.
    pub fn save(&self, bundle: &ProfileBundle) -> Result<(), LinkForestError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(BUNDLE_TABLE)?;
            let data = serde_json::to_vec(bundle)?;
            table.insert(BUNDLE_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the stored bundle.
    ///
    /// Returns `None` when the slot is empty. An unparseable slot is treated
    /// as corruption: the entry is cleared and `None` returned so the caller
    /// starts from the default bundle.
    pub fn load(&self) -> Result<Option<ProfileBundle>, LinkForestError> {
        let raw = {
            let db = self.db.read();
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(BUNDLE_TABLE)?;
            match table.get(BUNDLE_KEY)? {
                Some(v) => v.value().to_vec(),
                None => return Ok(None),
            }
        };

        match serde_json::from_slice::<ProfileBundle>(&raw) {
            Ok(bundle) => Ok(Some(bundle)),
            Err(e) => {
                tracing::warn!("Discarding corrupt stored bundle: {}", e);
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Remove the stored bundle, if any.
    pub fn clear(&self) -> Result<(), LinkForestError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(BUNDLE_TABLE)?;
            let _ = table.remove(BUNDLE_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Insert raw bytes into the slot (tests use this to simulate corruption).
    #[cfg(test)]
    fn save_raw(&self, data: &[u8]) -> Result<(), LinkForestError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(BUNDLE_TABLE)?;
            table.insert(BUNDLE_KEY, data)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinkEntry, TemplateId};

    fn temp_storage() -> (tempfile::TempDir, BundleStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = BundleStorage::open(dir.path().join("bundle.redb")).unwrap();
        (dir, storage)
    }

    #[test]
    fn empty_slot_loads_as_none() {
        let (_dir, storage) = temp_storage();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let (_dir, storage) = temp_storage();
        let mut bundle = ProfileBundle::default();
        bundle.template = TemplateId::from("cards");
        bundle.links.push(LinkEntry {
            id: "01".to_string(),
            title: "My Website".to_string(),
            target_url: "https://example.com".to_string(),
            active: true,
        });

        storage.save(&bundle).unwrap();
        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, bundle);
    }

    #[test]
    fn corrupt_slot_is_cleared_and_ignored() {
        let (_dir, storage) = temp_storage();
        storage.save_raw(b"{not valid json").unwrap();

        assert!(storage.load().unwrap().is_none());
        // The corrupt entry was discarded, so a second load is a clean miss.
        assert!(storage.load().unwrap().is_none());
    }
}
