//! # redb-backed Module Store
//!
//! The durable [`ModuleStore`] backend, using the redb embedded database.
//!
//! One database file is the named durable store. It carries exactly two
//! pieces of state:
//! - the collection snapshot under the key `modules`
//! - the next-id counter under the key `next_id`
//!
//! Every save replaces the snapshot in one ACID write transaction, so a
//! previously valid snapshot is never left half-overwritten. The counter's
//! read-modify-write also runs inside a single write transaction: two calls
//! can never observe the same value.

use crate::formats::{decode_modules, encode_modules};
use crate::primitives::{FIRST_ID, MODULES_KEY, NEXT_ID_KEY};
use crate::store::ModuleStore;
use crate::{Module, ModuleId, StorageError};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;

/// Table for collection snapshots: key string -> encoded array string.
const SNAPSHOTS: TableDefinition<&str, &str> = TableDefinition::new("snapshots");

/// Table for metadata counters: key string -> value u64.
const METADATA: TableDefinition<&str, u64> = TableDefinition::new("metadata");

/// A disk-backed module store using redb.
pub struct RedbStore {
    /// The redb database handle.
    db: Database,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl RedbStore {
    /// Open or create a module store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path.as_ref()).map_err(|e| StorageError::Io(e.to_string()))?;

        // Initialize tables if they don't exist
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| StorageError::Io(e.to_string()))?;
            let _ = write_txn
                .open_table(SNAPSHOTS)
                .map_err(|e| StorageError::Io(e.to_string()))?;
            let _ = write_txn
                .open_table(METADATA)
                .map_err(|e| StorageError::Io(e.to_string()))?;
            write_txn
                .commit()
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        Ok(Self { db })
    }
}

// =============================================================================
// MODULESTORE TRAIT IMPLEMENTATION
// =============================================================================

impl ModuleStore for RedbStore {
    fn load_modules(&self) -> Result<Vec<Module>, StorageError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        let table = read_txn
            .open_table(SNAPSHOTS)
            .map_err(|e| StorageError::Io(e.to_string()))?;

        match table
            .get(MODULES_KEY)
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            Some(snapshot) => decode_modules(snapshot.value()),
            None => Ok(Vec::new()),
        }
    }

    fn save_modules(&mut self, modules: &[Module]) -> Result<(), StorageError> {
        // Encode before opening the transaction: an unencodable collection
        // must leave the stored snapshot untouched.
        let snapshot = encode_modules(modules)?;

        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(SNAPSHOTS)
                .map_err(|e| StorageError::Io(e.to_string()))?;
            table
                .insert(MODULES_KEY, snapshot.as_str())
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(())
    }

    fn next_id(&mut self) -> Result<ModuleId, StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let id = {
            let mut table = write_txn
                .open_table(METADATA)
                .map_err(|e| StorageError::Io(e.to_string()))?;

            let current = table
                .get(NEXT_ID_KEY)
                .map_err(|e| StorageError::Io(e.to_string()))?
                .map(|v| v.value())
                .unwrap_or(FIRST_ID);

            table
                .insert(NEXT_ID_KEY, current.saturating_add(1))
                .map_err(|e| StorageError::Io(e.to_string()))?;

            current
        };

        write_txn
            .commit()
            .map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(ModuleId(id))
    }
}

// =============================================================================
// TESTS
// =============================================================================
