//! # In-Memory Store
//!
//! A volatile [`ModuleStore`] backend.
//!
//! Holds the same encoded snapshot a durable backend would persist, so load
//! and save behave byte-for-byte like [`super::RedbStore`] — including every
//! decode failure mode — just without the disk.

use crate::formats::{decode_modules, encode_modules};
use crate::primitives::FIRST_ID;
use crate::store::ModuleStore;
use crate::{Module, ModuleId, StorageError};

/// Volatile store backend. All state is lost on drop.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// The encoded snapshot, absent for a fresh store.
    snapshot: Option<String>,
    /// Next id to hand out.
    next_id: u64,
}

impl MemoryStore {
    /// Create a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: None,
            next_id: FIRST_ID,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleStore for MemoryStore {
    fn load_modules(&self) -> Result<Vec<Module>, StorageError> {
        match &self.snapshot {
            Some(snapshot) => decode_modules(snapshot),
            None => Ok(Vec::new()),
        }
    }

    fn save_modules(&mut self, modules: &[Module]) -> Result<(), StorageError> {
        // Encode first so a failed save leaves the prior snapshot intact.
        let snapshot = encode_modules(modules)?;
        self.snapshot = Some(snapshot);
        Ok(())
    }

    fn next_id(&mut self) -> Result<ModuleId, StorageError> {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        Ok(ModuleId(id))
    }
}

// =============================================================================
// TESTS
// =============================================================================
