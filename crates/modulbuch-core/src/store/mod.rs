//! # Module Store
//!
//! Durable persistence of the full module collection and generation of
//! unique ids.
//!
//! The store owns no business rules and generates no user-facing text; the
//! entity owns no I/O. Two backends implement the same contract:
//! - [`MemoryStore`]: volatile, for tests and ephemeral sessions
//! - [`RedbStore`]: disk-backed ACID storage using redb
//!
//! ## Concurrency
//!
//! Every operation is synchronous and runs to completion before returning.
//! Mutating operations take `&mut self`, so a store shared across threads
//! must be wrapped in a `Mutex` (or similar) by the caller; otherwise the
//! counter's read-modify-write and a load/save pair could interleave.

pub mod memory;
pub mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use crate::{Module, ModuleId, StorageError};

// =============================================================================
// MODULESTORE TRAIT
// =============================================================================

/// The ModuleStore trait defines the persistence operations the caller layer
/// consumes.
///
/// All fallible operations return `Result<T, StorageError>` to support both
/// volatile and persistent backends uniformly. The store is stateless across
/// calls apart from the persisted snapshot and the persisted counter; every
/// call re-reads or re-writes the full durable state.
pub trait ModuleStore {
    /// Read the stored snapshot and decode it into an ordered collection.
    ///
    /// An absent snapshot is a fresh store and yields an empty collection,
    /// not an error. A snapshot that fails to decode fails the whole call.
    fn load_modules(&self) -> Result<Vec<Module>, StorageError>;

    /// Encode the ordered collection and overwrite the stored snapshot.
    ///
    /// This is a full snapshot replacement, not an incremental update. The
    /// collection is encoded before anything is written: a failed save
    /// leaves the prior stored value unchanged.
    fn save_modules(&mut self, modules: &[Module]) -> Result<(), StorageError>;

    /// Return the current counter value, then increment and persist it.
    ///
    /// Ids start at [`crate::primitives::FIRST_ID`] for a fresh store and
    /// are never reused. This is the single source of new ids; callers never
    /// self-assign.
    fn next_id(&mut self) -> Result<ModuleId, StorageError>;
}
