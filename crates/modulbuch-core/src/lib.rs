//! # modulbuch-core
//!
//! The record-keeping core for Modulbuch - THE LOGIC.
//!
//! This crate implements the data/storage subsystem of a small personal
//! gradebook: the module entity with its field rules, the snapshot codec,
//! and the durable module store with unique-id assignment.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is the ONLY place where records persist (stateful)
//! - Owns no display strings and no form logic; the app layer consumes the
//!   entity's predicates to drive its own messages
//! - Has NO async, NO network dependencies (pure Rust)
//! - Never panics; every fallible operation returns `Result`

// =============================================================================
// MODULES
// =============================================================================

pub mod formats;
pub mod primitives;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Module, ModuleId, StorageError};

// =============================================================================
// RE-EXPORTS: Store
// =============================================================================

pub use store::{MemoryStore, ModuleStore, RedbStore};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{decode_modules, encode_modules};
