//! # Core Type Definitions
//!
//! This module contains all core types for the Modulbuch record keeper:
//! - Record identifier (`ModuleId`)
//! - The module entity (`Module`) with its field-level rules
//! - Error types (`StorageError`)
//!
//! ## Entity Rules
//!
//! The entity owns its own validation predicates and derived values, and
//! nothing else. It performs no I/O, produces no user-facing text, and does
//! not re-check the grade range: the form layer bounds a grade before it is
//! ever stored here.

use crate::primitives::MIN_FIELD_LEN;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// RECORD IDENTIFIER
// =============================================================================

/// Unique identifier for a module record.
///
/// Issued by the store's counter, never reused, and never changed after a
/// record is created except when the record is rebuilt on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub u64);

impl ModuleId {
    /// Get the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// MODULE
// =============================================================================

/// One academic module: an identifying number, a title and up to two grades.
///
/// `Module` is a value object. The collection it lives in is owned by the
/// store; the entity holds no back-references and no I/O.
///
/// The wire names (`modulnummer`, `modultitel`, `note1`, `note2`) are part of
/// the persisted snapshot layout. Absent grades are omitted from the
/// encoding, never written as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// The record id. `None` until the store assigns one on first save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ModuleId>,

    /// The module number, e.g. "M335". Trimmed on construction.
    #[serde(rename = "modulnummer")]
    pub number: String,

    /// The module title. Trimmed on construction.
    #[serde(rename = "modultitel")]
    pub title: String,

    /// First grade, if one has been entered.
    #[serde(rename = "note1", skip_serializing_if = "Option::is_none")]
    pub grade1: Option<f64>,

    /// Second grade, if one has been entered.
    #[serde(rename = "note2", skip_serializing_if = "Option::is_none")]
    pub grade2: Option<f64>,
}

impl Module {
    /// Create a transient module with the required fields.
    ///
    /// Surrounding whitespace is trimmed from both fields. The module has no
    /// id until the store assigns one.
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            number: number.into().trim().to_string(),
            title: title.into().trim().to_string(),
            grade1: None,
            grade2: None,
        }
    }

    /// Create a module with all fields set.
    #[must_use]
    pub fn with_id(
        id: ModuleId,
        number: impl Into<String>,
        title: impl Into<String>,
        grade1: Option<f64>,
        grade2: Option<f64>,
    ) -> Self {
        Self {
            id: Some(id),
            number: number.into().trim().to_string(),
            title: title.into().trim().to_string(),
            grade1,
            grade2,
        }
    }

    /// Check that the required fields meet the minimum length.
    ///
    /// True iff `number` and `title`, after trimming, each have at least
    /// [`MIN_FIELD_LEN`] characters. Pure, no side effects.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.number.trim().chars().count() >= MIN_FIELD_LEN
            && self.title.trim().chars().count() >= MIN_FIELD_LEN
    }

    /// Check whether both grades are present.
    #[must_use]
    pub fn has_complete_grades(&self) -> bool {
        self.grade1.is_some() && self.grade2.is_some()
    }

    /// The average of both grades, when both are present.
    ///
    /// Returns `None` otherwise — an average is never computed from a single
    /// grade. Callers must branch on presence before using this for display
    /// or aggregation.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        match (self.grade1, self.grade2) {
            (Some(g1), Some(g2)) => Some((g1 + g2) / 2.0),
            _ => None,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the storage layer.
///
/// - No silent failures
/// - Use `Result<T, StorageError>` for fallible operations
/// - The CORE never panics; all errors are recoverable
///
/// A failed load or save never corrupts the persisted counter or a
/// previously valid snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The durable store could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding a collection to its snapshot string failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A stored record failed to decode into a well-typed module.
    ///
    /// The position is the zero-based index of the record in the stored
    /// array. The whole load fails; no partially-typed collection escapes.
    #[error("Corrupt module record at position {index}: {reason}")]
    CorruptEntry { index: usize, reason: String },

    /// A record without an id was found where only saved records may exist.
    #[error("Module record at position {index} has no id")]
    MissingId { index: usize },

    /// Two records in one collection carry the same id.
    #[error("Duplicate module id {id:?} at position {index}")]
    DuplicateId { index: usize, id: ModuleId },

    /// The stored snapshot exceeds the pre-parse size limit.
    #[error("Snapshot size {size} bytes exceeds maximum allowed {max} bytes")]
    SnapshotTooLarge { size: usize, max: usize },

    /// No record with the requested id exists in the collection.
    #[error("Module not found: {0:?}")]
    ModuleNotFound(ModuleId),
}

// =============================================================================
// TESTS
// =============================================================================
