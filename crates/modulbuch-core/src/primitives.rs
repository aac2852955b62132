//! # Record Primitives
//!
//! Hardcoded constants for the Modulbuch CORE.
//!
//! A fresh store starts with zero data but fixed rules. These primitives are
//! compiled into the binary and are immutable at runtime.

/// Minimum length for the `number` and `title` fields after trimming.
///
/// A module is valid only when both required fields reach this length.
pub const MIN_FIELD_LEN: usize = 4;

/// Lower bound of the grade scale (inclusive).
///
/// The entity stores whatever value it is given; the bound is enforced by the
/// form layer before a grade ever reaches the entity.
pub const GRADE_MIN: f64 = 1.0;

/// Upper bound of the grade scale (inclusive).
pub const GRADE_MAX: f64 = 6.0;

/// Storage key holding the encoded module collection.
///
/// The whole collection lives under this single key as one snapshot string.
pub const MODULES_KEY: &str = "modules";

/// Storage key holding the next-id counter.
pub const NEXT_ID_KEY: &str = "next_id";

/// First id handed out by a fresh store.
///
/// Ids increase monotonically from here and are never reused.
pub const FIRST_ID: u64 = 1;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum allowed size of an encoded snapshot, in bytes.
///
/// Snapshots larger than this are rejected before any parsing happens.
/// This prevents memory exhaustion from a corrupted or malicious store.
pub const MAX_SNAPSHOT_SIZE: usize = 16 * 1024 * 1024; // 16 MB
