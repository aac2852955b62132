//! # Snapshot Format
//!
//! String serialization for module collections.
//!
//! The whole collection is one JSON array string — a full snapshot, not an
//! incremental log. Each record carries `id`, `modulnummer` and `modultitel`;
//! `note1` and `note2` appear only when the grade is set. Absence decodes
//! back to "no grade", never to a zero grade.
//!
//! ## Decode policy
//!
//! A record that cannot be decoded fails the whole call with the record's
//! position. The codec never returns a partially-typed collection: a caller
//! either gets every record well-typed or a structured error.
//!
//! ## Limits
//!
//! Snapshot size is validated BEFORE parsing to prevent allocation from a
//! corrupted or malicious store.

use crate::primitives::MAX_SNAPSHOT_SIZE;
use crate::{Module, ModuleId, StorageError};
use std::collections::BTreeSet;

// =============================================================================
// COLLECTION INVARIANTS
// =============================================================================

/// Check that every record has an id and that no id occurs twice.
///
/// Both encode and decode funnel through this check: a record without an id
/// must never reach durable storage, and two records may never share one.
fn verify_collection(modules: &[Module]) -> Result<(), StorageError> {
    let mut seen: BTreeSet<ModuleId> = BTreeSet::new();
    for (index, module) in modules.iter().enumerate() {
        let id = module.id.ok_or(StorageError::MissingId { index })?;
        if !seen.insert(id) {
            return Err(StorageError::DuplicateId { index, id });
        }
    }
    Ok(())
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Encode an ordered collection as a single snapshot string.
///
/// This is a pure transformation - no I/O. Fails without producing output if
/// a record has no id or a duplicate id, so a broken collection can never
/// overwrite a valid stored snapshot.
pub fn encode_modules(modules: &[Module]) -> Result<String, StorageError> {
    verify_collection(modules)?;
    serde_json::to_string(modules).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode a snapshot string into an ordered collection.
///
/// This is a pure transformation - no I/O. The stored order is preserved.
pub fn decode_modules(snapshot: &str) -> Result<Vec<Module>, StorageError> {
    if snapshot.len() > MAX_SNAPSHOT_SIZE {
        return Err(StorageError::SnapshotTooLarge {
            size: snapshot.len(),
            max: MAX_SNAPSHOT_SIZE,
        });
    }

    let entries: Vec<serde_json::Value> = serde_json::from_str(snapshot)
        .map_err(|e| StorageError::Serialization(format!("Snapshot is not a record array: {e}")))?;

    let mut modules = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let module: Module = serde_json::from_value(entry).map_err(|e| {
            StorageError::CorruptEntry {
                index,
                reason: e.to_string(),
            }
        })?;
        modules.push(module);
    }

    verify_collection(&modules)?;
    Ok(modules)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample() -> Vec<Module> {
        vec![
            Module::with_id(ModuleId(1), "M335", "Mobile Apps", Some(5.0), Some(4.5)),
            Module::with_id(ModuleId(2), "M242", "Embedded Systems", Some(3.0), None),
            Module::with_id(ModuleId(3), "M450", "Testing Basics", None, None),
        ]
    }

    #[test]
    fn roundtrip_preserves_order_and_grades() {
        let modules = sample();
        let snapshot = encode_modules(&modules).expect("encode");
        let restored = decode_modules(&snapshot).expect("decode");

        assert_eq!(restored, modules);
    }

    #[test]
    fn absent_grade_is_omitted_not_null() {
        let modules = vec![Module::with_id(
            ModuleId(1),
            "M242",
            "Embedded Systems",
            Some(3.0),
            None,
        )];
        let snapshot = encode_modules(&modules).expect("encode");

        assert!(snapshot.contains("\"note1\""));
        assert!(!snapshot.contains("\"note2\""));
        assert!(!snapshot.contains("null"));
    }

    #[test]
    fn wire_field_names() {
        let modules = vec![Module::with_id(ModuleId(1), "M335", "Mobile Apps", None, None)];
        let snapshot = encode_modules(&modules).expect("encode");

        assert!(snapshot.contains("\"id\":1"));
        assert!(snapshot.contains("\"modulnummer\":\"M335\""));
        assert!(snapshot.contains("\"modultitel\":\"Mobile Apps\""));
    }

    #[test]
    fn record_without_id_rejected_on_encode() {
        let modules = vec![
            Module::with_id(ModuleId(1), "M335", "Mobile Apps", None, None),
            Module::new("M242", "Embedded Systems"),
        ];

        let result = encode_modules(&modules);
        assert!(matches!(result, Err(StorageError::MissingId { index: 1 })));
    }

    #[test]
    fn record_without_id_rejected_on_decode() {
        let snapshot = r#"[{"modulnummer":"M335","modultitel":"Mobile Apps"}]"#;

        let result = decode_modules(snapshot);
        assert!(matches!(result, Err(StorageError::MissingId { index: 0 })));
    }

    #[test]
    fn duplicate_id_rejected() {
        let modules = vec![
            Module::with_id(ModuleId(1), "M335", "Mobile Apps", None, None),
            Module::with_id(ModuleId(1), "M242", "Embedded Systems", None, None),
        ];

        let result = encode_modules(&modules);
        assert!(matches!(
            result,
            Err(StorageError::DuplicateId {
                index: 1,
                id: ModuleId(1)
            })
        ));
    }

    #[test]
    fn corrupt_entry_names_its_position() {
        let snapshot = r#"[
            {"id":1,"modulnummer":"M335","modultitel":"Mobile Apps"},
            {"id":2,"modulnummer":"M242","modultitel":"Embedded Systems","note1":"not a number"}
        ]"#;

        match decode_modules(snapshot) {
            Err(StorageError::CorruptEntry { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected corrupt entry, got {other:?}"),
        }
    }

    #[test]
    fn non_array_snapshot_rejected() {
        let result = decode_modules(r#"{"id":1}"#);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn empty_array_decodes_to_empty_collection() {
        let modules = decode_modules("[]").expect("decode");
        assert!(modules.is_empty());
    }
}
