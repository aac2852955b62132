//! # Property-Based Tests
//!
//! These tests pin the entity's field rules, the derived average, and the
//! store laws (round-trip, id monotonicity) over generated inputs.

use modulbuch_core::primitives::MIN_FIELD_LEN;
use modulbuch_core::{MemoryStore, Module, ModuleId, ModuleStore};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

/// Strategy for a module body without an id: number, title and two optional
/// in-range grades.
fn module_body() -> impl Strategy<Value = (String, String, Option<f64>, Option<f64>)> {
    (
        "[A-Za-z0-9 ]{0,12}",
        "[A-Za-z0-9 ]{0,24}",
        option::of(1.0f64..=6.0),
        option::of(1.0f64..=6.0),
    )
}

/// Assign sequential ids the way the store would on first save.
fn with_ids(bodies: Vec<(String, String, Option<f64>, Option<f64>)>) -> Vec<Module> {
    bodies
        .into_iter()
        .enumerate()
        .map(|(i, (number, title, grade1, grade2))| {
            Module::with_id(ModuleId(i as u64 + 1), number, title, grade1, grade2)
        })
        .collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// A module is valid exactly when both trimmed fields reach the minimum
    /// length.
    #[test]
    fn valid_iff_trimmed_length_reaches_minimum(s in ".{0,24}") {
        let module = Module::new(s.clone(), s.clone());
        let expected = s.trim().chars().count() >= MIN_FIELD_LEN;

        prop_assert_eq!(module.is_valid(), expected);
    }

    /// With both grades present the average is their midpoint.
    #[test]
    fn average_is_midpoint(g1 in 1.0f64..=6.0, g2 in 1.0f64..=6.0) {
        let module = Module::with_id(ModuleId(1), "M335", "Mobile Apps", Some(g1), Some(g2));

        prop_assert!(module.has_complete_grades());
        prop_assert_eq!(module.average(), Some((g1 + g2) / 2.0));
    }

    /// A single grade never produces an average.
    #[test]
    fn single_grade_has_no_average(g in 1.0f64..=6.0, second in any::<bool>()) {
        let (grade1, grade2) = if second { (None, Some(g)) } else { (Some(g), None) };
        let module = Module::with_id(ModuleId(1), "M335", "Mobile Apps", grade1, grade2);

        prop_assert!(!module.has_complete_grades());
        prop_assert_eq!(module.average(), None);
    }

    /// Save followed by load yields the same collection: ids, fields, grade
    /// presence and values all survive.
    #[test]
    fn save_load_roundtrip(bodies in vec(module_body(), 0..20)) {
        let modules = with_ids(bodies);
        let mut store = MemoryStore::new();

        store.save_modules(&modules).expect("save");
        let loaded = store.load_modules().expect("load");

        prop_assert_eq!(loaded, modules);
    }

    /// N sequential counter calls return 1, 2, ..., N with no repeats, even
    /// with loads and saves interleaved between them.
    #[test]
    fn next_id_is_monotonic(n in 1usize..40) {
        let mut store = MemoryStore::new();
        let mut modules = Vec::new();

        for expected in 1..=n {
            let id = store.next_id().expect("id");
            prop_assert_eq!(id, ModuleId(expected as u64));

            modules.push(Module::with_id(id, "M335", "Mobile Apps", None, None));
            store.save_modules(&modules).expect("save");
            let loaded = store.load_modules().expect("load");
            prop_assert_eq!(loaded.len(), expected);
        }
    }
}
