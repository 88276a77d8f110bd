//! Lookup functions for cascading selection.
//!
//! Each function flattens one level of the dataset into `{key, name}` pairs.
//! An unknown key anywhere along the way yields an empty list, never an error.

use crate::dataset;
use crate::models::{Entry, SelectionPath};

/// Key for the polling unit at zero-based `index` in its ward's list
pub fn polling_unit_key(index: usize) -> String {
    format!("pu-{}", index + 1)
}

/// All states
pub fn list_states() -> Vec<Entry> {
    dataset::states()
        .iter()
        .map(|state| Entry::new(state.key, state.name))
        .collect()
}

/// LGAs of a state, or nothing if the state is unknown
pub fn list_lgas(state_key: &str) -> Vec<Entry> {
    dataset::find_state(state_key)
        .map(|state| {
            state
                .lgas
                .iter()
                .map(|lga| Entry::new(lga.key, lga.name))
                .collect()
        })
        .unwrap_or_default()
}

/// Wards of an LGA, or nothing if either key is unknown
pub fn list_wards(state_key: &str, lga_key: &str) -> Vec<Entry> {
    dataset::find_lga(state_key, lga_key)
        .map(|lga| {
            lga.wards
                .iter()
                .map(|ward| Entry::new(ward.key, ward.name))
                .collect()
        })
        .unwrap_or_default()
}

/// Polling units of a ward keyed `pu-1`, `pu-2`, ... by list position
pub fn list_polling_units(state_key: &str, lga_key: &str, ward_key: &str) -> Vec<Entry> {
    dataset::find_ward(state_key, lga_key, ward_key)
        .map(|ward| {
            ward.polling_units
                .iter()
                .enumerate()
                .map(|(i, label)| Entry::new(polling_unit_key(i), *label))
                .collect()
        })
        .unwrap_or_default()
}

/// Entries directly below `path`: states for the root path, LGAs for a state,
/// and so on down to polling units.
pub fn list_children(path: &SelectionPath) -> Vec<Entry> {
    match (path.state(), path.lga(), path.ward()) {
        (None, _, _) => list_states(),
        (Some(state), None, _) => list_lgas(state),
        (Some(state), Some(lga), None) => list_wards(state, lga),
        (Some(state), Some(lga), Some(ward)) => list_polling_units(state, lga, ward),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_include_lagos() {
        let expected = Entry::new("lagos", "Lagos");
        assert!(list_states().contains(&expected));
    }

    #[test]
    fn test_states_in_declared_order() {
        let states = list_states();
        let keys: Vec<&str> = states.iter().map(Entry::key).collect();
        let declared: Vec<&str> = dataset::states().iter().map(|s| s.key).collect();
        assert_eq!(keys, declared);
        assert_eq!(keys.first(), Some(&"abia"));
    }

    #[test]
    fn test_lgas_include_ikeja() {
        let expected = Entry::new("ikeja", "Ikeja");
        assert!(list_lgas("lagos").contains(&expected));
    }

    #[test]
    fn test_lgas_match_state_record_for_every_state() {
        for state in dataset::states() {
            let lgas = list_lgas(state.key);
            let listed: Vec<&str> = lgas.iter().map(Entry::key).collect();
            let declared: Vec<&str> = state.lgas.iter().map(|l| l.key).collect();
            assert_eq!(listed, declared, "LGA mismatch for {}", state.key);
        }
    }

    #[test]
    fn test_wards_and_polling_units_match_records() {
        for state in dataset::states() {
            for lga in state.lgas {
                let wards = list_wards(state.key, lga.key);
                let listed: Vec<&str> = wards.iter().map(Entry::key).collect();
                let declared: Vec<&str> = lga.wards.iter().map(|w| w.key).collect();
                assert_eq!(listed, declared, "ward mismatch for {}", lga.key);

                for ward in lga.wards {
                    let units = list_polling_units(state.key, lga.key, ward.key);
                    assert_eq!(units.len(), ward.polling_units.len());
                    for (i, (unit, label)) in units.iter().zip(ward.polling_units).enumerate() {
                        assert_eq!(unit.key(), polling_unit_key(i));
                        assert_eq!(unit.name, *label);
                    }
                }
            }
        }
    }

    #[test]
    fn test_wards_include_ikeja_central() {
        let expected = Entry::new("ikeja-central", "Ikeja Central");
        assert!(list_wards("lagos", "ikeja").contains(&expected));
    }

    #[test]
    fn test_polling_units_include_first_label() {
        let expected = Entry::new("pu-1", "PU 001 - Ikeja Central Market");
        let units = list_polling_units("lagos", "ikeja", "ikeja-central");
        assert!(units.contains(&expected));
    }

    #[test]
    fn test_polling_unit_key_is_one_based() {
        assert_eq!(polling_unit_key(0), "pu-1");
        assert_eq!(polling_unit_key(41), "pu-42");
    }

    #[test]
    fn test_abia_ward_label_kept_verbatim() {
        let expected = Entry::new("pu-1", "PU 001 - Umungasi Central Market");
        let units = list_polling_units("abia", "aba-south", "umungasi");
        assert_eq!(units[0], expected);
    }

    #[test]
    fn test_lga_with_no_wards_is_empty() {
        assert!(list_wards("abia", "etim-ekpo").is_empty());
    }

    #[test]
    fn test_ward_with_no_polling_units_is_empty() {
        assert!(list_polling_units("lagos", "ikeja", "wasimi").is_empty());
    }

    #[test]
    fn test_unknown_keys_return_empty() {
        assert!(list_lgas("nonexistent-state").is_empty());
        assert!(list_wards("nonexistent-state", "ikeja").is_empty());
        assert!(list_wards("lagos", "nonexistent-lga").is_empty());
        assert!(list_polling_units("lagos", "ikeja", "missing").is_empty());
        assert!(list_polling_units("", "", "").is_empty());

        let units = list_polling_units("lagos", "missing", "ikeja-central");
        assert!(units.is_empty());
    }

    #[test]
    fn test_list_children_dispatches_by_depth() {
        let root = SelectionPath::root();
        assert_eq!(list_children(&root), list_states());

        let lagos: SelectionPath = "lagos".parse().unwrap();
        assert_eq!(list_children(&lagos), list_lgas("lagos"));

        let ikeja: SelectionPath = "lagos/ikeja".parse().unwrap();
        assert_eq!(list_children(&ikeja), list_wards("lagos", "ikeja"));

        let ward: SelectionPath = "lagos/ikeja/ikeja-central".parse().unwrap();
        assert_eq!(
            list_children(&ward),
            list_polling_units("lagos", "ikeja", "ikeja-central")
        );
    }

    #[test]
    fn test_list_children_matches_keys_exactly() {
        let path = SelectionPath::from_keys(&[" lagos ", "ikeja "]).unwrap();
        assert_eq!(list_children(&path), list_wards(" lagos ", "ikeja "));
        assert!(list_children(&path).is_empty());

        let parsed: SelectionPath = " lagos / ikeja ".parse().unwrap();
        assert!(list_children(&parsed).is_empty());
    }

    #[test]
    fn test_concurrent_readers_agree() {
        const FCT: &str = "fct";
        const AMAC: &str = "municipal-area-council";

        let expected = list_wards(FCT, AMAC);
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| list_wards(FCT, AMAC)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
