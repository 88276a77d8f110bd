//! Static reference dataset: states → LGAs → wards → polling units.
//!
//! The tree is compiled into the binary and never changes at runtime. States
//! are listed alphabetically by key; LGAs, wards and polling units keep the
//! order in which they were authored. Many LGAs and wards are still empty,
//! which means the data has not been collected yet.

mod north_central;
mod north_east;
mod north_west;
mod south_east;
mod south_south;
mod south_west;

use crate::models::{Lga, State, Ward};

static STATES: &[State] = &[
    south_east::ABIA,
    north_east::ADAMAWA,
    south_south::AKWA_IBOM,
    south_east::ANAMBRA,
    north_east::BAUCHI,
    south_south::BAYELSA,
    north_central::BENUE,
    north_east::BORNO,
    south_south::CROSS_RIVER,
    south_south::DELTA,
    south_east::EBONYI,
    south_south::EDO,
    south_west::EKITI,
    south_east::ENUGU,
    north_central::FCT,
    north_east::GOMBE,
    south_east::IMO,
    north_west::JIGAWA,
    north_west::KADUNA,
    north_west::KANO,
    north_west::KATSINA,
    north_west::KEBBI,
    north_central::KOGI,
    north_central::KWARA,
    south_west::LAGOS,
    north_central::NASARAWA,
    north_central::NIGER,
    south_west::OGUN,
    south_west::ONDO,
    south_west::OSUN,
    south_west::OYO,
    north_central::PLATEAU,
    south_south::RIVERS,
    north_west::SOKOTO,
    north_east::TARABA,
    north_east::YOBE,
    north_west::ZAMFARA,
];

/// All states in declared order
pub fn states() -> &'static [State] {
    STATES
}

/// Find a state by slug key
pub fn find_state(state_key: &str) -> Option<&'static State> {
    STATES.iter().find(|state| state.key == state_key)
}

/// Find an LGA by state and LGA keys
pub fn find_lga(state_key: &str, lga_key: &str) -> Option<&'static Lga> {
    find_state(state_key)?.lga(lga_key)
}

/// Find a ward by state, LGA and ward keys
pub fn find_ward(state_key: &str, lga_key: &str, ward_key: &str) -> Option<&'static Ward> {
    find_lga(state_key, lga_key)?.ward(ward_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;

    fn assert_unique<'a>(keys: impl Iterator<Item = &'a str>, parent: &str) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate key {} in {}", key, parent);
        }
    }

    #[test]
    fn test_thirty_six_states_and_fct() {
        assert_eq!(states().len(), 37);
        assert!(find_state("fct").is_some());
    }

    #[test]
    fn test_states_sorted_by_key() {
        let keys: Vec<&str> = states().iter().map(|s| s.key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_keys_unique_within_parent() {
        assert_unique(states().iter().map(|s| s.key), "root");
        for state in states() {
            assert_unique(state.lgas.iter().map(|l| l.key), state.key);
            for lga in state.lgas {
                assert_unique(lga.wards.iter().map(|w| w.key), lga.key);
            }
        }
    }

    #[test]
    fn test_keys_are_slugs() {
        let slug = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
        for state in states() {
            assert!(slug.is_match(state.key), "bad state key '{}'", state.key);
            for lga in state.lgas {
                assert!(slug.is_match(lga.key), "bad LGA key '{}'", lga.key);
                for ward in lga.wards {
                    assert!(slug.is_match(ward.key), "bad ward key '{}'", ward.key);
                }
            }
        }
    }

    #[test]
    fn test_names_not_blank() {
        for state in states() {
            assert!(!state.name.trim().is_empty());
            for lga in state.lgas {
                let blank = lga.name.trim().is_empty();
                assert!(!blank, "blank LGA name in {}", state.key);
                for ward in lga.wards {
                    let blank = ward.name.trim().is_empty();
                    assert!(!blank, "blank ward name in {}", lga.key);
                    for label in ward.polling_units {
                        let blank = label.trim().is_empty();
                        assert!(!blank, "blank label in {}", ward.key);
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_state_has_lgas() {
        for state in states() {
            assert!(!state.lgas.is_empty(), "{} has no LGAs", state.key);
        }
    }

    #[test]
    fn test_find_ward_walks_hierarchy() {
        let ward = find_ward("lagos", "ikeja", "ikeja-central").unwrap();
        assert_eq!(ward.name, "Ikeja Central");
        assert_eq!(ward.polling_units[0], "PU 001 - Ikeja Central Market");

        assert!(find_ward("lagos", "ikeja", "missing").is_none());
        assert!(find_ward("lagos", "missing", "ikeja-central").is_none());
        assert!(find_ward("missing", "ikeja", "ikeja-central").is_none());
    }

    #[test]
    fn test_abia_carries_empty_etim_ekpo() {
        let lga = find_lga("abia", "etim-ekpo").unwrap();
        assert!(!lga.is_populated());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert!(find_state("Lagos").is_none());
        assert!(find_state("lagos").is_some());
    }
}
