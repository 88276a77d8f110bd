//! Coverage report for the reference dataset.
//!
//! Empty ward and polling-unit lists mark data that has not been collected
//! yet. This module counts them so callers can tell how complete a state is.

use serde::Serialize;
use tracing::info;

use crate::dataset;
use crate::models::State;

/// Record counts per level plus the number of unpopulated nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub states: usize,
    pub lgas: usize,
    pub wards: usize,
    pub polling_units: usize,
    /// LGAs whose ward list is empty
    pub unpopulated_lgas: usize,
    /// Wards whose polling-unit list is empty
    pub unpopulated_wards: usize,
}

impl Coverage {
    /// Coverage of the whole dataset
    pub fn compute() -> Self {
        dataset::states()
            .iter()
            .map(Self::of_state)
            .fold(Self::default(), Self::merge)
    }

    /// Coverage of a single state, `None` if the key is unknown
    pub fn for_state(state_key: &str) -> Option<Self> {
        dataset::find_state(state_key).map(Self::of_state)
    }

    fn of_state(state: &State) -> Self {
        let mut coverage = Self {
            states: 1,
            lgas: state.lgas.len(),
            ..Self::default()
        };

        for lga in state.lgas {
            if !lga.is_populated() {
                coverage.unpopulated_lgas += 1;
            }
            coverage.wards += lga.wards.len();
            for ward in lga.wards {
                if !ward.is_populated() {
                    coverage.unpopulated_wards += 1;
                }
                coverage.polling_units += ward.polling_units.len();
            }
        }

        coverage
    }

    fn merge(self, other: Self) -> Self {
        Self {
            states: self.states + other.states,
            lgas: self.lgas + other.lgas,
            wards: self.wards + other.wards,
            polling_units: self.polling_units + other.polling_units,
            unpopulated_lgas: self.unpopulated_lgas + other.unpopulated_lgas,
            unpopulated_wards: self.unpopulated_wards + other.unpopulated_wards,
        }
    }

    /// Share of LGAs with at least one ward recorded, in `0.0..=1.0`
    pub fn lga_completeness(&self) -> f64 {
        if self.lgas == 0 {
            return 0.0;
        }
        self.lgas.saturating_sub(self.unpopulated_lgas) as f64 / self.lgas as f64
    }

    pub fn log_summary(&self) {
        info!(
            "Dataset: {} states, {} LGAs, {} wards, {} polling units",
            self.states, self.lgas, self.wards, self.polling_units
        );
        info!(
            "  {} LGAs without wards ({:.1}% populated), {} wards without polling units",
            self.unpopulated_lgas,
            self.lga_completeness() * 100.0,
            self.unpopulated_wards
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{list_lgas, list_polling_units, list_states, list_wards};

    #[test]
    fn test_totals_match_lookup_results() {
        let mut expected = Coverage::default();
        for state in list_states() {
            expected.states += 1;
            for lga in list_lgas(state.key()) {
                expected.lgas += 1;
                let wards = list_wards(state.key(), lga.key());
                if wards.is_empty() {
                    expected.unpopulated_lgas += 1;
                }
                for ward in wards {
                    expected.wards += 1;
                    let units = list_polling_units(state.key(), lga.key(), ward.key());
                    if units.is_empty() {
                        expected.unpopulated_wards += 1;
                    }
                    expected.polling_units += units.len();
                }
            }
        }
        assert_eq!(Coverage::compute(), expected);
    }

    #[test]
    fn test_nationwide_counts() {
        let coverage = Coverage::compute();
        assert_eq!(coverage.states, 37);
        // 774 LGAs plus the Etim Ekpo entry recorded under Abia
        assert_eq!(coverage.lgas, 775);
        assert!(coverage.unpopulated_lgas > 0);
        assert!(coverage.unpopulated_wards > 0);
    }

    #[test]
    fn test_for_state() {
        let lagos = Coverage::for_state("lagos").unwrap();
        assert_eq!(lagos.states, 1);
        assert_eq!(lagos.lgas, 20);
        assert!(lagos.wards >= 10);
        assert!(lagos.polling_units >= 6);

        assert!(Coverage::for_state("nonexistent-state").is_none());
    }

    #[test]
    fn test_unpopulated_state_completeness() {
        let yobe = Coverage::for_state("yobe").unwrap();
        assert_eq!(yobe.wards, 0);
        assert_eq!(yobe.unpopulated_lgas, yobe.lgas);
        assert_eq!(yobe.lga_completeness(), 0.0);
    }

    #[test]
    fn test_inconsistent_counts_do_not_underflow() {
        let coverage = Coverage {
            lgas: 2,
            unpopulated_lgas: 5,
            ..Coverage::default()
        };
        assert_eq!(coverage.lga_completeness(), 0.0);
    }

    #[test]
    fn test_empty_completeness_is_zero() {
        assert_eq!(Coverage::default().lga_completeness(), 0.0);
    }
}
