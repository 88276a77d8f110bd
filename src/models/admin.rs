//! Administrative hierarchy records.
//!
//! Every level is a `&'static` slice in declared order, so the whole tree can
//! live in read-only memory and be shared freely between threads.

use serde::Serialize;

/// Levels of the hierarchy, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// State or the Federal Capital Territory
    State,
    /// Local Government Area
    Lga,
    /// Ward within an LGA
    Ward,
    /// Polling unit within a ward
    PollingUnit,
}

impl Level {
    /// Get all levels in hierarchical order (state first)
    pub fn all() -> &'static [Level] {
        &[Level::State, Level::Lga, Level::Ward, Level::PollingUnit]
    }

    /// Get the field name for this level
    pub fn field_name(&self) -> &'static str {
        match self {
            Level::State => "state",
            Level::Lga => "lga",
            Level::Ward => "ward",
            Level::PollingUnit => "polling_unit",
        }
    }

    /// Level directly below this one, if any
    pub fn child(&self) -> Option<Level> {
        match self {
            Level::State => Some(Level::Lga),
            Level::Lga => Some(Level::Ward),
            Level::Ward => Some(Level::PollingUnit),
            Level::PollingUnit => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A state and the LGAs it contains.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct State {
    pub key: &'static str,
    pub name: &'static str,
    pub lgas: &'static [Lga],
}

impl State {
    /// Find an LGA by slug key
    pub fn lga(&self, key: &str) -> Option<&'static Lga> {
        self.lgas.iter().find(|lga| lga.key == key)
    }
}

/// A Local Government Area and its wards.
///
/// An empty `wards` slice means the wards have not been recorded yet, not
/// that the LGA has none.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Lga {
    pub key: &'static str,
    pub name: &'static str,
    pub wards: &'static [Ward],
}

impl Lga {
    /// Find a ward by slug key
    pub fn ward(&self, key: &str) -> Option<&'static Ward> {
        self.wards.iter().find(|ward| ward.key == key)
    }

    /// Whether any wards have been recorded
    pub fn is_populated(&self) -> bool {
        !self.wards.is_empty()
    }
}

/// A ward and the labels of its polling units, in list order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ward {
    pub key: &'static str,
    pub name: &'static str,
    pub polling_units: &'static [&'static str],
}

impl Ward {
    /// Whether any polling units have been recorded
    pub fn is_populated(&self) -> bool {
        !self.polling_units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARD: Ward = Ward {
        key: "alpha",
        name: "Alpha",
        polling_units: &["PU 001 - Alpha Square"],
    };

    const LGA: Lga = Lga {
        key: "first",
        name: "First",
        wards: &[
            WARD,
            Ward {
                key: "beta",
                name: "Beta",
                polling_units: &[],
            },
        ],
    };

    #[test]
    fn test_level_children_chain() {
        let mut level = Level::State;
        let mut seen = vec![level];
        while let Some(child) = level.child() {
            seen.push(child);
            level = child;
        }
        assert_eq!(seen, Level::all());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::PollingUnit.to_string(), "polling_unit");
        assert_eq!(Level::Lga.to_string(), "lga");
    }

    #[test]
    fn test_find_ward() {
        assert_eq!(LGA.ward("beta").map(|w| w.name), Some("Beta"));
        assert!(LGA.ward("gamma").is_none());
    }

    #[test]
    fn test_populated_flags() {
        assert!(LGA.is_populated());
        assert!(WARD.is_populated());
        assert!(!LGA.wards[1].is_populated());
    }

    #[test]
    fn test_find_lga() {
        let state = State {
            key: "somewhere",
            name: "Somewhere",
            lgas: &[LGA],
        };
        assert_eq!(state.lga("first").map(|l| l.key), Some("first"));
        assert!(state.lga("First").is_none());
    }
}
