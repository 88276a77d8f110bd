//! Wardmap - Nigeria's administrative hierarchy as a static lookup table
//!
//! States, Local Government Areas, wards and polling units compiled into the
//! binary, with pure lookup functions for cascading selection.

pub mod coverage;
pub mod dataset;
pub mod lookup;
pub mod models;

pub use coverage::Coverage;
pub use lookup::{list_children, list_lgas, list_polling_units, list_states, list_wards};
pub use models::{Entry, Level, Lga, PathError, SelectionPath, State, Ward};
