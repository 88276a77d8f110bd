//! Core data models for the administrative hierarchy.

pub mod admin;
pub mod entry;
pub mod path;

pub use admin::{Level, Lga, State, Ward};
pub use entry::Entry;
pub use path::{PathError, SelectionPath};
