//! Flattened `{key, name}` pairs returned by the lookup functions.

use std::borrow::Cow;

use serde::Serialize;

/// One selectable option at some level of the hierarchy.
///
/// Keys of states, LGAs and wards borrow the static dataset; polling-unit keys
/// are synthesized from list position and therefore owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    pub key: Cow<'static, str>,
    pub name: &'static str,
}

impl Entry {
    pub fn new(key: impl Into<Cow<'static, str>>, name: &'static str) -> Self {
        Self {
            key: key.into(),
            name,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.key, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_key_name_object() {
        let entry = Entry::new("lagos", "Lagos");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"key":"lagos","name":"Lagos"}"#);
    }

    #[test]
    fn test_owned_and_borrowed_keys_compare_equal() {
        let borrowed = Entry::new("pu-1", "PU 001 - Somewhere");
        let owned = Entry::new(format!("pu-{}", 1), "PU 001 - Somewhere");
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_display_is_tab_separated() {
        assert_eq!(Entry::new("ikeja", "Ikeja").to_string(), "ikeja\tIkeja");
    }
}
