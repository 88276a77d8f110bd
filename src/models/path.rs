//! Slash-separated selection paths such as `lagos/ikeja/ikeja-central`.

use std::str::FromStr;

use thiserror::Error;

use super::Level;

/// Errors raised while parsing a [`SelectionPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A segment between two slashes was blank.
    #[error("empty segment at position {position} in path '{path}'")]
    EmptySegment { path: String, position: usize },
    /// More segments than the hierarchy has parent levels.
    #[error("path '{path}' has {count} segments, at most 3 are allowed")]
    TooDeep { path: String, count: usize },
}

/// Keys naming a node of the hierarchy, from the state downwards.
///
/// The empty path is the root; listing its children yields the states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    segments: Vec<String>,
}

impl SelectionPath {
    pub const MAX_DEPTH: usize = 3;

    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from keys, outermost first. Keys are kept verbatim.
    pub fn from_keys(keys: &[&str]) -> Result<Self, PathError> {
        let path = keys.join("/");

        if let Some(position) = keys.iter().position(|k| k.trim().is_empty()) {
            return Err(PathError::EmptySegment { path, position });
        }

        if keys.len() > Self::MAX_DEPTH {
            return Err(PathError::TooDeep {
                path,
                count: keys.len(),
            });
        }

        Ok(Self {
            segments: keys.iter().map(|k| k.to_string()).collect(),
        })
    }

    pub fn state(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn lga(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    pub fn ward(&self) -> Option<&str> {
        self.segments.get(2).map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Level of the entries found directly below this path
    pub fn level(&self) -> Level {
        match self.segments.len() {
            0 => Level::State,
            1 => Level::Lga,
            2 => Level::Ward,
            _ => Level::PollingUnit,
        }
    }
}

impl FromStr for SelectionPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches('/');
        if trimmed.trim().is_empty() {
            return Ok(Self::root());
        }

        let keys: Vec<&str> = trimmed.split('/').collect();
        Self::from_keys(&keys)
    }
}

impl std::fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_path() {
        let path: SelectionPath = "lagos/ikeja/ikeja-central".parse().unwrap();
        assert_eq!(path.state(), Some("lagos"));
        assert_eq!(path.lga(), Some("ikeja"));
        assert_eq!(path.ward(), Some("ikeja-central"));
        assert_eq!(path.level(), Level::PollingUnit);
    }

    #[test]
    fn test_empty_is_root() {
        let path: SelectionPath = "".parse().unwrap();
        assert_eq!(path, SelectionPath::root());
        assert_eq!(path.level(), Level::State);

        let slash: SelectionPath = "/".parse().unwrap();
        assert_eq!(slash, SelectionPath::root());
    }

    #[test]
    fn test_surrounding_slashes_ignored() {
        let path: SelectionPath = "/abia/aba-south/".parse().unwrap();
        assert_eq!(path.segments(), ["abia", "aba-south"]);
        assert_eq!(path.level(), Level::Ward);
        assert_eq!(path.to_string(), "abia/aba-south");
    }

    #[test]
    fn test_empty_segment_rejected() {
        let err = "lagos//ikeja-central".parse::<SelectionPath>().unwrap_err();
        assert_eq!(
            err,
            PathError::EmptySegment {
                path: "lagos//ikeja-central".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_from_keys() {
        let path = SelectionPath::from_keys(&["fct", "municipal-area-council"]).unwrap();
        assert_eq!(path.lga(), Some("municipal-area-council"));
        assert_eq!(path.level(), Level::Ward);

        let err = SelectionPath::from_keys(&["lagos", " "]).unwrap_err();
        assert!(matches!(err, PathError::EmptySegment { position: 1, .. }));
    }

    #[test]
    fn test_keys_not_normalised() {
        let path = SelectionPath::from_keys(&[" lagos ", "ikeja "]).unwrap();
        assert_eq!(path.state(), Some(" lagos "));
        assert_eq!(path.lga(), Some("ikeja "));

        let parsed: SelectionPath = " lagos / ikeja ".parse().unwrap();
        assert_eq!(parsed.segments(), [" lagos ", " ikeja "]);
        assert_eq!(parsed.to_string(), " lagos / ikeja ");
    }

    #[test]
    fn test_too_deep_rejected() {
        let err = "a/b/c/d".parse::<SelectionPath>().unwrap_err();
        assert!(matches!(err, PathError::TooDeep { count: 4, .. }));
        assert!(err.to_string().contains("at most 3"));
    }
}
