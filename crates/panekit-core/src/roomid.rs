#![forbid(unsafe_code)]

//! Grammar-checked room identifiers.
//!
//! A [`RoomId`] is an opaque token matching `^[a-z0-9-]*$`. The empty string
//! is a valid identifier and names the default/home room. Construction is
//! fallible; once a `RoomId` exists it is always grammar-valid, so downstream
//! code never re-validates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a room.
///
/// The empty id denotes the home room.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Parse an identifier, rejecting anything outside `[a-z0-9-]*`.
    pub fn parse(raw: &str) -> Result<Self, RoomIdError> {
        if !Self::is_valid(raw) {
            return Err(RoomIdError::OutOfGrammar {
                raw: raw.to_owned(),
            });
        }
        Ok(Self(raw.to_owned()))
    }

    /// The home room (empty id).
    #[must_use]
    pub fn home() -> Self {
        Self(String::new())
    }

    /// Whether a raw string is inside the identifier grammar.
    ///
    /// Matches `^[a-z0-9-]*$`; the empty string is valid.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        raw.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the home room.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoomId {
    type Err = RoomIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RoomId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors constructing a [`RoomId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomIdError {
    /// The raw string contains characters outside `[a-z0-9-]`.
    OutOfGrammar { raw: String },
}

impl fmt::Display for RoomIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfGrammar { raw } => {
                write!(f, "room id {raw:?} contains characters outside [a-z0-9-]")
            }
        }
    }
}

impl std::error::Error for RoomIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_alnum_hyphen() {
        assert!(RoomId::parse("battle-gen9ou-12345").is_ok());
        assert!(RoomId::parse("lobby").is_ok());
        assert!(RoomId::parse("a-1").is_ok());
    }

    #[test]
    fn empty_is_home() {
        let id = RoomId::parse("").unwrap();
        assert!(id.is_home());
        assert_eq!(id, RoomId::home());
    }

    #[test]
    fn rejects_uppercase_and_punctuation() {
        assert!(RoomId::parse("Lobby").is_err());
        assert!(RoomId::parse("lobby!").is_err());
        assert!(RoomId::parse("lob by").is_err());
        assert!(RoomId::parse("lobby/extra").is_err());
        assert!(RoomId::parse("lobby.html").is_err());
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(RoomId::parse("café").is_err());
    }

    #[test]
    fn from_str_round_trips_display() {
        let id: RoomId = "teambuilder".parse().unwrap();
        assert_eq!(id.to_string(), "teambuilder");
        assert_eq!(id.as_str(), "teambuilder");
    }

    #[test]
    fn serde_is_transparent() {
        let id = RoomId::parse("lobby").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"lobby\"");
        let back: RoomId = serde_json::from_str("\"lobby\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn error_display_names_offender() {
        let err = RoomId::parse("No").unwrap_err();
        assert!(err.to_string().contains("No"));
    }
}
