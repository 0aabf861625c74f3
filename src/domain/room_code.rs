//! Type-safe room identifier.
//!
//! [`RoomCode`] is a newtype wrapper around four uppercase ASCII letters.
//! Codes are short enough to read off a shared screen and type on a phone,
//! which is why they are letters rather than UUIDs.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AriaError;

/// Unique identifier for a karaoke room.
///
/// Always four uppercase ASCII letters (`A`–`Z`), giving 26⁴ ≈ 457k
/// possible codes. Generated at room creation time and immutable
/// thereafter. Used as the dictionary key in [`super::RoomRegistry`]
/// and as the `room` query parameter of the WebSocket handshake.
///
/// Lookup is case-insensitive: parsing normalizes to uppercase, so
/// `"abcd"` and `"ABCD"` name the same room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RoomCode([u8; 4]);

impl RoomCode {
    /// Generates a random `RoomCode` of four uppercase letters.
    ///
    /// Uniqueness is not guaranteed here; [`super::RoomRegistry::create`]
    /// retries on collision with an existing room.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let mut bytes = [0u8; 4];
        for b in &mut bytes {
            *b = rng.random_range(b'A'..=b'Z');
        }
        Self(bytes)
    }

    /// Returns the code as its four raw ASCII bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl FromStr for RoomCode {
    type Err = AriaError;

    /// Parses a room code, normalizing lowercase letters to uppercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 4 {
            return Err(AriaError::InvalidRoomCode(s.to_string()));
        }
        let mut bytes = [0u8; 4];
        for (slot, ch) in bytes.iter_mut().zip(trimmed.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(AriaError::InvalidRoomCode(s.to_string()));
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for RoomCode {
    type Error = AriaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn random_is_four_uppercase_letters() {
        let code = RoomCode::random();
        let s = code.to_string();
        assert_eq!(s.len(), 4);
        assert!(s.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn parse_normalizes_to_uppercase() {
        let Ok(lower) = "abcd".parse::<RoomCode>() else {
            panic!("lowercase code should parse");
        };
        let Ok(upper) = "ABCD".parse::<RoomCode>() else {
            panic!("uppercase code should parse");
        };
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "ABCD");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!("ABC".parse::<RoomCode>().is_err());
        assert!("ABCDE".parse::<RoomCode>().is_err());
        assert!("".parse::<RoomCode>().is_err());
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert!("AB1D".parse::<RoomCode>().is_err());
        assert!("AB D".parse::<RoomCode>().is_err());
        assert!("AB-D".parse::<RoomCode>().is_err());
    }

    #[test]
    fn serde_round_trip() {
        let Ok(code) = "WXYZ".parse::<RoomCode>() else {
            panic!("code should parse");
        };
        let Ok(json) = serde_json::to_string(&code) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"WXYZ\"");
        let Ok(back) = serde_json::from_str::<RoomCode>(&json) else {
            panic!("deserialization failed");
        };
        assert_eq!(code, back);
    }

    #[test]
    fn deserialize_lowercase_normalizes() {
        let Ok(code) = serde_json::from_str::<RoomCode>("\"wxyz\"") else {
            panic!("lowercase json code should deserialize");
        };
        assert_eq!(code.to_string(), "WXYZ");
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let Ok(code) = "ABCD".parse::<RoomCode>() else {
            panic!("code should parse");
        };
        let mut map = HashMap::new();
        map.insert(code, "test");
        assert_eq!(map.get(&code), Some(&"test"));
    }
}
