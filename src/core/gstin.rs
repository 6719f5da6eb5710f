//! GST Identification Number parsing.
//!
//! A GSTIN is 15 characters: the two-digit state code, the holder's PAN
//! (5 letters, 4 digits, 1 letter), an entity number, a literal `Z` and a
//! check character. Validation here is structural; the check character is
//! only verified on request via [`Gstin::has_valid_check_digit`].

use super::error::GstError;
use super::jurisdiction;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static GSTIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN pattern")
});

const CHECKSUM_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Structural check only. Lowercase input is rejected.
pub fn is_valid_gstin(candidate: &str) -> bool {
    GSTIN_RE.is_match(candidate)
}

/// Resolve the state a GSTIN is registered in.
pub fn state_from_gstin(gstin: &str) -> Result<&'static str, GstError> {
    Gstin::parse(gstin)?.state()
}

/// A structurally valid GSTIN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct Gstin(String);

impl Gstin {
    pub fn parse(s: &str) -> Result<Self, GstError> {
        if is_valid_gstin(s) {
            Ok(Gstin(s.to_owned()))
        } else {
            Err(GstError::InvalidFormat {
                gstin: s.to_owned(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading two-digit state code.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The PAN embedded in characters 3 to 12.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }

    pub fn state(&self) -> Result<&'static str, GstError> {
        jurisdiction::state_name(self.state_code()).ok_or_else(|| {
            GstError::UnknownJurisdictionCode {
                code: self.state_code().to_owned(),
                gstin: self.0.clone(),
            }
        })
    }

    /// The check character the first 14 characters call for.
    ///
    /// Base-36 weighted sum: odd positions weigh 2, each product contributes
    /// its quotient and remainder by 36, and the check value tops the sum up
    /// to a multiple of 36.
    pub fn expected_check_digit(&self) -> char {
        let sum: u32 = self
            .0
            .bytes()
            .take(14)
            .enumerate()
            .map(|(i, b)| {
                let value = checksum_value(b);
                let product = if i % 2 == 0 { value } else { value * 2 };
                product / 36 + product % 36
            })
            .sum();
        let check = (36 - sum % 36) % 36;
        CHECKSUM_ALPHABET[check as usize] as char
    }

    pub fn check_digit(&self) -> char {
        self.0.as_bytes()[14] as char
    }

    pub fn has_valid_check_digit(&self) -> bool {
        self.check_digit() == self.expected_check_digit()
    }
}

// Only called on bytes already matched by GSTIN_RE.
fn checksum_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'A'..=b'Z' => u32::from(b - b'A') + 10,
        _ => 0,
    }
}

impl TryFrom<&str> for Gstin {
    type Error = GstError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Gstin::parse(s)
    }
}

impl FromStr for Gstin {
    type Err = GstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gstin::parse(s)
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Gstin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Gstin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Gstin::parse(&s).map_err(serde::de::Error::custom)
    }
}
