use std::fmt;

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::TypesError;

/// Arbitrary-size unsigned integer carried as a `0x`-prefixed hex string in
/// JSON-RPC payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexNumber(pub U256);

impl HexNumber {
    pub const ZERO: HexNumber = HexNumber(U256::ZERO);

    /// Parses `0x…` or bare hex digits. A lone `0x` is zero.
    pub fn parse(input: &str) -> Result<Self, TypesError> {
        if input == "0x" {
            return Ok(Self::ZERO);
        }

        let digits = input.strip_prefix("0x").unwrap_or(input);
        if digits.is_empty() {
            return Err(TypesError::InvalidHexNumber(input.to_owned()));
        }

        U256::from_str_radix(digits, 16)
            .map(HexNumber)
            .map_err(|_| TypesError::InvalidHexNumber(input.to_owned()))
    }

    pub fn value(&self) -> U256 {
        self.0
    }

    /// Value of an optional number, treating an absent one as zero.
    pub fn value_or_zero(number: Option<&HexNumber>) -> U256 {
        number.map_or(U256::ZERO, HexNumber::value)
    }

    /// Interprets the value as a Unix timestamp in seconds.
    ///
    /// `None` when the value does not fit a timestamp.
    pub fn to_unix(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.0).ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl From<U256> for HexNumber {
    fn from(value: U256) -> Self {
        HexNumber(value)
    }
}

impl From<u64> for HexNumber {
    fn from(value: u64) -> Self {
        HexNumber(U256::from(value))
    }
}

impl fmt::Display for HexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for HexNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexNumber::parse(&s).map_err(de::Error::custom)
    }
}
