//! Pet lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sale status of a pet.
///
/// Wire format: lowercase token (`"available"`, `"pending"`, `"sold"`).
/// Serde goes through [`Status::as_str`] and [`FromStr`] so that both
/// directions share one mapping and unknown tokens are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Available,
    Pending,
    Sold,
}

impl Status {
    /// Every status, in wire-schema order.
    pub const ALL: [Status; 3] = [Self::Available, Self::Pending, Self::Sold];

    /// Wire tokens accepted by [`FromStr`].
    pub const TOKENS: [&'static str; 3] = ["available", "pending", "sold"];

    /// Encode to the wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known status token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status token: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "sold" => Ok(Self::Sold),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::unknown_variant(&s, &Self::TOKENS))
    }
}
