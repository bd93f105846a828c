//! Binary truth values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The value of a binary variable. Serialized with the symbols `t` / `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Truth {
    #[serde(rename = "t", alias = "true", alias = "T")]
    True,
    #[serde(rename = "f", alias = "false", alias = "F")]
    False,
}

impl Truth {
    /// Both values, true first. Enumeration order follows this.
    pub const ALL: [Truth; 2] = [Truth::True, Truth::False];

    pub fn symbol(self) -> char {
        match self {
            Self::True => 't',
            Self::False => 'f',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            't' | 'T' => Some(Self::True),
            'f' | 'F' => Some(Self::False),
            _ => None,
        }
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Self::True)
    }

    /// Human-readable class name, as printed by verbose classification.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
        }
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Truth> for bool {
    fn from(value: Truth) -> Self {
        value.as_bool()
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A string that is not one of `t`, `f`, `true`, `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid truth symbol \"{0}\"")]
pub struct ParseTruthError(pub String);

impl FromStr for Truth {
    type Err = ParseTruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t" | "true" => Ok(Self::True),
            "f" | "false" => Ok(Self::False),
            _ => Err(ParseTruthError(s.to_string())),
        }
    }
}
