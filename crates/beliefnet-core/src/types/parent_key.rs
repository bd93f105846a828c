//! Fixed-width, bit-packed key for an ordered parent truth combination.
//!
//! Bit `i` holds parent `i` in declared order; a set bit means true. The
//! width is kept alongside the bits so that `"t"` and `"tf"` never collide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Truth;
use crate::constants::MAX_PARENTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParentKey {
    width: u8,
    bits: u64,
}

impl ParentKey {
    /// Key of a parentless node.
    pub const EMPTY: ParentKey = ParentKey { width: 0, bits: 0 };

    /// Pack `values` in order. Returns `None` past 64 values.
    pub fn from_truths(values: &[Truth]) -> Option<Self> {
        if values.len() > MAX_PARENTS {
            return None;
        }
        let bits = values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.as_bool())
            .fold(0u64, |acc, (i, _)| acc | (1u64 << i));
        Some(Self {
            width: values.len() as u8,
            bits,
        })
    }

    pub fn width(self) -> usize {
        self.width as usize
    }

    pub fn bits(self) -> u64 {
        self.bits
    }

    pub fn is_empty(self) -> bool {
        self.width == 0
    }

    /// Value of parent `index`, or `None` past the width.
    pub fn get(self, index: usize) -> Option<Truth> {
        (index < self.width()).then(|| Truth::from(self.bits & (1u64 << index) != 0))
    }

    pub fn iter(self) -> impl Iterator<Item = Truth> {
        (0..self.width()).map(move |i| Truth::from(self.bits & (1u64 << i) != 0))
    }
}

impl fmt::Display for ParentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{}", value.symbol())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseParentKeyError {
    #[error("invalid symbol '{symbol}' in parent key \"{key}\"")]
    InvalidSymbol { key: String, symbol: char },

    #[error("parent key \"{key}\" is wider than {max} values")]
    TooWide { key: String, max: usize },
}

impl FromStr for ParentKey {
    type Err = ParseParentKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .chars()
            .map(|c| {
                Truth::from_symbol(c).ok_or_else(|| ParseParentKeyError::InvalidSymbol {
                    key: s.to_string(),
                    symbol: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_truths(&values).ok_or_else(|| ParseParentKeyError::TooWide {
            key: s.to_string(),
            max: MAX_PARENTS,
        })
    }
}

impl Serialize for ParentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ParentKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
