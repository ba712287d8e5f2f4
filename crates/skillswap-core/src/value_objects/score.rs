//! Feedback score - a star rating between 1 and 5

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Star rating attached to a feedback entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Get the numeric value
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Score {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (i32::from(Self::MIN)..=i32::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidScore(value))
        }
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        i32::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
