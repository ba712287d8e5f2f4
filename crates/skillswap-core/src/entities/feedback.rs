//! Feedback entity - a score one swap party leaves for the other

use chrono::{DateTime, Utc};

use crate::value_objects::{FeedbackId, Score, SwapId, UserId};

/// Feedback left on an accepted swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: FeedbackId,
    pub swap_id: SwapId,
    pub rater_id: UserId,
    pub ratee_id: UserId,
    pub score: Score,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to store feedback; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub swap_id: SwapId,
    pub rater_id: UserId,
    pub ratee_id: UserId,
    pub score: Score,
    pub comment: Option<String>,
}

/// Aggregate of all scores a user has received
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSummary {
    pub count: i64,
    pub total: i64,
}

impl RatingSummary {
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = Score>,
    {
        scores.into_iter().fold(Self::default(), |acc, score| Self {
            count: acc.count + 1,
            total: acc.total + i64::from(score.value()),
        })
    }

    /// Arithmetic mean of the scores, 0 when there are none
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }
}
