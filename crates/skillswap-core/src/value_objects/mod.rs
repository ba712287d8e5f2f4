//! Value objects - immutable types that represent domain concepts

mod ids;
mod score;

pub use ids::{FeedbackId, IdParseError, SwapId, UserId};
pub use score::Score;
