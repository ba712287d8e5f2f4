//! Entity to model mappers
//!
//! Conversions from database rows to domain entities. Rows with values the
//! domain cannot represent (an unknown status, an out-of-range score) are
//! reported as database errors rather than silently coerced.

mod feedback;
mod swap;
mod user;
