//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    FeedbackRepository, RepoResult, StoreHealth, SwapRepository, UserRepository,
};
