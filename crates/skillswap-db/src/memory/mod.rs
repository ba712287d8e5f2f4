//! In-memory storage backend
//!
//! All tables live behind one `parking_lot::RwLock`, so every repository call
//! is atomic with respect to every other: the compare-and-set operations on
//! swaps take the write lock for the whole check-and-mutate. The lock is never
//! held across an `.await`.
//!
//! State lives as long as the [`MemoryStore`] that owns it; repositories are
//! cheap handles sharing that store.

mod feedback;
mod swap;
mod user;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use skillswap_core::entities::{Feedback, SwapRequest, User};
use skillswap_core::traits::{RepoResult, StoreHealth};

pub use feedback::MemoryFeedbackRepository;
pub use swap::MemorySwapRepository;
pub use user::MemoryUserRepository;

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

/// Table contents; keys are the row ids so iteration is in id order
#[derive(Debug)]
struct Tables {
    users: BTreeMap<i64, UserRecord>,
    swaps: BTreeMap<i64, SwapRequest>,
    feedback: BTreeMap<i64, Feedback>,
    next_user_id: i64,
    next_swap_id: i64,
    next_feedback_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            swaps: BTreeMap::new(),
            feedback: BTreeMap::new(),
            next_user_id: 1,
            next_swap_id: 1,
            next_feedback_id: 1,
        }
    }
}

impl Tables {
    fn user_name(&self, id: i64) -> Option<&str> {
        self.users.get(&id).map(|record| record.user.name.as_str())
    }
}

fn take_id(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

/// Process-local store shared by the in-memory repositories
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository::new(self.clone())
    }

    pub fn swaps(&self) -> MemorySwapRepository {
        MemorySwapRepository::new(self.clone())
    }

    pub fn feedback(&self) -> MemoryFeedbackRepository {
        MemoryFeedbackRepository::new(self.clone())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
