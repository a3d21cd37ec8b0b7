//! Members repository: the `"members"` snapshot

use std::sync::Arc;

use crate::{error::AppResult, models::member::Member, storage::KeyValueStore};

/// Fixed storage key for the member collection
const KEY: &str = "members";

#[derive(Clone)]
pub struct MembersRepository {
    store: Arc<dyn KeyValueStore>,
}

impl MembersRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the full member collection; an absent key is an empty collection
    pub fn load_all(&self) -> AppResult<Vec<Member>> {
        match self.store.load(KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    /// Rewrite the full member collection
    pub fn save_all(&self, members: &[Member]) -> AppResult<()> {
        let bytes = serde_json::to_vec(members)?;
        self.store.save(KEY, &bytes)
    }
}
