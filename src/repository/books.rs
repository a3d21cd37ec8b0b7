//! Books repository: the `"books"` snapshot

use std::sync::Arc;

use crate::{error::AppResult, models::book::Book, storage::KeyValueStore};

/// Fixed storage key for the book collection
const KEY: &str = "books";

#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<dyn KeyValueStore>,
}

impl BooksRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the full book collection; an absent key is an empty collection
    pub fn load_all(&self) -> AppResult<Vec<Book>> {
        match self.store.load(KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    /// Rewrite the full book collection
    pub fn save_all(&self, books: &[Book]) -> AppResult<()> {
        let bytes = serde_json::to_vec(books)?;
        self.store.save(KEY, &bytes)
    }
}
