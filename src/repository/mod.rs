//! Repository layer for snapshot persistence

pub mod books;
pub mod members;

use std::sync::Arc;

use crate::storage::KeyValueStore;

/// Main repository struct holding the snapshot store handle
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            books: books::BooksRepository::new(store.clone()),
            members: members::MembersRepository::new(store),
        }
    }
}
