//! Business logic: the library model

pub mod catalog;
pub mod loans;
pub mod members;

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Member},
    repository::Repository,
};

/// In-memory library model over the two persisted collections.
///
/// Owns the book and member collections as insertion-ordered id maps.
/// Every mutating operation validates first, mutates, then rewrites the
/// affected collection(s) through the repository, so a failed operation
/// never changes observable state. Operation impls live in [`catalog`],
/// [`members`] and [`loans`].
pub struct Library {
    repository: Repository,
    books: IndexMap<String, Book>,
    members: IndexMap<String, Member>,
}

impl Library {
    /// Open the library, loading both collections from the store
    pub fn open(repository: Repository) -> AppResult<Self> {
        let books: IndexMap<String, Book> = repository
            .books
            .load_all()?
            .into_iter()
            .map(|b| (b.id.clone(), b))
            .collect();
        let members: IndexMap<String, Member> = repository
            .members
            .load_all()?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

        tracing::debug!(
            books = books.len(),
            members = members.len(),
            "library loaded"
        );

        Ok(Self {
            repository,
            books,
            members,
        })
    }

    /// All books, in insertion order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// All members, in insertion order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Get a book by id
    pub fn get_book(&self, id: &str) -> AppResult<&Book> {
        self.books
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Get a member by id
    pub fn get_member(&self, id: &str) -> AppResult<&Member> {
        self.members
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// Books not currently borrowed (borrow-target selection)
    pub fn available_books(&self) -> impl Iterator<Item = &Book> {
        self.books.values().filter(|b| !b.is_borrowed)
    }

    /// Books currently held by a member, in borrow order (return-target selection)
    pub fn borrowed_books(&self, member_id: &str) -> AppResult<Vec<&Book>> {
        let member = self.get_member(member_id)?;
        Ok(member
            .borrowed_books
            .iter()
            .filter_map(|id| self.books.get(id))
            .collect())
    }

    pub(crate) fn persist_books(&self) -> AppResult<()> {
        let books: Vec<Book> = self.books.values().cloned().collect();
        self.repository.books.save_all(&books)
    }

    pub(crate) fn persist_members(&self) -> AppResult<()> {
        let members: Vec<Member> = self.members.values().cloned().collect();
        self.repository.members.save_all(&members)
    }
}
