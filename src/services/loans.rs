//! Loan (borrow/return) operations

use crate::error::{AppError, AppResult};

use super::Library;

impl Library {
    /// Borrow a book for a member.
    /// The sole transition from available to borrowed.
    pub fn borrow_book(&mut self, member_id: &str, book_id: &str) -> AppResult<()> {
        if !self.members.contains_key(member_id) {
            return Err(AppError::NotFound(format!(
                "Member with id {} not found",
                member_id
            )));
        }
        let book = self
            .books
            .get_mut(book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;
        if book.is_borrowed {
            return Err(AppError::Conflict(format!(
                "Book '{}' is already borrowed",
                book.title
            )));
        }

        book.is_borrowed = true;
        if let Some(member) = self.members.get_mut(member_id) {
            member.borrowed_books.push(book_id.to_string());
        }
        tracing::info!(member_id, book_id, "book borrowed");

        self.persist_books()?;
        self.persist_members()
    }

    /// Return a borrowed book.
    /// The sole transition from borrowed back to available.
    pub fn return_book(&mut self, member_id: &str, book_id: &str) -> AppResult<()> {
        let book = self
            .books
            .get(book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;
        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", member_id)))?;

        if !book.is_borrowed || !member.holds(book_id) {
            return Err(AppError::Conflict(format!(
                "Book '{}' is not borrowed by member '{}'",
                book.title, member.name
            )));
        }

        if let Some(book) = self.books.get_mut(book_id) {
            book.is_borrowed = false;
        }
        if let Some(member) = self.members.get_mut(member_id) {
            member.borrowed_books.retain(|id| id != book_id);
        }
        tracing::info!(member_id, book_id, "book returned");

        self.persist_books()?;
        self.persist_members()
    }
}
