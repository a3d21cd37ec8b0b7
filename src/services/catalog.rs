//! Catalog management operations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

use super::Library;

impl Library {
    /// Add a new book to the catalog
    pub fn add_book(&mut self, create: CreateBook) -> AppResult<Book> {
        create.validate()?;
        let book = Book::new(create);
        tracing::info!(id = %book.id, title = %book.title, "book added");
        self.books.insert(book.id.clone(), book.clone());
        self.persist_books()?;
        Ok(book)
    }

    /// Overwrite the mutable fields of an existing book.
    /// The borrow flag and cover image are left untouched.
    pub fn edit_book(&mut self, id: &str, update: UpdateBook) -> AppResult<Book> {
        update.validate()?;
        let book = self
            .books
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        book.title = update.title;
        book.description = update.description;
        let book = book.clone();
        self.persist_books()?;
        Ok(book)
    }

    /// Remove a book from the catalog. Fails while the book is borrowed.
    pub fn delete_book(&mut self, id: &str) -> AppResult<()> {
        let book = self.get_book(id)?;
        if book.is_borrowed {
            return Err(AppError::Conflict(format!(
                "Book '{}' is currently borrowed",
                book.title
            )));
        }
        self.books.shift_remove(id);
        self.persist_books()
    }
}
