//! Book catalog commands

use clap::Subcommand;

use crate::{
    error::AppResult,
    models::book::{Availability, Book, CreateBook, UpdateBook},
    services::Library,
};

#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// Add a book to the catalog
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Cover reference (URI or local path)
        #[arg(long)]
        image: Option<String>,
    },
    /// Edit a book's title and description
    Edit {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Delete a book
    Delete { id: String },
    /// List books in the catalog
    List {
        /// Only books available to borrow
        #[arg(long)]
        available: bool,
    },
}

pub fn run(command: BookCommand, library: &mut Library) -> AppResult<()> {
    match command {
        BookCommand::Add {
            title,
            description,
            image,
        } => {
            let book = library.add_book(CreateBook {
                title,
                description,
                image,
            })?;
            println!("Added book {}", book.id);
        }
        BookCommand::Edit {
            id,
            title,
            description,
        } => {
            let book = library.edit_book(&id, UpdateBook { title, description })?;
            println!("Updated book {}", book.id);
        }
        BookCommand::Delete { id } => {
            library.delete_book(&id)?;
            println!("Deleted book {}", id);
        }
        BookCommand::List { available } => {
            if available {
                for book in library.available_books() {
                    println!("{}", render_book(book));
                }
            } else {
                for book in library.books() {
                    println!("{}", render_book(book));
                }
            }
        }
    }
    Ok(())
}

pub(super) fn render_book(book: &Book) -> String {
    let mut line = format!("{}  {} - {}", book.id, book.title, book.description);
    if book.availability() == Availability::Borrowed {
        line.push_str(" (borrowed)");
    }
    line
}
