//! Command-line adapter over the library model.
//!
//! Each invocation is one request/response cycle: the dispatcher calls a
//! single model operation, the model persists, and the handlers re-read the
//! collections to render. No state of its own beyond the parsed arguments.

pub mod books;
pub mod loans;
pub mod members;

use clap::{Parser, Subcommand};

use crate::{error::AppResult, services::Library};

#[derive(Debug, Parser)]
#[command(
    name = "bibliodesk",
    version,
    about = "Bibliodesk - personal library management"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the book catalog
    #[command(subcommand)]
    Book(books::BookCommand),
    /// Manage the member registry
    #[command(subcommand)]
    Member(members::MemberCommand),
    /// Borrow a book for a member
    Borrow { member_id: String, book_id: String },
    /// Return a borrowed book
    Return { member_id: String, book_id: String },
}

/// Dispatch one parsed command against the model
pub fn run(command: Command, library: &mut Library) -> AppResult<()> {
    match command {
        Command::Book(cmd) => books::run(cmd, library),
        Command::Member(cmd) => members::run(cmd, library),
        Command::Borrow { member_id, book_id } => loans::borrow(library, &member_id, &book_id),
        Command::Return { member_id, book_id } => loans::give_back(library, &member_id, &book_id),
    }
}
