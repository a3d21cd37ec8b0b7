//! Member registry commands

use clap::Subcommand;

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
    services::Library,
};

use super::books::render_book;

#[derive(Debug, Subcommand)]
pub enum MemberCommand {
    /// Register a new member
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Edit a member's details
    Edit {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Remove a member
    Delete { id: String },
    /// List registered members
    List,
    /// List the books a member currently holds
    Loans { id: String },
}

pub fn run(command: MemberCommand, library: &mut Library) -> AppResult<()> {
    match command {
        MemberCommand::Add { name, email, phone } => {
            let member = library.add_member(CreateMember { name, email, phone })?;
            println!("Added member {}", member.id);
        }
        MemberCommand::Edit {
            id,
            name,
            email,
            phone,
        } => {
            let member = library.edit_member(&id, UpdateMember { name, email, phone })?;
            println!("Updated member {}", member.id);
        }
        MemberCommand::Delete { id } => {
            library.delete_member(&id)?;
            println!("Deleted member {}", id);
        }
        MemberCommand::List => {
            for member in library.members() {
                println!("{}", render_member(member));
            }
        }
        MemberCommand::Loans { id } => {
            for book in library.borrowed_books(&id)? {
                println!("{}", render_book(book));
            }
        }
    }
    Ok(())
}

fn render_member(member: &Member) -> String {
    format!(
        "{}  {} ({}) - {} loan(s)",
        member.id,
        member.name,
        member.email,
        member.borrowed_books.len()
    )
}
