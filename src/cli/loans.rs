//! Borrow and return commands

use crate::{error::AppResult, services::Library};

pub fn borrow(library: &mut Library, member_id: &str, book_id: &str) -> AppResult<()> {
    library.borrow_book(member_id, book_id)?;
    println!("Borrowed book {} for member {}", book_id, member_id);
    Ok(())
}

pub fn give_back(library: &mut Library, member_id: &str, book_id: &str) -> AppResult<()> {
    library.return_book(member_id, book_id)?;
    println!("Returned book {} from member {}", book_id, member_id);
    Ok(())
}
