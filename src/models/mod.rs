//! Data models for Bibliodesk

pub mod book;
pub mod member;

// Re-export commonly used types
pub use book::{Availability, Book, CreateBook, UpdateBook};
pub use member::{CreateMember, Member, UpdateMember};
