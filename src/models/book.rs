//! Book (catalog entry) model and related types.
//!
//! The serialized shape is the persistence contract: a JSON object with
//! camelCase field names, stored as an element of the `"books"` snapshot
//! array.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Book availability, derived from the borrow flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Borrowed,
}

impl From<bool> for Availability {
    fn from(is_borrowed: bool) -> Self {
        if is_borrowed {
            Availability::Borrowed
        } else {
            Availability::Available
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Borrowed => write!(f, "borrowed"),
        }
    }
}

/// Full book model (storage + display shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Cover reference (URI or local path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_borrowed: bool,
}

impl Book {
    /// Build a new book with a fresh id; starts available
    pub fn new(create: CreateBook) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: create.title,
            description: create.description,
            image: create.image,
            is_borrowed: false,
        }
    }

    pub fn availability(&self) -> Availability {
        Availability::from(self.is_borrowed)
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    pub image: Option<String>,
}

/// Update book request. The borrow flag and cover image are not editable.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
}
