//! Member model and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Full member model (storage + display shape).
/// `borrowed_books` keeps book ids in borrow order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub borrowed_books: Vec<String>,
}

impl Member {
    /// Build a new member with a fresh id and no loans
    pub fn new(create: CreateMember) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: create.name,
            email: create.email,
            phone: create.phone,
            borrowed_books: Vec::new(),
        }
    }

    pub fn holds(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_id)
    }
}

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone must not be empty"))]
    pub phone: String,
}

/// Update member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMember {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone must not be empty"))]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_new_member_has_no_loans() {
        let member = Member::new(CreateMember {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
        });
        assert!(member.borrowed_books.is_empty());
    }

    #[test]
    fn test_email_validation() {
        let create = CreateMember {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            phone: "555".to_string(),
        };
        assert!(create.validate().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let member = Member {
            id: "m1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            borrowed_books: vec!["b1".to_string()],
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["borrowedBooks"][0], "b1");
    }
}
