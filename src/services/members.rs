//! Member management operations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
};

use super::Library;

impl Library {
    /// Register a new member
    pub fn add_member(&mut self, create: CreateMember) -> AppResult<Member> {
        create.validate()?;
        let member = Member::new(create);
        tracing::info!(id = %member.id, name = %member.name, "member added");
        self.members.insert(member.id.clone(), member.clone());
        self.persist_members()?;
        Ok(member)
    }

    /// Overwrite the mutable fields of an existing member.
    /// The loan list is left untouched.
    pub fn edit_member(&mut self, id: &str, update: UpdateMember) -> AppResult<Member> {
        update.validate()?;
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;
        member.name = update.name;
        member.email = update.email;
        member.phone = update.phone;
        let member = member.clone();
        self.persist_members()?;
        Ok(member)
    }

    /// Remove a member. Fails while the member still holds books.
    pub fn delete_member(&mut self, id: &str) -> AppResult<()> {
        let member = self.get_member(id)?;
        if !member.borrowed_books.is_empty() {
            return Err(AppError::Conflict(format!(
                "Member '{}' still holds {} borrowed book(s)",
                member.name,
                member.borrowed_books.len()
            )));
        }
        self.members.shift_remove(id);
        self.persist_members()
    }
}
