//! Contact repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide an ordered collection with explicit append/replace/remove APIs.
//! - Keep index arithmetic and bounds checks inside the repository boundary.
//!
//! # Invariants
//! - Insertion order is preserved; `replace_at` keeps every other position.
//! - `remove_at` closes the gap without reordering the remaining contacts.
//! - Every mutation is all-or-nothing: a rejected call leaves the list as-is.

use crate::model::contact::{Contact, ContactId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for ordered contact list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    OutOfRange { position: usize, len: usize },
    DuplicateId(ContactId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { position, len } => {
                write!(f, "position {position} out of range for list of length {len}")
            }
            Self::DuplicateId(id) => write!(f, "contact id already present: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Ordered contact collection used by `ContactStore`.
pub trait ContactRepository {
    fn len(&self) -> usize;
    fn get(&self, position: usize) -> Option<&Contact>;
    fn list(&self) -> &[Contact];
    /// Appends to the end and returns the new position.
    fn append(&mut self, contact: Contact) -> RepoResult<usize>;
    /// Replaces in place and returns the previous contact.
    fn replace_at(&mut self, position: usize, contact: Contact) -> RepoResult<Contact>;
    /// Removes and shifts later contacts left by one.
    fn remove_at(&mut self, position: usize) -> RepoResult<Contact>;
    fn position_of(&self, id: ContactId) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Vec`-backed repository; the list lives for the process lifetime only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_position(&self, position: usize) -> RepoResult<()> {
        if position >= self.contacts.len() {
            return Err(RepoError::OutOfRange {
                position,
                len: self.contacts.len(),
            });
        }
        Ok(())
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn get(&self, position: usize) -> Option<&Contact> {
        self.contacts.get(position)
    }

    fn list(&self) -> &[Contact] {
        &self.contacts
    }

    fn append(&mut self, contact: Contact) -> RepoResult<usize> {
        if self.position_of(contact.id).is_some() {
            return Err(RepoError::DuplicateId(contact.id));
        }
        self.contacts.push(contact);
        Ok(self.contacts.len() - 1)
    }

    fn replace_at(&mut self, position: usize, contact: Contact) -> RepoResult<Contact> {
        self.check_position(position)?;
        if let Some(existing) = self.position_of(contact.id) {
            if existing != position {
                return Err(RepoError::DuplicateId(contact.id));
            }
        }
        Ok(std::mem::replace(&mut self.contacts[position], contact))
    }

    fn remove_at(&mut self, position: usize) -> RepoResult<Contact> {
        self.check_position(position)?;
        Ok(self.contacts.remove(position))
    }

    fn position_of(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id == id)
    }
}

impl FromIterator<Contact> for InMemoryContactRepository {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut repo = Self::new();
        for contact in iter {
            // Duplicate ids keep the first occurrence.
            if let Err(err) = repo.append(contact) {
                debug!("event=contact_load module=repo status=skipped reason=\"{err}\"");
            }
        }
        repo
    }
}
