//! Contact list state manager.
//!
//! # Responsibility
//! - Own the ordered contact list and the single in-progress form draft.
//! - Gate deletion behind an explicit confirmation step.
//! - Project stored contacts into list rows for the presentation layer.
//!
//! # Invariants
//! - At most one draft and one pending delete confirmation exist at a time.
//! - Draft edits never touch the list until a successful commit.
//! - Rejected commits leave both the list and the open draft unchanged.
//! - Out-of-range positions are no-ops, never index faults.
//! - Logs carry positions and counts only, never names or phone numbers.

use crate::config::StoreConfig;
use crate::model::contact::{Category, Contact, ContactId, ContactValidationError};
use crate::model::draft::{Draft, DraftTarget};
use crate::repo::contact_repo::{ContactRepository, InMemoryContactRepository, RepoError};
use log::{debug, info, warn};

/// Result of `ContactStore::commit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Add-mode draft appended at `position`.
    Added { position: usize, contact_id: ContactId },
    /// Edit-mode draft replaced the contact at `position`.
    Replaced { position: usize, contact_id: ContactId },
    /// Required field missing; the form stays open.
    Rejected(ContactValidationError),
    /// Edit target was deleted while the form was open; the form is closed.
    Stale,
    /// Repository refused the write; the form stays open.
    Failed(RepoError),
    /// No form was open.
    NoSession,
}

impl CommitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Added { .. } | Self::Replaced { .. })
    }
}

/// Pending delete prompt naming the contact about to be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub position: usize,
    pub contact_id: ContactId,
    /// Display name used in the prompt text.
    pub name: String,
}

impl DeleteConfirmation {
    pub fn prompt(&self) -> String {
        format!("Remove \"{}\"?", self.name)
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub position: usize,
    pub contact_id: ContactId,
    pub name: String,
    pub phone: String,
    /// Comma-joined labels, or the configured placeholder.
    pub categories_label: String,
}

/// State manager over an ordered contact repository.
pub struct ContactStore<R: ContactRepository = InMemoryContactRepository> {
    repo: R,
    config: StoreConfig,
    session: Option<Draft>,
    pending_delete: Option<DeleteConfirmation>,
}

impl ContactStore<InMemoryContactRepository> {
    /// Creates an empty in-memory store with default configuration.
    pub fn new() -> Self {
        Self::with_repo(InMemoryContactRepository::new(), StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_repo(InMemoryContactRepository::new(), config)
    }
}

impl Default for ContactStore<InMemoryContactRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ContactRepository> ContactStore<R> {
    pub fn with_repo(repo: R, config: StoreConfig) -> Self {
        Self {
            repo,
            config,
            session: None,
            pending_delete: None,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn contacts(&self) -> &[Contact] {
        self.repo.list()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.session.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn pending_delete(&self) -> Option<&DeleteConfirmation> {
        self.pending_delete.as_ref()
    }

    /// Projects the list into display rows.
    pub fn rows(&self) -> Vec<ContactRow> {
        self.repo
            .list()
            .iter()
            .enumerate()
            .map(|(position, contact)| ContactRow {
                position,
                contact_id: contact.id,
                name: contact.name.clone(),
                phone: contact.phone.clone(),
                categories_label: contact.category_summary(&self.config.empty_categories_label),
            })
            .collect()
    }

    /// Opens the form with an empty add-mode draft, discarding any open draft.
    pub fn begin_add(&mut self) -> &Draft {
        debug!("event=form_open module=store mode=add");
        self.session.insert(Draft::empty())
    }

    /// Opens the form pre-populated from the contact at `position`.
    ///
    /// Returns `false` and leaves the session untouched when `position` is out
    /// of range.
    pub fn begin_edit(&mut self, position: usize) -> bool {
        let Some(contact) = self.repo.get(position) else {
            warn!(
                "event=form_open module=store mode=edit status=out_of_range position={} len={}",
                position,
                self.repo.len()
            );
            return false;
        };
        self.session = Some(Draft::from_contact(position, contact));
        debug!("event=form_open module=store mode=edit position={position}");
        true
    }

    /// Replaces the draft name. Returns `false` when no form is open.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        match self.session.as_mut() {
            Some(draft) => {
                draft.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Replaces the draft phone. Returns `false` when no form is open.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> bool {
        match self.session.as_mut() {
            Some(draft) => {
                draft.phone = phone.into();
                true
            }
            None => false,
        }
    }

    /// Toggles `category` on the open draft. Returns `false` when no form is open.
    ///
    /// Membership in the configured vocabulary is not enforced; the vocabulary
    /// only lists the chips the form offers.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        match self.session.as_mut() {
            Some(draft) => {
                draft.toggle_category(category);
                true
            }
            None => false,
        }
    }

    /// Validates and writes the open draft.
    ///
    /// Add drafts append; edit drafts replace their target in place. Edit
    /// targets are re-resolved by id, so a draft opened before an earlier row
    /// was deleted still lands on the right contact.
    pub fn commit(&mut self) -> CommitOutcome {
        let Some(draft) = self.session.as_ref() else {
            return CommitOutcome::NoSession;
        };

        if let Err(err) = draft.validate(self.config.validation) {
            debug!("event=contact_commit module=store status=rejected reason=\"{err}\"");
            return CommitOutcome::Rejected(err);
        }

        let contact = draft.to_contact();
        let contact_id = contact.id;
        let target = draft.target;
        let outcome = match target {
            DraftTarget::New => match self.repo.append(contact) {
                Ok(position) => CommitOutcome::Added {
                    position,
                    contact_id,
                },
                Err(err) => CommitOutcome::Failed(err),
            },
            DraftTarget::Existing {
                position,
                contact_id,
            } => match self.resolve(position, contact_id) {
                Some(position) => match self.repo.replace_at(position, contact) {
                    Ok(_) => CommitOutcome::Replaced {
                        position,
                        contact_id,
                    },
                    Err(err) => CommitOutcome::Failed(err),
                },
                None => CommitOutcome::Stale,
            },
        };

        match &outcome {
            CommitOutcome::Added { position, .. } => {
                info!(
                    "event=contact_commit module=store status=ok mode=add position={} count={}",
                    position,
                    self.repo.len()
                );
                self.session = None;
            }
            CommitOutcome::Replaced { position, .. } => {
                info!(
                    "event=contact_commit module=store status=ok mode=edit position={} count={}",
                    position,
                    self.repo.len()
                );
                self.session = None;
            }
            CommitOutcome::Stale => {
                warn!("event=contact_commit module=store status=stale");
                self.session = None;
            }
            CommitOutcome::Failed(err) => {
                warn!("event=contact_commit module=store status=error error=\"{err}\"");
            }
            CommitOutcome::Rejected(_) | CommitOutcome::NoSession => {}
        }
        outcome
    }

    /// Closes the form without touching the list. Returns whether a form was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.session.take().is_some();
        if was_open {
            debug!("event=form_close module=store status=cancelled");
        }
        was_open
    }

    /// Opens a delete confirmation for the contact at `position`.
    ///
    /// Returns `None` when `position` is out of range. A new request replaces
    /// any prompt already pending.
    pub fn request_delete(&mut self, position: usize) -> Option<&DeleteConfirmation> {
        let Some(contact) = self.repo.get(position) else {
            warn!(
                "event=delete_request module=store status=out_of_range position={} len={}",
                position,
                self.repo.len()
            );
            return None;
        };
        let confirmation = DeleteConfirmation {
            position,
            contact_id: contact.id,
            name: contact.name.clone(),
        };
        debug!("event=delete_request module=store status=pending position={position}");
        Some(&*self.pending_delete.insert(confirmation))
    }

    /// Removes the contact named by the pending confirmation.
    ///
    /// Returns the position the contact was removed from and the contact, or
    /// `None` when nothing was pending or the contact is already gone.
    pub fn confirm_delete(&mut self) -> Option<(usize, Contact)> {
        let confirmation = self.pending_delete.take()?;
        let position = self.resolve(confirmation.position, confirmation.contact_id)?;
        match self.repo.remove_at(position) {
            Ok(removed) => {
                info!(
                    "event=contact_delete module=store status=ok position={} count={}",
                    position,
                    self.repo.len()
                );
                Some((position, removed))
            }
            Err(err) => {
                warn!("event=contact_delete module=store status=error error=\"{err}\"");
                None
            }
        }
    }

    /// Dismisses the pending confirmation. Returns whether one was pending.
    pub fn cancel_delete(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }

    /// Finds the current position of `contact_id`, trying `hint` first.
    fn resolve(&self, hint: usize, contact_id: ContactId) -> Option<usize> {
        match self.repo.get(hint) {
            Some(contact) if contact.id == contact_id => Some(hint),
            _ => self.repo.position_of(contact_id),
        }
    }
}
