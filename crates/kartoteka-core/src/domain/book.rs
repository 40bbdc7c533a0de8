use crate::domain::contact::Contact;
use crate::error::BookError;
use std::cmp::Ordering;

/// Ordered, index-addressed collection of contacts.
///
/// Order is insertion order until [`sort_by`](ContactBook::sort_by) is
/// called. Removal shifts later entries down by one; indices are positions,
/// not stable identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the end. The contact is already validated, so this cannot
    /// fail.
    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Removes and returns the contact at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Contact, BookError> {
        self.check_index(index)?;
        Ok(self.contacts.remove(index))
    }

    /// Replaces the contact at `index` wholesale.
    pub fn update(&mut self, index: usize, contact: Contact) -> Result<(), BookError> {
        self.check_index(index)?;
        self.contacts[index] = contact;
        Ok(())
    }

    /// Immutable access only; mutation goes through [`update`](Self::update)
    /// or the validating setters on an owned clone.
    pub fn get(&self, index: usize) -> Result<&Contact, BookError> {
        self.check_index(index)?;
        Ok(&self.contacts[index])
    }

    /// Read-only view of the full sequence in current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Clones of every contact matching `predicate`, in original relative
    /// order.
    pub fn search<F>(&self, predicate: F) -> Vec<Contact>
    where
        F: Fn(&Contact) -> bool,
    {
        self.contacts
            .iter()
            .filter(|contact| predicate(contact))
            .cloned()
            .collect()
    }

    /// In-place stable sort, so equal keys keep their relative order.
    pub fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&Contact, &Contact) -> Ordering,
    {
        self.contacts.sort_by(comparator);
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub(crate) fn replace_contents(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    fn check_index(&self, index: usize) -> Result<(), BookError> {
        if index >= self.contacts.len() {
            return Err(BookError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(())
    }
}
