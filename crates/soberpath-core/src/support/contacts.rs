//! Emergency contacts.
//!
//! A [`ContactBook`] is an [`ItemStore`] of [`Contact`]s with newest first.
//! Contacts only enter through [`ContactBook::add`], which requires a name
//! and a plausible phone number. The store's completion flag is the primary
//! marker.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::observer::SubscriptionId;
use crate::tracker::{InsertPosition, ItemDraft, ItemId, ItemStore, Snapshot, TargetValue, Trackable};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"));
static PHONE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-().]").expect("valid separator regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    FamilyMember,
    Friend,
    Sponsor,
    Therapist,
    Doctor,
    SupportGroupMember,
    Mentor,
    #[default]
    Other,
}

impl Relationship {
    pub const ALL: [Relationship; 8] = [
        Relationship::FamilyMember,
        Relationship::Friend,
        Relationship::Sponsor,
        Relationship::Therapist,
        Relationship::Doctor,
        Relationship::SupportGroupMember,
        Relationship::Mentor,
        Relationship::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::FamilyMember => "Family Member",
            Relationship::Friend => "Friend",
            Relationship::Sponsor => "Sponsor",
            Relationship::Therapist => "Therapist",
            Relationship::Doctor => "Doctor",
            Relationship::SupportGroupMember => "Support Group Member",
            Relationship::Mentor => "Mentor",
            Relationship::Other => "Other",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Relationship::FamilyMember => "family_member",
            Relationship::Friend => "friend",
            Relationship::Sponsor => "sponsor",
            Relationship::Therapist => "therapist",
            Relationship::Doctor => "doctor",
            Relationship::SupportGroupMember => "support_group_member",
            Relationship::Mentor => "mentor",
            Relationship::Other => "other",
        }
    }
}

snake_key_text!(Relationship, "relationship");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ItemId,
    pub name: String,
    /// As entered, trimmed.
    pub phone: String,
    pub relationship: Relationship,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// `(555) 123-4567` for ten-digit numbers, the stored text otherwise.
    pub fn formatted_phone(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        if digits.len() == 10 {
            format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
        } else {
            self.phone.clone()
        }
    }
}

impl Trackable for Contact {
    type Category = Relationship;

    fn create(id: ItemId, title: String, draft: ItemDraft<Relationship>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: title,
            phone: String::new(),
            relationship: draft.category.unwrap_or_default(),
            is_primary: false,
            created_at,
        }
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn is_completed(&self) -> bool {
        self.is_primary
    }

    fn set_completed(&mut self, completed: bool) {
        self.is_primary = completed;
    }

    fn category(&self) -> Option<&Relationship> {
        Some(&self.relationship)
    }

    fn target(&self) -> Option<&TargetValue> {
        None
    }
}

/// Strip separators and check the number shape.
///
/// # Errors
///
/// `MissingField("phone")` for blank input, `InvalidValue` otherwise.
pub fn normalize_phone(phone: &str) -> Result<String, ValidationError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(ValidationError::MissingField("phone"));
    }
    let cleaned = PHONE_SEPARATOR_RE.replace_all(phone, "");
    if PHONE_RE.is_match(&cleaned) {
        Ok(cleaned.into_owned())
    } else {
        Err(ValidationError::InvalidValue {
            field: "phone".into(),
            message: format!("not a valid phone number: {phone}"),
        })
    }
}

#[derive(Debug)]
pub struct ContactBook {
    store: ItemStore<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(InsertPosition::Front),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.items()
    }

    pub fn snapshot(&self) -> Snapshot<Contact> {
        self.store.snapshot()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Contact> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn primary(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.store.completed()
    }

    /// Add a contact at the front of the list. A missing relationship
    /// becomes [`Relationship::Other`].
    ///
    /// # Errors
    ///
    /// `MissingField("name")`, `MissingField("phone")` or `InvalidValue` for
    /// a malformed number. Name is checked first.
    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        relationship: Option<Relationship>,
        is_primary: bool,
    ) -> Result<Contact, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        normalize_phone(phone)?;

        let mut id = ItemId::generate();
        while self.store.contains(&id) {
            id = ItemId::generate();
        }
        let contact = Contact {
            id,
            name: name.to_string(),
            phone: phone.trim().to_string(),
            relationship: relationship.unwrap_or_default(),
            is_primary,
            created_at: Utc::now(),
        };
        tracing::debug!(relationship = %contact.relationship, is_primary, "adding contact");
        self.store.insert(contact)
    }

    pub fn toggle_primary(&mut self, id: &ItemId) -> Option<Event> {
        self.store.toggle(id)
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Event> {
        self.store.remove(id)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Event, &Snapshot<Contact>) + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_puts_newest_first_with_default_relationship() {
        let mut book = ContactBook::new();
        book.add("Sam", "555-123-4567", Some(Relationship::Sponsor), true)
            .unwrap();
        let second = book.add("  Alex ", "+44 20 7946 0958", None, false).unwrap();

        assert_eq!(book.contacts()[0].id, second.id);
        assert_eq!(second.name, "Alex");
        assert_eq!(second.relationship, Relationship::Other);
        assert_eq!(book.primary().count(), 1);
    }

    #[test]
    fn name_is_checked_before_phone() {
        let mut book = ContactBook::new();
        assert_eq!(
            book.add(" ", "", None, false),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            book.add("Sam", "  ", None, false),
            Err(ValidationError::MissingField("phone"))
        );
        assert!(book.is_empty());
    }

    #[test]
    fn phone_shape_is_validated_after_stripping_separators() {
        assert_eq!(normalize_phone("(555) 123-4567").unwrap(), "5551234567");
        assert_eq!(normalize_phone("+1.555.123.4567").unwrap(), "+15551234567");
        assert!(normalize_phone("0555123456").is_err());
        assert!(normalize_phone("call me maybe").is_err());
        assert!(normalize_phone("12345678901234567").is_err());

        let mut book = ContactBook::new();
        assert!(matches!(
            book.add("Sam", "abc", None, false),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn remove_and_primary_toggle_by_id() {
        let mut book = ContactBook::new();
        let sam = book.add("Sam", "5551234567", None, false).unwrap();

        assert!(matches!(
            book.toggle_primary(&sam.id),
            Some(Event::ItemToggled { completed: true, .. })
        ));
        assert!(book.get(&sam.id).unwrap().is_primary);

        assert!(book.remove(&ItemId::new("missing")).is_none());
        assert!(book.remove(&sam.id).is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn formatted_phone_groups_ten_digits() {
        let mut book = ContactBook::new();
        let us = book.add("Sam", "555.123.4567", None, false).unwrap();
        let uk = book.add("Alex", "+44 20 7946 0958", None, false).unwrap();
        assert_eq!(us.formatted_phone(), "(555) 123-4567");
        assert_eq!(uk.formatted_phone(), "+44 20 7946 0958");
    }

    #[test]
    fn relationship_parses_labels() {
        assert_eq!(
            "Support Group Member".parse::<Relationship>().unwrap(),
            Relationship::SupportGroupMember
        );
        assert!("neighbour".parse::<Relationship>().is_err());
    }
}
