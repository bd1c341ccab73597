//! Support network: emergency contacts and daily reminders.

mod contacts;
mod reminders;

pub use contacts::{normalize_phone, Contact, ContactBook, Relationship};
pub use reminders::{Reminder, ReminderSet};
