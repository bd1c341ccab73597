use clap::Args;
use serde::Serialize;

use soberpath_core::{Contact, ContactBook, Relationship};

#[derive(Args)]
pub struct ContactsArgs {
    /// Contact name
    #[arg(long, requires = "phone")]
    name: Option<String>,
    /// Phone number; spaces, dashes, dots and parentheses are ignored
    #[arg(long, requires = "name")]
    phone: Option<String>,
    /// Relationship (family_member, friend, sponsor, therapist, doctor,
    /// support_group_member, mentor, other)
    #[arg(long, requires = "name")]
    relationship: Option<Relationship>,
    /// Mark the contact as primary
    #[arg(long, requires = "name")]
    primary: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ContactsReport<'a> {
    contacts: &'a [Contact],
    primary_count: usize,
}

/// Validate one contact and show the resulting list.
pub fn run(args: ContactsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut book = ContactBook::new();
    if let (Some(name), Some(phone)) = (&args.name, &args.phone) {
        book.add(name, phone, args.relationship, args.primary)?;
    }

    if args.json {
        let report = ContactsReport {
            contacts: book.contacts(),
            primary_count: book.primary().count(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if book.is_empty() {
        println!("No emergency contacts. Add one with --name and --phone.");
        return Ok(());
    }
    for contact in book.contacts() {
        let star = if contact.is_primary { "*" } else { " " };
        println!(
            "{star} {} ({}) {}",
            contact.name,
            contact.relationship.label(),
            contact.formatted_phone()
        );
    }
    Ok(())
}
