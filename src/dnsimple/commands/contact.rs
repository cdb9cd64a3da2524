use super::helpers::{arg, format_timestamp, or_dash, parse_attributes, plural, rest};
use super::{CmdMessage, CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::Contact;

pub fn list(client: &Client, _args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let contacts = Contact::all(client)?;
    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {}:",
        plural(contacts.len(), "contact", "contacts")
    ));
    for contact in &contacts {
        result.add_line(format!("\t{} (id: {})", contact.display_name(), contact.id));
    }
    Ok(result)
}

pub fn describe(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let contact = Contact::find(client, arg(args, 0))?;

    let address = [
        contact.address1.as_deref(),
        contact.address2.as_deref(),
        contact.city.as_deref(),
        contact.state_province.as_deref(),
        contact.postal_code.as_deref(),
        contact.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    let mut result = CmdResult::default();
    result.add_line(format!("Contact {}:", contact.display_name()));
    result.add_line(format!("\tID: {}", contact.id));
    result.add_line(format!("\tJob title: {}", or_dash(contact.job_title.as_deref())));
    result.add_line(format!("\tAddress: {}", or_dash(Some(address.as_str()))));
    result.add_line(format!("\tEmail: {}", or_dash(contact.email_address.as_deref())));
    result.add_line(format!("\tPhone: {}", or_dash(contact.phone.as_deref())));
    result.add_line(format!("\tFax: {}", or_dash(contact.fax.as_deref())));
    result.add_line(format!("\tCreated: {}", format_timestamp(contact.created_at)));
    result.add_line(format!("\tUpdated: {}", format_timestamp(contact.updated_at)));
    Ok(result)
}

pub fn create(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let attributes = parse_attributes(args)?;
    let contact = Contact::create(client, &attributes)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created contact {} (id: {})",
        contact.display_name(),
        contact.id
    ))))
}

pub fn update(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let attributes = parse_attributes(rest(args, 1))?;
    let contact = Contact::update(client, arg(args, 0), &attributes)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Updated contact {}",
        contact.display_name()
    ))))
}

pub fn delete(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let id = arg(args, 0);
    Contact::delete(client, id)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Deleted contact {}", id))))
}
