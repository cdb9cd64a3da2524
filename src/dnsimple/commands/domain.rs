use super::helpers::{arg, format_timestamp, optional, or_dash, parse_attributes, plural, rest};
use super::{CmdMessage, CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::{Domain, Record, TransferOrder};

fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

/// Apply `--template` to a freshly created or registered domain.
fn apply_requested_template(
    client: &Client,
    domain: &Domain,
    options: &CommandOptions,
    result: &mut CmdResult,
) -> Result<()> {
    if let Some(template) = options.template.as_deref() {
        domain.apply_template(client, template)?;
        result.add_message(CmdMessage::success(format!(
            "Applied template {} to {}",
            template, domain.name
        )));
    }
    Ok(())
}

pub fn list(client: &Client, _args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domains = Domain::all(client)?;
    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {}:",
        plural(domains.len(), "domain", "domains")
    ));
    for domain in &domains {
        result.add_line(format!("\t{}", domain.name));
    }
    Ok(result)
}

pub fn describe(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let expires = domain
        .expires_on
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut result = CmdResult::default();
    result.add_line(format!("Domain {}:", domain.name));
    result.add_line(format!("\tID: {}", domain.id));
    result.add_line(format!("\tState: {}", or_dash(domain.state.as_deref())));
    result.add_line(format!("\tExpires: {}", expires));
    result.add_line(format!("\tAuto renew: {}", yes_no(domain.auto_renew)));
    result.add_line(format!(
        "\tWHOIS protected: {}",
        yes_no(domain.whois_protected)
    ));
    result.add_line(format!(
        "\tName server status: {}",
        or_dash(domain.name_server_status.as_deref())
    ));
    if let Some(count) = domain.record_count {
        result.add_line(format!("\tRecords: {}", count));
    }
    if let Some(count) = domain.service_count {
        result.add_line(format!("\tServices: {}", count));
    }
    result.add_line(format!("\tCreated: {}", format_timestamp(domain.created_at)));
    result.add_line(format!("\tUpdated: {}", format_timestamp(domain.updated_at)));
    Ok(result)
}

pub fn check(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let name = arg(args, 0);
    let availability = Domain::check(client, name)?;
    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Check domain result for {}: {}",
        name,
        availability.as_str()
    ))))
}

pub fn create(client: &Client, args: &[String], options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::create(client, arg(args, 0))?;
    let mut result =
        CmdResult::default().with_message(CmdMessage::success(format!("Created {}", domain.name)));
    apply_requested_template(client, &domain, options, &mut result)?;
    Ok(result)
}

pub fn register(client: &Client, args: &[String], options: &CommandOptions) -> Result<CmdResult> {
    let extended = parse_attributes(rest(args, 2))?;
    let domain = Domain::register(client, arg(args, 0), arg(args, 1), &extended)?;
    let mut result = CmdResult::default()
        .with_message(CmdMessage::success(format!("Registered {}", domain.name)));
    apply_requested_template(client, &domain, options, &mut result)?;
    Ok(result)
}

pub fn transfer(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let name = arg(args, 0);
    let extended = parse_attributes(rest(args, 3))?;
    let order = TransferOrder::create(client, name, arg(args, 1), optional(args, 2), &extended)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Transfer for {} requested (status: {})",
        name,
        or_dash(order.status.as_deref())
    ))))
}

pub fn delete(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let name = arg(args, 0);
    Domain::delete(client, name)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Deleted {}", name))))
}

/// Delete every record that is not managed by the system (SOA, NS).
pub fn clear(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let records = Record::all(client, &domain)?;

    let mut deleted = 0;
    for record in records.iter().filter(|r| r.system_record != Some(true)) {
        Record::delete(client, &domain, &record.id.to_string())?;
        deleted += 1;
    }

    let message = if deleted == 0 {
        CmdMessage::warning(format!("No records to delete from {}", domain.name))
    } else {
        CmdMessage::success(format!(
            "Deleted {} from {}",
            plural(deleted, "record", "records"),
            domain.name
        ))
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn apply(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let template = arg(args, 1);
    domain.apply_template(client, template)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Applied template {} to {}",
        template, domain.name
    ))))
}
