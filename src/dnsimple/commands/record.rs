use super::helpers::{
    arg, column_width, format_timestamp, optional, pad, parse_attributes, parse_number, plural,
    rest,
};
use super::{CmdMessage, CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::{Domain, NewRecord, Record};

/// Build a record from `<name> <type> <content> [ttl] [prio]` starting at `from`.
/// `@` names the apex.
pub(super) fn new_record(args: &[String], from: usize) -> Result<NewRecord> {
    let name = match arg(args, from) {
        "@" => "",
        name => name,
    };
    let mut record = NewRecord::new(name, arg(args, from + 1), arg(args, from + 2));
    record.ttl = parse_number(optional(args, from + 3), "ttl")?;
    record.prio = parse_number(optional(args, from + 4), "prio")?;
    Ok(record)
}

pub fn list(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let records = Record::all(client, &domain)?;

    let names: Vec<String> = records.iter().map(|r| r.fqdn(&domain.name)).collect();
    let name_width = column_width(names.iter().map(String::as_str));
    let type_width = column_width(records.iter().map(|r| r.record_type.as_str()));

    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {} for {}",
        plural(records.len(), "record", "records"),
        domain.name
    ));
    for (record, name) in records.iter().zip(&names) {
        let ttl = record.ttl.map(|t| t.to_string()).unwrap_or_default();
        let mut line = format!(
            "\t{}  {}  {}  (id:{}, ttl:{}",
            pad(name, name_width),
            pad(&record.record_type, type_width),
            record.content,
            record.id,
            ttl
        );
        if let Some(prio) = record.prio {
            line.push_str(&format!(", prio:{}", prio));
        }
        line.push(')');
        result.add_line(line);
    }
    Ok(result)
}

pub fn describe(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let record = Record::find(client, &domain, arg(args, 1))?;

    let mut result = CmdResult::default();
    result.add_line(format!("Record {}:", record.fqdn(&domain.name)));
    result.add_line(format!("\tID: {}", record.id));
    result.add_line(format!("\tType: {}", record.record_type));
    result.add_line(format!("\tContent: {}", record.content));
    if let Some(ttl) = record.ttl {
        result.add_line(format!("\tTTL: {}", ttl));
    }
    if let Some(prio) = record.prio {
        result.add_line(format!("\tPriority: {}", prio));
    }
    result.add_line(format!("\tCreated: {}", format_timestamp(record.created_at)));
    result.add_line(format!("\tUpdated: {}", format_timestamp(record.updated_at)));
    Ok(result)
}

pub fn create(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let new = new_record(args, 1)?;
    let domain = Domain::find(client, arg(args, 0))?;
    let record = Record::create(client, &domain, &new)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created {} record for {}: {} (id: {})",
        record.record_type,
        record.fqdn(&domain.name),
        record.content,
        record.id
    ))))
}

pub fn update(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let changes = parse_attributes(rest(args, 2))?;
    let domain = Domain::find(client, arg(args, 0))?;
    let id = arg(args, 1);
    Record::update(client, &domain, id, &changes)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Updated record {} for {}",
        id, domain.name
    ))))
}

pub fn delete(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let id = arg(args, 1);
    Record::delete(client, &domain, id)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted {} from {}",
        id, domain.name
    ))))
}
