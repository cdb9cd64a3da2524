use super::helpers::{arg, column_width, optional, or_dash, pad, plural};
use super::record::new_record;
use super::{CmdMessage, CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::{Template, TemplateRecord};

pub fn list(client: &Client, _args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let templates = Template::all(client)?;
    let width = column_width(templates.iter().map(|t| t.short_name.as_str()));

    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {}:",
        plural(templates.len(), "template", "templates")
    ));
    for template in &templates {
        result.add_line(format!(
            "\t{}  {} ({})",
            pad(&template.short_name, width),
            template.name,
            or_dash(template.description.as_deref())
        ));
    }
    Ok(result)
}

pub fn create(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let template = Template::create(client, arg(args, 0), arg(args, 1), optional(args, 2))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created template {} ({})",
        template.name, template.short_name
    ))))
}

pub fn delete(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let short_name = arg(args, 0);
    Template::delete(client, short_name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Deleted template {}", short_name))))
}

pub fn list_records(
    client: &Client,
    args: &[String],
    _options: &CommandOptions,
) -> Result<CmdResult> {
    let template = arg(args, 0);
    let records = TemplateRecord::all(client, template)?;
    let name_width = column_width(records.iter().map(|r| r.name.as_str()));

    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {} for template {}",
        plural(records.len(), "record", "records"),
        template
    ));
    for record in &records {
        let name = if record.name.is_empty() { "@" } else { record.name.as_str() };
        result.add_line(format!(
            "\t{}  {}  {}  (id:{})",
            pad(name, name_width.max(1)),
            record.record_type,
            record.content,
            record.id
        ));
    }
    Ok(result)
}

pub fn add_record(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let template = arg(args, 0);
    let new = new_record(args, 1)?;
    let record = TemplateRecord::create(client, template, &new)?;
    let name = if record.name.is_empty() { "@" } else { record.name.as_str() };
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Added {} record {} to template {}",
        record.record_type, name, template
    ))))
}

pub fn delete_record(
    client: &Client,
    args: &[String],
    _options: &CommandOptions,
) -> Result<CmdResult> {
    let template = arg(args, 0);
    let id = arg(args, 1);
    TemplateRecord::delete(client, template, id)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted record {} from template {}",
        id, template
    ))))
}
