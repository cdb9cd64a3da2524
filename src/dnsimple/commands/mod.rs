//! # Command Layer
//!
//! Every user-facing operation is a **command**: a handler registered under a
//! string name (`create`, `record:list`, ...) that performs one or two entity
//! calls and describes the outcome as a [`CmdResult`].
//!
//! ## Dispatch
//!
//! [`execute`] is the single entry point. It looks the name up in the static
//! registry, checks the argument count against the command's declared arity,
//! and runs the handler with the caller's [`Client`]:
//!
//! ```text
//!   execute("record:delete", ["example.com", "42"], options)
//!        │
//!        ├─ lookup ─────────► CommandNotFound if the name is unknown
//!        ├─ arity check ────► Usage("dnsimple record:delete <domain> <record_id>")
//!        └─ handler
//!             ├─ Domain::find      GET    /domains/example.com
//!             └─ Record::delete    DELETE /domains/example.com/records/42
//! ```
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: handlers return lines and messages; the CLI prints them
//! - **Error recovery**: entity errors propagate untouched; the caller is the
//!   single place that turns them into a diagnostic
//! - **Credential handling**: the [`Client`] arrives fully configured
//!
//! ## Command Modules
//!
//! - [`domain`]: create, register, transfer, describe, list, delete, clear, apply, check
//! - [`record`]: zone record management
//! - [`template`]: templates and their records
//! - [`contact`]: registrant contacts
//! - [`service`]: one-click services
//! - [`certificate`]: SSL certificates
//! - [`user`]: account information
//! - [`extended_attribute`]: registry-specific attributes per TLD

use crate::client::Client;
use crate::error::{DnsimpleError, Result};
use once_cell::sync::Lazy;

pub mod certificate;
pub mod contact;
pub mod domain;
pub mod extended_attribute;
pub mod helpers;
pub mod record;
pub mod service;
pub mod template;
pub mod user;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command produced: plain output lines (listings, descriptions)
/// followed by status messages.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub lines: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Every line and message, in print order.
    pub fn text(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .chain(self.messages.iter().map(|m| m.content.as_str()))
            .collect()
    }
}

/// Options that apply across commands.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Template to apply right after `create` or `register`.
    pub template: Option<String>,
}

pub type Handler = fn(&Client, &[String], &CommandOptions) -> Result<CmdResult>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Account,
    Domain,
    Record,
    Template,
    Contact,
    Service,
    Certificate,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Account => "Account Commands:",
            CommandGroup::Domain => "Domain Commands:",
            CommandGroup::Record => "Record Commands:",
            CommandGroup::Template => "Template Commands:",
            CommandGroup::Contact => "Contact Commands:",
            CommandGroup::Service => "Service Commands:",
            CommandGroup::Certificate => "Certificate Commands:",
        }
    }

    /// All groups in display order.
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Account,
            CommandGroup::Domain,
            CommandGroup::Record,
            CommandGroup::Template,
            CommandGroup::Contact,
            CommandGroup::Service,
            CommandGroup::Certificate,
        ]
    }
}

pub struct CommandSpec {
    pub name: &'static str,
    /// Argument synopsis, e.g. `<domain> <record_id>`.
    pub arguments: &'static str,
    pub about: &'static str,
    pub group: CommandGroup,
    min_args: usize,
    /// `None` means variadic.
    max_args: Option<usize>,
    handler: Handler,
}

impl CommandSpec {
    pub fn usage(&self) -> String {
        if self.arguments.is_empty() {
            format!("dnsimple {}", self.name)
        } else {
            format!("dnsimple {} {}", self.name, self.arguments)
        }
    }

    fn accepts(&self, count: usize) -> bool {
        count >= self.min_args && self.max_args.map_or(true, |max| count <= max)
    }
}

macro_rules! command {
    ($name:literal, $args:literal, $about:literal, $group:ident, $min:literal..=$max:literal, $handler:path) => {
        CommandSpec {
            name: $name,
            arguments: $args,
            about: $about,
            group: CommandGroup::$group,
            min_args: $min,
            max_args: Some($max),
            handler: $handler,
        }
    };
    ($name:literal, $args:literal, $about:literal, $group:ident, $min:literal.., $handler:path) => {
        CommandSpec {
            name: $name,
            arguments: $args,
            about: $about,
            group: CommandGroup::$group,
            min_args: $min,
            max_args: None,
            handler: $handler,
        }
    };
}

#[rustfmt::skip]
static REGISTRY: Lazy<Vec<CommandSpec>> = Lazy::new(|| {
    vec![
        command!("info", "", "Show account information", Account, 0..=0, user::info),
        command!("extended-attributes:list", "<tld>", "List extended attributes a TLD requires", Account, 1..=1, extended_attribute::list),

        command!("list", "", "List domains", Domain, 0..=0, domain::list),
        command!("describe", "<domain>", "Describe a domain", Domain, 1..=1, domain::describe),
        command!("check", "<domain>", "Check whether a domain is available", Domain, 1..=1, domain::check),
        command!("create", "<domain>", "Add a domain for DNS hosting", Domain, 1..=1, domain::create),
        command!("register", "<domain> <registrant_id> [name:value ...]", "Register a domain", Domain, 2.., domain::register),
        command!("transfer", "<domain> <registrant_id> [authinfo] [name:value ...]", "Transfer a domain in", Domain, 2.., domain::transfer),
        command!("delete", "<domain>", "Delete a domain", Domain, 1..=1, domain::delete),
        command!("clear", "<domain>", "Delete every record of a domain", Domain, 1..=1, domain::clear),
        command!("apply", "<domain> <template>", "Apply a template to a domain", Domain, 2..=2, domain::apply),

        command!("record:list", "<domain>", "List records of a domain", Record, 1..=1, record::list),
        command!("record:describe", "<domain> <record_id>", "Describe a record", Record, 2..=2, record::describe),
        command!("record:create", "<domain> <name> <type> <content> [ttl] [prio]", "Create a record", Record, 4..=6, record::create),
        command!("record:update", "<domain> <record_id> name:value ...", "Update a record", Record, 3.., record::update),
        command!("record:delete", "<domain> <record_id>", "Delete a record", Record, 2..=2, record::delete),

        command!("template:list", "", "List templates", Template, 0..=0, template::list),
        command!("template:create", "<name> <short_name> [description]", "Create a template", Template, 2..=3, template::create),
        command!("template:delete", "<template>", "Delete a template", Template, 1..=1, template::delete),
        command!("template:list_records", "<template>", "List records of a template", Template, 1..=1, template::list_records),
        command!("template:add_record", "<template> <name> <type> <content> [ttl] [prio]", "Add a record to a template", Template, 4..=6, template::add_record),
        command!("template:delete_record", "<template> <template_record_id>", "Delete a record from a template", Template, 2..=2, template::delete_record),

        command!("contact:list", "", "List contacts", Contact, 0..=0, contact::list),
        command!("contact:describe", "<contact_id>", "Describe a contact", Contact, 1..=1, contact::describe),
        command!("contact:create", "name:value ...", "Create a contact", Contact, 1.., contact::create),
        command!("contact:update", "<contact_id> name:value ...", "Update a contact", Contact, 2.., contact::update),
        command!("contact:delete", "<contact_id>", "Delete a contact", Contact, 1..=1, contact::delete),

        command!("service:list", "", "List available services", Service, 0..=0, service::list),
        command!("service:describe", "<service>", "Describe a service", Service, 1..=1, service::describe),
        command!("service:applied", "<domain>", "List services applied to a domain", Service, 1..=1, service::applied),
        command!("service:available", "<domain>", "List services that can be applied to a domain", Service, 1..=1, service::available),
        command!("service:add", "<domain> <service>", "Apply a service to a domain", Service, 2..=2, service::add),
        command!("service:remove", "<domain> <service>", "Remove a service from a domain", Service, 2..=2, service::remove),

        command!("certificate:list", "<domain>", "List certificates of a domain", Certificate, 1..=1, certificate::list),
        command!("certificate:describe", "<domain> <certificate_id>", "Describe a certificate", Certificate, 2..=2, certificate::describe),
        command!("certificate:purchase", "<domain> <name> <contact_id>", "Purchase a certificate", Certificate, 3..=3, certificate::purchase),
        command!("certificate:submit", "<domain> <certificate_id> <approver_email>", "Submit a certificate for approval", Certificate, 3..=3, certificate::submit),
    ]
});

/// Every registered command, in display order.
pub fn registry() -> &'static [CommandSpec] {
    &REGISTRY
}

pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Run the command registered under `name`.
pub fn execute(
    client: &Client,
    name: &str,
    args: &[String],
    options: &CommandOptions,
) -> Result<CmdResult> {
    let spec = lookup(name).ok_or_else(|| DnsimpleError::CommandNotFound(name.to_string()))?;
    if !spec.accepts(args.len()) {
        return Err(DnsimpleError::Usage(spec.usage()));
    }
    tracing::debug!(command = spec.name, args = args.len(), "executing command");
    (spec.handler)(client, args, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::MockTransport;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_grouped() {
        let mut seen = HashSet::new();
        for spec in registry() {
            assert!(seen.insert(spec.name), "duplicate command {}", spec.name);
            assert!(CommandGroup::all().contains(&spec.group));
        }
    }

    #[test]
    fn unknown_command_is_reported() {
        let mock = MockTransport::new();
        let err = execute(&mock.client(), "frobnicate", &[], &CommandOptions::default()).unwrap_err();
        assert!(matches!(err, DnsimpleError::CommandNotFound(ref name) if name == "frobnicate"));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn wrong_arity_reports_usage_without_requests() {
        let mock = MockTransport::new();
        let err = execute(
            &mock.client(),
            "record:delete",
            &["example.com".to_string()],
            &CommandOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DnsimpleError::Usage(ref usage) if usage == "dnsimple record:delete <domain> <record_id>"
        ));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn variadic_commands_accept_extra_arguments() {
        let spec = lookup("register").unwrap();
        assert!(!spec.accepts(1));
        assert!(spec.accepts(2));
        assert!(spec.accepts(7));
    }
}
