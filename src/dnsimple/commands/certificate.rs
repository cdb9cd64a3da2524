use super::helpers::{arg, format_timestamp, or_dash, plural};
use super::{CmdMessage, CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::{Certificate, Domain};

pub fn list(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let certificates = Certificate::all(client, &domain)?;

    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {} for {}",
        plural(certificates.len(), "certificate", "certificates"),
        domain.name
    ));
    for certificate in &certificates {
        let expires = certificate
            .expires_on
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        result.add_line(format!(
            "\t{}  {}  expires {}  (id:{})",
            certificate.fqdn(&domain.name),
            or_dash(certificate.state.as_deref()),
            expires,
            certificate.id
        ));
    }
    Ok(result)
}

pub fn describe(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let certificate = Certificate::find(client, &domain, arg(args, 1))?;

    let mut result = CmdResult::default();
    result.add_line(format!("Certificate {}:", certificate.fqdn(&domain.name)));
    result.add_line(format!("\tID: {}", certificate.id));
    result.add_line(format!("\tState: {}", or_dash(certificate.state.as_deref())));
    result.add_line(format!(
        "\tApprover email: {}",
        or_dash(certificate.approver_email.as_deref())
    ));
    if let Some(expires) = certificate.expires_on {
        result.add_line(format!("\tExpires: {}", expires));
    }
    result.add_line(format!(
        "\tCreated: {}",
        format_timestamp(certificate.created_at)
    ));
    if let Some(csr) = certificate.csr.as_deref().filter(|s| !s.is_empty()) {
        result.add_line("\tCSR:");
        result.add_line(csr);
    }
    if let Some(pem) = certificate.ssl_certificate.as_deref().filter(|s| !s.is_empty()) {
        result.add_line("\tCertificate:");
        result.add_line(pem);
    }
    Ok(result)
}

pub fn purchase(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let certificate = Certificate::purchase(client, &domain, arg(args, 1), arg(args, 2))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Purchased certificate for {}",
        certificate.fqdn(&domain.name)
    ))))
}

pub fn submit(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let id = arg(args, 1);
    Certificate::submit(client, &domain, id, arg(args, 2))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Submitted certificate {} for {}",
        id, domain.name
    ))))
}
