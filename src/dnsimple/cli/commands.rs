use super::logging;
use super::print::print_result;
use super::setup::{get_command_help, print_grouped_help, Cli};
use clap::Parser;
use dnsimple::client::Client;
use dnsimple::commands::{execute, lookup, CommandOptions};
use dnsimple::credentials::{config_path, ApiCredentials};
use dnsimple::error::{DnsimpleError, Result};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some((name, args)) = cli.command.split_first() else {
        print_grouped_help();
        return Ok(());
    };

    if name == "help" {
        return match args.first() {
            Some(target) => print_command_help(target),
            None => {
                print_grouped_help();
                Ok(())
            }
        };
    }
    if cli.help {
        return print_command_help(name);
    }

    // Unknown commands fail before credentials are touched.
    lookup(name).ok_or_else(|| DnsimpleError::CommandNotFound(name.clone()))?;

    let client = build_client(&cli)?;
    let options = CommandOptions {
        template: cli.template.clone(),
    };
    let result = execute(&client, name, args, &options)?;
    print_result(&result);
    Ok(())
}

fn print_command_help(name: &str) -> Result<()> {
    let spec = lookup(name).ok_or_else(|| DnsimpleError::CommandNotFound(name.to_string()))?;
    print!("{}", get_command_help(spec));
    Ok(())
}

fn explicit_credentials(cli: &Cli) -> ApiCredentials {
    let mut credentials = ApiCredentials::default();
    if let Some(username) = &cli.username {
        credentials = credentials.with_username(username);
    }
    if let Some(password) = &cli.password {
        credentials = credentials.with_password(password);
    }
    if let Some(token) = &cli.api_token {
        credentials = credentials.with_api_token(token);
    }
    if let Some(site) = &cli.site {
        credentials = credentials.with_host(site);
    }
    credentials
}

fn build_client(cli: &Cli) -> Result<Client> {
    let path = config_path(cli.credentials.as_deref())?;
    let credentials = explicit_credentials(cli).resolve(&path)?;
    tracing::debug!(host = %credentials.base_url(), "resolved credentials");
    Client::from_credentials(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_explicit_credentials() {
        let cli = Cli::parse_from(["dnsimple", "-u", "ops@example.com", "-p", "secret", "list"]);
        let credentials = explicit_credentials(&cli);
        assert_eq!(credentials.username.as_deref(), Some("ops@example.com"));
        assert_eq!(credentials.password.as_deref(), Some("secret"));
        assert!(credentials.api_token.is_none());
    }
}
