use clap::{CommandFactory, Parser};
use dnsimple::commands::{registry, CommandGroup, CommandSpec};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dnsimple",
    bin_name = "dnsimple",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Manage domains, records and templates on DNSimple", long_about = None)]
pub struct Cli {
    /// Account username (email)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Account password
    #[arg(short, long)]
    pub password: Option<String>,

    /// API token, used when no password is given
    #[arg(short = 't', long = "api-token")]
    pub api_token: Option<String>,

    /// API host, e.g. api.sandbox.dnsimple.com
    #[arg(short, long)]
    pub site: Option<String>,

    /// Credentials file (default: $DNSIMPLE_CONFIG or ~/.dnsimple)
    #[arg(short, long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Template to apply after create or register
    #[arg(long)]
    pub template: Option<String>,

    /// Log requests to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,

    /// Command name followed by its arguments
    #[arg(value_name = "COMMAND")]
    pub command: Vec<String>,
}

const OPTIONS_HELP: &str = "\
Options:
  -u, --username <USERNAME>    Account username (email)
  -p, --password <PASSWORD>    Account password
  -t, --api-token <TOKEN>      API token, used when no password is given
  -s, --site <SITE>            API host, e.g. api.sandbox.dnsimple.com
  -c, --credentials <PATH>     Credentials file (default: $DNSIMPLE_CONFIG or ~/.dnsimple)
      --template <TEMPLATE>    Template to apply after create or register
  -v, --verbose                Log requests to stderr
  -h, --help                   Print help
  -V, --version                Print version
";

/// The grouped command overview, built from the command registry.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("dnsimple {version}\n"));
    output.push_str("Manage domains, records and templates on DNSimple\n");
    output.push('\n');
    output.push_str("Usage: dnsimple [OPTIONS] <COMMAND> [ARGS]...\n");

    let width = registry().iter().map(|spec| spec.name.len()).max().unwrap_or(0);
    for group in CommandGroup::all() {
        let specs: Vec<&CommandSpec> = registry().iter().filter(|s| s.group == *group).collect();
        if specs.is_empty() {
            continue;
        }
        output.push('\n');
        output.push_str(&format!("{}\n", group.heading()));
        for spec in specs {
            output.push_str(&format!("  {:<width$}  {}\n", spec.name, spec.about));
        }
    }

    output.push('\n');
    output.push_str(OPTIONS_HELP);
    output.push('\n');
    output.push_str("Run `dnsimple help <COMMAND>` for a command's arguments.\n");
    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn get_command_help(spec: &CommandSpec) -> String {
    format!("{}\n\nUsage: {}\n", spec.about, spec.usage())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_can_follow_the_command() {
        let cli = Cli::parse_from([
            "dnsimple",
            "create",
            "example.com",
            "--template",
            "googleapps",
        ]);
        assert_eq!(cli.command, vec!["create", "example.com"]);
        assert_eq!(cli.template.as_deref(), Some("googleapps"));
    }

    #[test]
    fn short_credential_flags() {
        let cli = Cli::parse_from([
            "dnsimple", "-u", "ops@example.com", "-t", "abc", "-s", "sandbox", "list",
        ]);
        assert_eq!(cli.username.as_deref(), Some("ops@example.com"));
        assert_eq!(cli.api_token.as_deref(), Some("abc"));
        assert_eq!(cli.site.as_deref(), Some("sandbox"));
        assert_eq!(cli.command, vec!["list"]);
    }

    #[test]
    fn grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for group in CommandGroup::all() {
            assert!(help.contains(group.heading()));
        }
        for spec in registry() {
            assert!(help.contains(spec.name), "missing {}", spec.name);
        }
    }
}
