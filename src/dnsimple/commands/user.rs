use super::helpers::format_timestamp;
use super::{CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::User;

fn count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn info(client: &Client, _args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let user = User::me(client)?;
    let mut result = CmdResult::default();
    result.add_line(format!("User {}", user.email));
    result.add_line(format!(
        "\tDomains: {} of {}",
        count(user.domain_count),
        count(user.domain_limit)
    ));
    result.add_line(format!("\tLogins: {}", count(user.login_count)));
    result.add_line(format!(
        "\tFailed logins: {}",
        count(user.failed_login_count)
    ));
    result.add_line(format!("\tMember since: {}", format_timestamp(user.created_at)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::commands::{execute, CommandOptions};
    use crate::error::DnsimpleError;
    use crate::transport::memory::MockTransport;
    use serde_json::json;

    #[test]
    fn info_shows_email_and_counts() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!({"user": {"id": 1, "email": "ops@example.com", "domain_count": 3, "domain_limit": 10, "login_count": 40}}),
        );

        let result = execute(&mock.client(), "info", &[], &CommandOptions::default()).unwrap();

        assert_eq!(mock.requests()[0].path, "/users/me");
        assert_eq!(result.lines[0], "User ops@example.com");
        assert_eq!(result.lines[1], "\tDomains: 3 of 10");
        assert_eq!(result.lines[3], "\tFailed logins: -");
    }

    #[test]
    fn rejected_credentials_fail_authentication() {
        let mock = MockTransport::new();
        mock.respond(401, "");

        let err = execute(&mock.client(), "info", &[], &CommandOptions::default()).unwrap_err();
        assert!(matches!(err, DnsimpleError::AuthenticationFailed));
    }
}
