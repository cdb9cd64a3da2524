use super::helpers::{arg, or_dash};
use super::{CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::ExtendedAttribute;

pub fn list(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let tld = arg(args, 0);
    let attributes = ExtendedAttribute::find(client, tld)?;

    let mut result = CmdResult::default();
    result.add_line(format!("Extended attributes for {}:", tld));
    for attribute in &attributes {
        let required = if attribute.required { " (required)" } else { "" };
        result.add_line(format!(
            "\t{}{}: {}",
            attribute.name,
            required,
            or_dash(attribute.description.as_deref())
        ));
        for option in &attribute.options {
            result.add_line(format!("\t\t{}: {}", option.value, option.title));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::commands::{execute, CommandOptions};
    use crate::transport::memory::MockTransport;
    use serde_json::json;

    #[test]
    fn lists_attributes_with_options() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!([{
                "name": "us_nexus",
                "description": "Nexus category",
                "required": true,
                "options": [{"title": "US citizen", "value": "C11"}]
            }]),
        );

        let result = execute(
            &mock.client(),
            "extended-attributes:list",
            &["us".to_string()],
            &CommandOptions::default(),
        )
        .unwrap();

        assert_eq!(
            result.lines,
            vec![
                "Extended attributes for us:",
                "\tus_nexus (required): Nexus category",
                "\t\tC11: US citizen"
            ]
        );
    }
}
