use super::helpers::{arg, column_width, or_dash, pad, plural};
use super::{CmdMessage, CmdResult, CommandOptions};
use crate::client::Client;
use crate::error::Result;
use crate::resources::{Domain, Service};

fn service_lines(result: &mut CmdResult, services: &[Service]) {
    let width = column_width(services.iter().map(|s| s.short_name.as_str()));
    for service in services {
        result.add_line(format!(
            "\t{}  {}",
            pad(&service.short_name, width),
            service.name
        ));
    }
}

pub fn list(client: &Client, _args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let services = Service::all(client)?;
    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {}:",
        plural(services.len(), "service", "services")
    ));
    service_lines(&mut result, &services);
    Ok(result)
}

pub fn describe(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let service = Service::find(client, arg(args, 0))?;
    let mut result = CmdResult::default();
    result.add_line(format!("Service {}:", service.name));
    result.add_line(format!("\tID: {}", service.id));
    result.add_line(format!("\tShort name: {}", service.short_name));
    result.add_line(format!(
        "\tDescription: {}",
        or_dash(service.description.as_deref())
    ));
    Ok(result)
}

pub fn applied(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let services = domain.applied_services(client)?;
    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {} applied services for {}",
        services.len(),
        domain.name
    ));
    service_lines(&mut result, &services);
    Ok(result)
}

pub fn available(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let services = domain.available_services(client)?;
    let mut result = CmdResult::default();
    result.add_line(format!(
        "Found {} available services for {}",
        services.len(),
        domain.name
    ));
    service_lines(&mut result, &services);
    Ok(result)
}

pub fn add(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let service = arg(args, 1);
    domain.add_service(client, service)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Added {} to {}",
        service, domain.name
    ))))
}

pub fn remove(client: &Client, args: &[String], _options: &CommandOptions) -> Result<CmdResult> {
    let domain = Domain::find(client, arg(args, 0))?;
    let service = arg(args, 1);
    domain.remove_service(client, service)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Removed {} from {}",
        service, domain.name
    ))))
}

#[cfg(test)]
mod tests {
    use crate::commands::{execute, CommandOptions};
    use crate::transport::memory::MockTransport;
    use crate::transport::HttpMethod;
    use serde_json::json;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn with_domain(mock: &MockTransport) -> &MockTransport {
        mock.respond_json(200, json!({"domain": {"id": 1, "name": "example.com"}}))
    }

    #[test]
    fn applied_lists_domain_services() {
        let mock = MockTransport::new();
        with_domain(&mock).respond_json(
            200,
            json!([{"service": {"id": 1, "name": "Heroku", "short_name": "heroku"}}]),
        );

        let result = execute(
            &mock.client(),
            "service:applied",
            &args(&["example.com"]),
            &CommandOptions::default(),
        )
        .unwrap();

        assert_eq!(mock.requests()[1].path, "/domains/example.com/applied_services");
        assert_eq!(
            result.lines,
            vec!["Found 1 applied services for example.com", "\theroku  Heroku"]
        );
    }

    #[test]
    fn add_and_remove_report_service() {
        let mock = MockTransport::new();
        with_domain(&mock).respond(200, "[]");
        with_domain(&mock).respond(200, "");
        let client = mock.client();

        let added = execute(
            &client,
            "service:add",
            &args(&["example.com", "heroku"]),
            &CommandOptions::default(),
        )
        .unwrap();
        let removed = execute(
            &client,
            "service:remove",
            &args(&["example.com", "heroku"]),
            &CommandOptions::default(),
        )
        .unwrap();

        assert_eq!(added.text(), vec!["Added heroku to example.com"]);
        assert_eq!(removed.text(), vec!["Removed heroku from example.com"]);
        let requests = mock.requests();
        assert_eq!(requests[1].method, HttpMethod::Post);
        assert_eq!(requests[3].method, HttpMethod::Delete);
    }

    #[test]
    fn list_aligns_short_names() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!([
                {"service": {"id": 1, "name": "Heroku", "short_name": "heroku"}},
                {"service": {"id": 2, "name": "Google Apps", "short_name": "gapps"}}
            ]),
        );

        let result =
            execute(&mock.client(), "service:list", &[], &CommandOptions::default()).unwrap();

        assert_eq!(mock.requests()[0].method, HttpMethod::Get);
        assert_eq!(mock.requests()[0].path, "/services");
        assert_eq!(
            result.lines,
            vec!["Found 2 services:", "\theroku  Heroku", "\tgapps   Google Apps"]
        );
    }

    #[test]
    fn describe_shows_service_fields() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!({"service": {"id": 1, "name": "Heroku", "short_name": "heroku"}}),
        );

        let result = execute(
            &mock.client(),
            "service:describe",
            &args(&["heroku"]),
            &CommandOptions::default(),
        )
        .unwrap();

        assert_eq!(mock.requests()[0].method, HttpMethod::Get);
        assert_eq!(mock.requests()[0].path, "/services/heroku");
        assert_eq!(
            result.lines,
            vec![
                "Service Heroku:",
                "\tID: 1",
                "\tShort name: heroku",
                "\tDescription: -",
            ]
        );
    }

    #[test]
    fn available_lists_domain_services() {
        let mock = MockTransport::new();
        with_domain(&mock).respond_json(
            200,
            json!([{"service": {"id": 2, "name": "Google Apps", "short_name": "gapps"}}]),
        );

        let result = execute(
            &mock.client(),
            "service:available",
            &args(&["example.com"]),
            &CommandOptions::default(),
        )
        .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert_eq!(requests[1].path, "/domains/example.com/available_services");
        assert_eq!(
            result.lines,
            vec!["Found 1 available services for example.com", "\tgapps  Google Apps"]
        );
    }
}
