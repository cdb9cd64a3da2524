use super::{ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::credentials::ApiCredentials;
use crate::error::Result;
use reqwest::blocking::Client as HttpClient;
use reqwest::{Method, Proxy};

/// Production transport: one blocking `reqwest` client, default timeouts.
pub struct HttpTransport {
    client: HttpClient,
    proxy: Option<String>,
}

impl HttpTransport {
    pub fn new(proxy_url: Option<&str>) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(url) = proxy_url {
            tracing::debug!(proxy = url, "routing requests through proxy");
            builder = builder.proxy(Proxy::all(url)?);
        }
        Ok(Self {
            client: builder.build()?,
            proxy: proxy_url.map(str::to_string),
        })
    }

    /// Transport for `credentials`, routed through `proxy_addr`/`proxy_port`
    /// when they are set.
    pub fn for_credentials(credentials: &ApiCredentials) -> Result<Self> {
        Self::new(credentials.proxy_url().as_deref())
    }

    /// The proxy every request goes through, if any.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

fn to_reqwest(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(to_reqwest(request.method), request.url.as_str());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some((username, password)) = &request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(ApiResponse { status, body })
    }
}
