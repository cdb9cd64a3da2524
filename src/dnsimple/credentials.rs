use crate::error::{DnsimpleError, Result};
use directories::BaseDirs;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the credentials file location.
pub const CONFIG_ENV_VAR: &str = "DNSIMPLE_CONFIG";
const CONFIG_FILENAME: &str = ".dnsimple";
const DEFAULT_HOST: &str = "https://dnsimple.com";

/// Credentials and connection settings, read from `~/.dnsimple` (YAML).
///
/// Values set programmatically take precedence; the file only fills in
/// fields that are still `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub api_token: Option<String>,
    #[serde(alias = "site")]
    pub host: Option<String>,
    #[serde(rename = "proxy_addr")]
    pub proxy_address: Option<String>,
    #[serde(default, deserialize_with = "port_number_or_string")]
    pub proxy_port: Option<u16>,
}

/// Accept `proxy_port: 3128` as well as `proxy_port: "3128"`.
fn port_number_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Option::<Port>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Port::Number(port)) => Ok(Some(port)),
        Some(Port::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Port::Text(text)) => text.trim().parse().map(Some).map_err(|_| {
            de::Error::custom(format!("proxy_port must be a port number, got '{}'", text))
        }),
    }
}

/// The single authentication mode attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    Basic { username: String, password: String },
    Token { username: String, token: String },
}

impl ApiCredentials {
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Parse a YAML mapping. Unknown keys are ignored; an empty document
    /// yields empty credentials.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load credentials from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DnsimpleError::Configuration(format!(
                "could not read credentials from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content).map_err(|e| {
            DnsimpleError::Configuration(format!(
                "could not parse credentials in {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Fill every unset field from `other`.
    pub fn merge_missing(&mut self, other: ApiCredentials) {
        self.username = self.username.take().or(other.username);
        self.password = self.password.take().or(other.password);
        self.api_token = self.api_token.take().or(other.api_token);
        self.host = self.host.take().or(other.host);
        self.proxy_address = self.proxy_address.take().or(other.proxy_address);
        self.proxy_port = self.proxy_port.take().or(other.proxy_port);
    }

    /// Merge in the credentials file at `path`.
    ///
    /// A missing file is tolerated only when the in-memory values already
    /// carry a complete authentication method.
    pub fn resolve<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() && self.authentication().is_ok() {
            tracing::info!(path = %path.display(), "credentials file absent, using provided values");
            return Ok(self);
        }
        let from_file = Self::load(path)?;
        tracing::info!(path = %path.display(), "loaded credentials file");
        self.merge_missing(from_file);
        Ok(self)
    }

    /// Pick the authentication mode: password first, then API token.
    pub fn authentication(&self) -> Result<Authentication> {
        let username = self.username.clone().ok_or_else(|| {
            DnsimpleError::Configuration("a username is required".to_string())
        })?;

        if let Some(password) = &self.password {
            return Ok(Authentication::Basic {
                username,
                password: password.clone(),
            });
        }
        if let Some(token) = &self.api_token {
            return Ok(Authentication::Token {
                username,
                token: token.clone(),
            });
        }
        Err(DnsimpleError::Configuration(
            "a password or API token is required".to_string(),
        ))
    }

    /// Absolute API base URL without a trailing slash.
    pub fn base_url(&self) -> String {
        let host = match self.host.as_deref().map(str::trim) {
            Some(h) if !h.is_empty() => h,
            _ => DEFAULT_HOST,
        };
        let url = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };
        url.trim_end_matches('/').to_string()
    }

    pub fn proxy_url(&self) -> Option<String> {
        let address = self.proxy_address.as_deref()?.trim();
        if address.is_empty() {
            return None;
        }
        let address = if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };
        Some(match self.proxy_port {
            Some(port) => format!("{}:{}", address, port),
            None => address,
        })
    }
}

/// Resolve the credentials file location: explicit path, then
/// `DNSIMPLE_CONFIG`, then `~/.dnsimple`.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    config_path_from(explicit, std::env::var_os(CONFIG_ENV_VAR), home)
}

fn config_path_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    home.map(|h| h.join(CONFIG_FILENAME)).ok_or_else(|| {
        DnsimpleError::Configuration(format!(
            "could not determine home directory; set {}",
            CONFIG_ENV_VAR
        ))
    })
}
