use crate::error::{AblyError, AblyResult};

pub const DEFAULT_REST_HOST: &str = "rest.ably.io";
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_TLS_PORT: u16 = 443;

/// Options for constructing an [`crate::AblyRest`] client.
///
/// A client without a `key` is unauthenticated; it can only reach endpoints
/// that accept anonymous requests (such as creating sandbox apps).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub key: Option<String>,
    pub client_id: Option<String>,
    pub rest_host: String,
    pub port: u16,
    pub tls_port: u16,
    pub tls: bool,
    pub use_binary_protocol: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            key: None,
            client_id: None,
            rest_host: DEFAULT_REST_HOST.to_string(),
            port: DEFAULT_PORT,
            tls_port: DEFAULT_TLS_PORT,
            tls: true,
            use_binary_protocol: true,
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options authenticated with a `keyName:keySecret` string.
    pub fn with_key(key: &str) -> AblyResult<Self> {
        parse_key(key)?;
        Ok(Self {
            key: Some(key.to_string()),
            ..Self::default()
        })
    }

    /// `(keyName, keySecret)` when the options carry a key.
    pub fn key_parts(&self) -> Option<(&str, &str)> {
        self.key.as_deref().and_then(|k| parse_key(k).ok())
    }

    pub fn base_url(&self) -> String {
        if self.tls {
            format!("https://{}:{}", self.rest_host, self.tls_port)
        } else {
            format!("http://{}:{}", self.rest_host, self.port)
        }
    }

    pub fn validate(&self) -> AblyResult<()> {
        if self.rest_host.is_empty() {
            return Err(AblyError::InvalidOptions("rest host must not be empty".into()));
        }
        if let Some(key) = &self.key {
            parse_key(key)?;
        }
        Ok(())
    }
}

fn parse_key(key: &str) -> AblyResult<(&str, &str)> {
    match key.split_once(':') {
        Some((name, secret)) if !name.is_empty() && !secret.is_empty() => Ok((name, secret)),
        _ => Err(AblyError::InvalidKey(format!(
            "expected keyName:keySecret, got {:?}",
            key
        ))),
    }
}
