use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Declarative description of a test app, posted to `/apps`.
///
/// Only the fields the test environment touches are typed; everything else
/// (namespaces, channels, connection limits, ...) is carried through verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<KeySpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A key issued by the service for a created app.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppKey {
    pub key_str: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,
}

impl AppKey {
    /// The `appId.keyId` part of the key string.
    pub fn name(&self) -> &str {
        self.key_str
            .split_once(':')
            .map(|(name, _)| name)
            .unwrap_or(&self.key_str)
    }
}

/// A provisioned test app: the identity returned by the service merged with
/// the connection parameters the tests must use to reach it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestVars {
    pub app_id: String,
    #[serde(default)]
    pub keys: Vec<AppKey>,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub tls_port: u16,
    #[serde(default, alias = "tls")]
    pub use_tls: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestVars {
    pub fn first_key(&self) -> Option<&AppKey> {
        self.keys.first()
    }
}

impl Display for TestVars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "app {} ({} keys) at {}:{}/{}",
            self.app_id,
            self.keys.len(),
            self.host,
            self.port,
            self.tls_port
        )
    }
}
