use serde::{Deserialize, Serialize};

/// Body of `POST /push/channelSubscriptions`.
///
/// Exactly one of `client_id` / `device_id` is set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSubscription {
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl ChannelSubscription {
    pub fn for_client(channel: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            client_id: Some(client_id.into()),
            device_id: None,
        }
    }

    pub fn for_device(channel: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            client_id: None,
            device_id: Some(device_id.into()),
        }
    }
}
