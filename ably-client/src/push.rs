use ably_shared::push::ChannelSubscription;
use tracing::info;

use crate::error::{AblyError, AblyResult};
use crate::http_utils;
use crate::rest::AblyRest;

const CHANNEL_SUBSCRIPTIONS_PATH: &str = "/push/channelSubscriptions";

/// The locally registered push device, as known after push activation.
#[derive(Debug, Clone, Default)]
pub struct LocalDevice {
    pub id: String,
    pub update_token: Option<String>,
}

/// Push subscriptions for a single channel.
pub struct PushChannel<'a> {
    rest: &'a AblyRest,
    channel: &'a str,
}

impl<'a> PushChannel<'a> {
    pub(crate) fn new(rest: &'a AblyRest, channel: &'a str) -> Self {
        Self { rest, channel }
    }

    pub async fn subscribe_device(&self, device: Option<&LocalDevice>) -> AblyResult<()> {
        let device = match device {
            Some(d) if d.update_token.is_some() => d,
            _ => {
                return Err(AblyError::Precondition(
                    "cannot subscribe device before push activation has finished".into(),
                ));
            }
        };
        self.post_subscription(ChannelSubscription::for_device(self.channel, &device.id))
            .await
    }

    pub async fn subscribe_client(&self) -> AblyResult<()> {
        let client_id = self.rest.options.client_id.as_deref().ok_or_else(|| {
            AblyError::Precondition("cannot subscribe from REST client with null client ID".into())
        })?;
        self.post_subscription(ChannelSubscription::for_client(self.channel, client_id))
            .await
    }

    async fn post_subscription(&self, body: ChannelSubscription) -> AblyResult<()> {
        info!("Subscribing to push on channel {}", self.channel);
        self.rest
            .http
            .post_no_content(
                CHANNEL_SUBSCRIPTIONS_PATH,
                http_utils::default_accept_headers(self.rest.options.use_binary_protocol),
                &[],
                &body,
            )
            .await
    }
}
