use tracing::debug;

use crate::error::AblyResult;
use crate::http::Http;
use crate::options::ClientOptions;
use crate::push::PushChannel;

/// REST client. Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AblyRest {
    pub options: ClientOptions,
    pub http: Http,
}

impl AblyRest {
    pub fn new(options: ClientOptions) -> AblyResult<Self> {
        options.validate()?;
        let http = Http::new(&options)?;
        debug!(
            "Created REST client for {} (authenticated: {})",
            http.base_url(),
            options.key.is_some()
        );
        Ok(Self { options, http })
    }

    pub fn channel(&self, name: &str) -> Channel<'_> {
        Channel {
            rest: self,
            name: name.to_string(),
        }
    }
}

pub struct Channel<'a> {
    rest: &'a AblyRest,
    pub name: String,
}

impl<'a> Channel<'a> {
    pub fn push(&self) -> PushChannel<'_> {
        PushChannel::new(self.rest, &self.name)
    }
}
