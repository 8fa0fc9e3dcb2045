use ably_shared::error::{ErrorInfo, ErrorResponse};
use reqwest::{Client, Method, RequestBuilder, Response, header::HeaderMap};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::{AblyError, AblyResult};
use crate::options::ClientOptions;

/// Request helper bound to one client's host and credentials.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    base_url: String,
    key: Option<(String, String)>,
}

impl Http {
    pub(crate) fn new(options: &ClientOptions) -> AblyResult<Self> {
        let client = Client::builder().build().map_err(AblyError::ClientBuild)?;
        let key = options
            .key_parts()
            .map(|(name, secret)| (name.to_string(), secret.to_string()));
        Ok(Self {
            client,
            base_url: options.base_url(),
            key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        params: &[(&str, &str)],
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let mut builder = self.client.request(method, url).headers(headers);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        if let Some((name, secret)) = &self.key {
            builder = builder.basic_auth(name, Some(secret));
        }
        builder
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<B, T>(
        &self,
        path: &str,
        headers: HeaderMap,
        params: &[(&str, &str)],
        body: &B,
    ) -> AblyResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .request(Method::POST, path, headers, params)
            .json(body)
            .send()
            .await?;
        let body = check_response(res).await?;
        serde_json::from_slice(&body).map_err(AblyError::Decode)
    }

    /// POST a JSON body, ignoring whatever the service returns.
    pub async fn post_no_content<B>(
        &self,
        path: &str,
        headers: HeaderMap,
        params: &[(&str, &str)],
        body: &B,
    ) -> AblyResult<()>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .request(Method::POST, path, headers, params)
            .json(body)
            .send()
            .await?;
        check_response(res).await?;
        Ok(())
    }

    pub async fn del(&self, path: &str, headers: HeaderMap, params: &[(&str, &str)]) -> AblyResult<()> {
        let res = self
            .request(Method::DELETE, path, headers, params)
            .send()
            .await?;
        check_response(res).await?;
        Ok(())
    }
}

async fn check_response(res: Response) -> AblyResult<Vec<u8>> {
    let status = res.status();
    let body = res.bytes().await?.to_vec();
    if status.is_success() {
        return Ok(body);
    }

    let info = match serde_json::from_slice::<ErrorResponse>(&body) {
        Ok(envelope) => envelope.error,
        Err(_) => ErrorInfo::new(
            String::from_utf8_lossy(&body).into_owned(),
            status.as_u16(),
            u32::from(status.as_u16()) * 100,
        ),
    };
    warn!("Request failed with status {}: {}", status, info);
    Err(AblyError::Api(info))
}
