use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

pub const JSON: &str = "application/json";
pub const MSGPACK: &str = "application/x-msgpack";

// Binary clients still accept JSON; error bodies are always JSON.
const ACCEPT_BINARY: &str = "application/x-msgpack,application/json";

pub fn default_accept_headers(binary: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let accept = if binary { ACCEPT_BINARY } else { JSON };
    headers.insert(ACCEPT, HeaderValue::from_static(accept));
    headers
}

pub fn default_get_headers(binary: bool) -> HeaderMap {
    default_accept_headers(binary)
}

/// Request bodies are always sent as JSON; `binary` only affects `Accept`.
pub fn default_post_headers(binary: bool) -> HeaderMap {
    let mut headers = default_accept_headers(binary);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
    headers
}
