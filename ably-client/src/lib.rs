pub mod error;
pub mod http;
pub mod http_utils;
pub mod options;
pub mod push;
pub mod rest;

pub use error::{AblyError, AblyResult};
pub use options::ClientOptions;
pub use rest::{AblyRest, Channel};

pub use ably_shared::error::ErrorInfo;
