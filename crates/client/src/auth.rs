//! Authentication strategies.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password, sent as `Authorization: Basic <base64 user:pass>`.
    Basic {
        username: String,
        password: SecretString,
    },
    /// API key, sent as `Authorization: Bearer <token>`.
    Bearer { token: SecretString },
}

impl AuthStrategy {
    /// Attach the `Authorization` header to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            AuthStrategy::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            AuthStrategy::Bearer { token } => builder.bearer_auth(token.expose_secret()),
        }
    }

    /// Short label for logging; never includes credentials.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthStrategy::Basic { .. } => "basic",
            AuthStrategy::Bearer { .. } => "bearer",
        }
    }
}
