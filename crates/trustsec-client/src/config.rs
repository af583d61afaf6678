use std::fmt;

use common_config::{env_parse, env_string, ServiceConfig};
use serde::Deserialize;

use crate::client::API_ENDPOINT;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub login_name: String,
    pub password: String,
    /// Passed straight to the HTTP client; unset means the client default.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: API_ENDPOINT.to_string(),
            login_name: String::new(),
            password: String::new(),
            timeout_ms: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("login_name", &self.login_name)
            .field("password", &"***")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl ServiceConfig for ClientConfig {
    const PREFIX: &'static str = "TRUSTSEC_";

    fn apply_environment_overrides(&mut self, prefix: &str) {
        if let Some(endpoint) = env_string(prefix, "ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(login_name) = env_string(prefix, "LOGIN_NAME") {
            self.login_name = login_name;
        }
        if let Some(password) = env_string(prefix, "PASSWORD") {
            self.password = password;
        }
        if let Some(timeout_ms) = env_parse(prefix, "TIMEOUT_MS") {
            self.timeout_ms = Some(timeout_ms);
        }
    }
}
