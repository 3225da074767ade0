use crate::client::core::AgifyClient;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.agify.io/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct AgifyClientBuilder {
    api_key: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    /// Override base URL (primarily for testing with mock servers)
    base_url: String,
    transport: Option<Arc<dyn Transport>>,
}

impl AgifyClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: None,
        }
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the identifying User-Agent string. Defaults to
    /// `agify-client/<version>`.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Override the service base URL.
    ///
    /// This is primarily for testing with mock servers; production code
    /// should use the default endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Inject a custom transport, replacing the default reqwest-backed one.
    ///
    /// The timeout, user agent, and base URL settings do not apply to an
    /// injected transport; it owns its own connection behavior.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AgifyClient> {
        if self.timeout.is_zero() {
            return Err(Error::InvalidArgument(
                "request timeout must be positive".to_string(),
            ));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("agify-client/{}", env!("CARGO_PKG_VERSION")));

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(
                &self.base_url,
                &user_agent,
                self.timeout,
            )?),
        };

        Ok(AgifyClient {
            transport,
            api_key: self.api_key,
        })
    }
}

impl Default for AgifyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
