use crate::client::EmployeeClient;
use crate::config::{get_base_url, load_config, save_config};
use crate::error::{StaffError, StaffResult};
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and the client
/// instance. Constructed once per invocation and passed to the command
/// handlers that need it.
pub struct CliContext {
    base_url: String,
    client: Option<Arc<EmployeeClient>>,
}

impl CliContext {
    /// Load context from saved configuration
    pub fn load() -> StaffResult<Self> {
        Ok(Self {
            base_url: get_base_url(),
            client: None,
        })
    }

    /// Get or lazily create the API client
    pub fn client(&mut self) -> Arc<EmployeeClient> {
        if let Some(client) = &self.client {
            return client.clone();
        }

        let client = Arc::new(EmployeeClient::new(self.base_url.clone()));
        self.client = Some(client.clone());
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Department used by `add` when none is given on the command line
    pub fn default_department(&self) -> Option<String> {
        load_config().default_department
    }

    /// Set and save a new base URL
    pub fn set_base_url(&mut self, base_url: String) -> StaffResult<()> {
        let mut config = load_config();
        config.base_url = Some(base_url.clone());
        save_config(&config).map_err(|e| StaffError::ConfigError(e.to_string()))?;
        self.base_url = base_url;
        self.client = None;
        Ok(())
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    base_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn build(self) -> StaffResult<CliContext> {
        match self.base_url {
            Some(base_url) => Ok(CliContext {
                base_url,
                client: None,
            }),
            None => CliContext::load(),
        }
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
