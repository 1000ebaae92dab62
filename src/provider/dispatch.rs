//! Live provider dispatch
//!
//! Makes at most one attempt per lookup and reports every failure as a
//! [`DispatchFailure`] so the engine can fall back.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ProvidersConfig;
use crate::credentials::CredentialSource;
use crate::lookup::LookupResult;

use super::{DispatchFailure, HibpProvider, HttpTransport, IpinfoProvider, Provider, ShodanProvider};

/// Runs live lookups for integrated tools
pub struct ProviderDispatch {
    providers: HashMap<&'static str, Box<dyn Provider>>,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialSource>,
}

impl ProviderDispatch {
    /// Dispatch with no providers registered
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            providers: HashMap::new(),
            transport,
            credentials,
        }
    }

    /// Dispatch with ipinfo, HIBP and Shodan registered
    pub fn standard(
        config: &ProvidersConfig,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self::new(transport, credentials)
            .with_provider(IpinfoProvider::new(&config.ipinfo))
            .with_provider(HibpProvider::new(&config.hibp))
            .with_provider(ShodanProvider::new(&config.shodan))
    }

    pub fn with_provider(mut self, provider: impl Provider + 'static) -> Self {
        self.providers.insert(provider.tool_id(), Box::new(provider));
        self
    }

    pub fn is_integrated(&self, tool_id: &str) -> bool {
        self.providers.contains_key(tool_id)
    }

    /// Integrated tool ids, sorted
    pub fn integrated_tools(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.providers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Credential name an integrated tool needs
    pub fn credential_for(&self, tool_id: &str) -> Option<&'static str> {
        self.providers.get(tool_id).map(|p| p.credential())
    }

    /// Whether the credential for an integrated tool resolves right now
    pub fn has_credential(&self, tool_id: &str) -> bool {
        self.credential_for(tool_id)
            .is_some_and(|name| self.credentials.is_present(name))
    }

    /// One live attempt, no retries
    ///
    /// The request is bounded by the provider timeout, or by `deadline` when
    /// that is tighter. Elapsing either is a transport failure.
    pub async fn try_real(
        &self,
        tool_id: &str,
        query: &str,
        deadline: Option<Duration>,
    ) -> Result<LookupResult, DispatchFailure> {
        let provider = self.providers.get(tool_id).ok_or(DispatchFailure::NotIntegrated)?;

        let credential = provider.credential();
        let key = self
            .credentials
            .resolve(credential)
            .ok_or_else(|| DispatchFailure::MissingCredential(credential.to_string()))?;

        let timeout = match deadline {
            Some(deadline) => deadline.min(provider.timeout()),
            None => provider.timeout(),
        };

        let mut request = provider.request(query, &key)?;
        request.timeout = timeout;

        tracing::debug!(
            tool = tool_id,
            provider = provider.name(),
            url = %request.display_url(),
            timeout_ms = timeout.as_millis() as u64,
            "Querying provider"
        );

        let response = match tokio::time::timeout(timeout, self.transport.get(request)).await {
            Ok(response) => response?,
            Err(_) => {
                return Err(DispatchFailure::Transport(format!(
                    "{} did not answer within {}ms",
                    provider.name(),
                    timeout.as_millis()
                )));
            }
        };

        provider.interpret(query, response)
    }
}

impl std::fmt::Debug for ProviderDispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDispatch")
            .field("providers", &self.integrated_tools())
            .finish()
    }
}
