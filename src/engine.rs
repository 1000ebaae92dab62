//! Lookup Engine - dispatch with guaranteed fallback
//!
//! `execute` never fails. Integrated tools get one live attempt; any failure
//! on that path, including a missing credential, lands in the simulator.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::config::Config;
use crate::credentials::{CredentialSource, EnvCredentials};
use crate::error::{OsintError, Result};
use crate::lookup::LookupResult;
use crate::provider::{DispatchFailure, HttpTransport, ProviderDispatch, ReqwestTransport};
use crate::registry::Registry;
use crate::simulator::Simulator;

const DEFAULT_BATCH_CONCURRENCY: usize = 4;

/// Orchestrates registry, provider dispatch and simulator
#[derive(Debug)]
pub struct LookupEngine {
    registry: Arc<Registry>,
    dispatch: ProviderDispatch,
    simulator: Simulator,
    deadline: Option<Duration>,
    batch_concurrency: usize,
}

impl LookupEngine {
    /// Assemble an engine after checking the wiring against the registry
    pub fn new(registry: Arc<Registry>, dispatch: ProviderDispatch, simulator: Simulator) -> Result<Self> {
        let engine = Self {
            registry,
            dispatch,
            simulator,
            deadline: None,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        };
        engine.check_completeness()?;
        Ok(engine)
    }

    /// Builtin registry and rules, live providers over the network, credentials from the environment
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport =
            ReqwestTransport::new().map_err(|e| OsintError::Config(format!("HTTP transport unavailable: {}", e)))?;
        Self::with_parts(config, Arc::new(transport), Arc::new(EnvCredentials))
    }

    /// Builtin registry and rules over a caller-chosen transport and credential source
    pub fn with_parts(
        config: &Config,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self> {
        let dispatch = ProviderDispatch::standard(&config.providers, transport, credentials);
        let engine = Self::new(Arc::new(Registry::builtin().clone()), dispatch, Simulator::new())?
            .with_batch_concurrency(config.lookup.batch_concurrency);
        Ok(match config.lookup.deadline() {
            Some(deadline) => engine.with_deadline(deadline),
            None => engine,
        })
    }

    /// Cap every live request at `deadline`
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency.max(1);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn dispatch(&self) -> &ProviderDispatch {
        &self.dispatch
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Run one lookup. Total: always returns a result.
    pub async fn execute(&self, tool_id: &str, query: &str) -> LookupResult {
        if self.dispatch.is_integrated(tool_id) {
            match self.dispatch.try_real(tool_id, query, self.deadline).await {
                Ok(result) => {
                    tracing::info!(tool = tool_id, provenance = "real", "Lookup served by provider");
                    return result;
                }
                Err(failure) => self.log_fallback(tool_id, &failure),
            }
        }
        self.simulator.simulate(tool_id, query)
    }

    /// Run one lookup after checking the tool belongs to the category
    pub async fn execute_in(&self, category_id: &str, tool_id: &str, query: &str) -> Result<LookupResult> {
        self.registry.lookup(category_id, tool_id)?;
        Ok(self.execute(tool_id, query).await)
    }

    /// Independent lookups for many queries, results in input order
    pub async fn execute_batch<S: AsRef<str>>(&self, tool_id: &str, queries: &[S]) -> Vec<LookupResult> {
        stream::iter(queries.iter().map(|query| self.execute(tool_id, query.as_ref())))
            .buffered(self.batch_concurrency)
            .collect()
            .await
    }

    /// Registry tools that only have the default template
    pub fn completeness_gaps(&self) -> Vec<&str> {
        self.registry
            .tools()
            .map(|tool| tool.id.as_str())
            .filter(|id| !self.simulator.has_rule(id) && !self.dispatch.is_integrated(id))
            .collect()
    }

    fn check_completeness(&self) -> Result<()> {
        for tool_id in self.dispatch.integrated_tools() {
            let Some(tool) = self.registry.find(tool_id) else {
                return Err(OsintError::Config(format!(
                    "Provider registered for unknown tool '{}'",
                    tool_id
                )));
            };
            let credential = self.dispatch.credential_for(tool_id);
            if tool.credential.as_deref() != credential {
                return Err(OsintError::Config(format!(
                    "Tool '{}' declares credential {:?} but its provider uses {:?}",
                    tool_id, tool.credential, credential
                )));
            }
        }

        for tool_id in self.simulator.rule_ids() {
            if !self.registry.contains(tool_id) {
                return Err(OsintError::Config(format!(
                    "Simulation rule registered for unknown tool '{}'",
                    tool_id
                )));
            }
        }

        for gap in self.completeness_gaps() {
            log::warn!("Tool '{}' has no provider or rule; lookups use the default template", gap);
        }
        Ok(())
    }

    fn log_fallback(&self, tool_id: &str, failure: &DispatchFailure) {
        if failure.is_advisory() {
            tracing::info!(
                tool = tool_id,
                reason = failure.kind(),
                "{}; using simulated data",
                failure
            );
        } else {
            tracing::warn!(
                tool = tool_id,
                reason = failure.kind(),
                "Live lookup failed: {}; falling back to simulated data",
                failure
            );
        }
    }
}
