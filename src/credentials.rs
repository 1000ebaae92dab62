//! Credential resolution for live providers
//!
//! Credentials are read fresh on every lookup attempt and never cached. An
//! empty value is treated the same as an unset one.

use std::collections::HashMap;

/// IP-intelligence provider key (ipinfo.io)
pub const IPINFO_API_KEY: &str = "OSINT_IPINFO_API_KEY";

/// Breach-database provider key (haveibeenpwned.com)
pub const HIBP_API_KEY: &str = "OSINT_HIBP_API_KEY";

/// Device/service-scan provider key (shodan.io)
pub const SHODAN_API_KEY: &str = "OSINT_SHODAN_API_KEY";

/// Every credential name the engine knows about
pub const KNOWN_CREDENTIALS: &[&str] = &[IPINFO_API_KEY, HIBP_API_KEY, SHODAN_API_KEY];

/// Source of named credentials
pub trait CredentialSource: Send + Sync {
    /// Resolve a credential by name; `None` when absent
    fn resolve(&self, name: &str) -> Option<String>;

    /// Check presence without handing out the value
    fn is_present(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// Reads credentials from process environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn resolve(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Fixed credential set, for tests and embedding callers
#[derive(Clone, Default)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn resolve(&self, name: &str) -> Option<String> {
        self.values.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

// Names only, never values
impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("StaticCredentials").field("names", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials_resolve() {
        let creds = StaticCredentials::new().with(IPINFO_API_KEY, "abc123");
        assert_eq!(creds.resolve(IPINFO_API_KEY).as_deref(), Some("abc123"));
        assert!(creds.resolve(HIBP_API_KEY).is_none());
        assert!(creds.is_present(IPINFO_API_KEY));
    }

    #[test]
    fn test_static_credentials_empty_is_absent() {
        let creds = StaticCredentials::new().with(SHODAN_API_KEY, "");
        assert!(creds.resolve(SHODAN_API_KEY).is_none());
        assert!(!creds.is_present(SHODAN_API_KEY));
    }

    #[test]
    fn test_env_credentials_unset_variable() {
        let creds = EnvCredentials;
        assert!(creds.resolve("OSINTR_TEST_DEFINITELY_UNSET_VARIABLE").is_none());
    }

    #[test]
    fn test_env_credentials_reads_environment() {
        let name = "OSINTR_TEST_ENV_CREDENTIAL";
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var(name, "secret");
        }
        assert_eq!(EnvCredentials.resolve(name).as_deref(), Some("secret"));

        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var(name, "");
        }
        assert!(EnvCredentials.resolve(name).is_none());

        // SAFETY: restoring the environment for this test's variable
        unsafe {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_debug_hides_values() {
        let creds = StaticCredentials::new().with(HIBP_API_KEY, "hunter2");
        let shown = format!("{:?}", creds);
        assert!(shown.contains(HIBP_API_KEY));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn test_known_credentials() {
        assert_eq!(KNOWN_CREDENTIALS.len(), 3);
    }
}
