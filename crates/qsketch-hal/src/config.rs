//! Executor configuration and named profiles.
//!
//! Profiles live in a YAML file keyed by profile name:
//!
//! ```yaml
//! profiles:
//!   sim:
//!     backend: local_qasm_simulator
//!   qx:
//!     backend: ibmqx4
//!     url: https://quantumexperience.example/api
//!     max_qubits: 5
//! ```
//!
//! Tokens are read from the file but never written back; when a profile has
//! no token, [`ExecutorConfig::resolve_token`] falls back to `QSKETCH_TOKEN`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HalError, HalResult};

/// Environment variable consulted when a profile carries no token.
pub const TOKEN_ENV: &str = "QSKETCH_TOKEN";

/// Environment variable overriding the default profile file location.
pub const CONFIG_ENV: &str = "QSKETCH_CONFIG";

/// Connection settings for one executor.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Profile or executor name.
    #[serde(default)]
    pub name: String,
    /// Backend identifier understood by the executor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    /// API endpoint, or a recording path for replay executors.
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Authentication token.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    /// Provider hub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,
    /// Provider group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Provider project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Largest circuit the executor accepts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_qubits: Option<u32>,
}

impl ExecutorConfig {
    /// Create a new executor configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    /// Set the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the authentication token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set hub, group and project.
    #[must_use]
    pub fn with_provider(
        mut self,
        hub: impl Into<String>,
        group: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        self.hub = Some(hub.into());
        self.group = Some(group.into());
        self.project = Some(project.into());
        self
    }

    /// Set the qubit limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = Some(max_qubits);
        self
    }

    /// The configured token, or the value of [`TOKEN_ENV`].
    pub fn resolve_token(&self) -> HalResult<String> {
        self.resolve_token_from(TOKEN_ENV)
    }

    /// The configured token, or the value of `env_var`.
    pub fn resolve_token_from(&self, env_var: &str) -> HalResult<String> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }
        std::env::var(env_var).map_err(|_| {
            HalError::Configuration(format!(
                "profile '{}' has no token and {} is not set",
                self.name, env_var
            ))
        })
    }
}

impl fmt::Debug for ExecutorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorConfig")
            .field("name", &self.name)
            .field("backend", &self.backend)
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("hub", &self.hub)
            .field("group", &self.group)
            .field("project", &self.project)
            .field("max_qubits", &self.max_qubits)
            .finish()
    }
}

/// Named executor profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorProfiles {
    #[serde(default)]
    profiles: BTreeMap<String, ExecutorConfig>,
}

impl ExecutorProfiles {
    /// The profile set used when no file is present: a local `sim` profile.
    pub fn builtin() -> Self {
        let mut profiles = Self::default();
        profiles.insert(ExecutorConfig::new("sim").with_backend("local_qasm_simulator"));
        profiles
    }

    /// Parse profiles from YAML. Each profile's `name` is set from its key.
    pub fn from_yaml_str(yaml: &str) -> HalResult<Self> {
        let mut parsed: Self = serde_yaml_ng::from_str(yaml)?;
        for (key, config) in &mut parsed.profiles {
            config.name.clone_from(key);
        }
        Ok(parsed)
    }

    /// Load profiles from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> HalResult<Self> {
        let path = path.as_ref();
        debug!("Loading executor profiles from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Load from `$QSKETCH_CONFIG` or `~/.qsketch/executors.yaml`.
    pub fn load_default() -> HalResult<Self> {
        let path = Self::default_path().ok_or_else(|| {
            HalError::Configuration("cannot determine home directory for profiles".into())
        })?;
        if !path.exists() {
            return Err(HalError::Configuration(format!(
                "profile file {} does not exist",
                path.display()
            )));
        }
        Self::load(path)
    }

    /// Default profile file location.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".qsketch").join("executors.yaml"))
    }

    /// Serialize to YAML. Tokens are omitted.
    pub fn to_yaml(&self) -> HalResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Add or replace a profile under its own name.
    pub fn insert(&mut self, config: ExecutorConfig) {
        self.profiles.insert(config.name.clone(), config);
    }

    /// Look up a profile.
    pub fn get(&self, name: &str) -> HalResult<&ExecutorConfig> {
        self.profiles
            .get(name)
            .ok_or_else(|| HalError::Configuration(format!("no executor profile named '{name}'")))
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether there are no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
