use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Authorization related configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthzConfig {
    /// Which policy to apply to incoming requests.
    /// Defaults to `permissive`.
    #[serde(default = "AuthzPolicy::default")]
    pub policy: AuthzPolicy,

    /// Require that callers are authenticated; anonymous requests are denied
    /// at the request-level gate.
    /// Defaults to `false`.
    #[serde(default = "AuthzConfig::default_require_authned")]
    pub require_authned: bool,

    /// For the `perm` policy, check framework permissions for mutating
    /// methods.
    /// Defaults to `true`.
    #[serde(default = "AuthzConfig::default_perms")]
    pub perms: bool,

    /// For the `perm` policy, the decision when a resource defines no check
    /// hook of its own.
    /// Defaults to `false`.
    #[serde(default = "AuthzConfig::default_default_if_no_method")]
    pub default_if_no_method: bool,
}

/// The available policy variants.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthzPolicy {
    #[serde(rename = "permissive")]
    #[default]
    Permissive,

    #[serde(rename = "perm")]
    Perm,

    #[serde(rename = "readonly")]
    Readonly,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            policy: AuthzPolicy::default(),
            require_authned: Self::default_require_authned(),
            perms: Self::default_perms(),
            default_if_no_method: Self::default_default_if_no_method(),
        }
    }
}

impl AuthzConfig {
    /// Loads configuration from a TOML file. A missing file is not an
    /// error, defaults are used instead.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s).context("parse authz config toml"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("Authz config file not found, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err).context(format!("read authz config file: {}", path.display())),
        }
    }

    pub fn default_require_authned() -> bool {
        false
    }

    pub fn default_perms() -> bool {
        true
    }

    pub fn default_default_if_no_method() -> bool {
        false
    }
}
