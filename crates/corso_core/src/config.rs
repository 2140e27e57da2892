//! Runtime configuration.
//!
//! Configuration is loaded once at process start and passed around as an
//! immutable object. The only fatal startup condition is a missing gateway
//! token; everything else has a usable default.

use crate::{Locale, Plan, PlanCatalog, UserId};
use config::{Config, Environment, File, FileFormat};
use corso_error::{ConfigError, CorsoError, CorsoResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Support contact handles shown in the support view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportContacts {
    /// Telegram handle
    pub telegram: String,
    /// WhatsApp number
    pub whatsapp: String,
}

impl Default for SupportContacts {
    fn default() -> Self {
        Self {
            telegram: "@corso_support".to_string(),
            whatsapp: "+49XXXXXXXXXXX".to_string(),
        }
    }
}

/// Optional community invite links, one per plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLinks {
    /// Invite link for the BASIC community
    pub basic: Option<String>,
    /// Invite link for the PRO community
    pub pro: Option<String>,
    /// Invite link for the VIP community
    pub vip: Option<String>,
}

impl GroupLinks {
    /// The invite link configured for a plan, if any.
    pub fn for_plan(&self, plan: Plan) -> Option<&str> {
        match plan {
            Plan::Basic => self.basic.as_deref(),
            Plan::Pro => self.pro.as_deref(),
            Plan::Vip => self.vip.as_deref(),
        }
    }
}

/// Immutable runtime configuration.
///
/// Sources in order of precedence (later overrides earlier):
/// 1. Bundled defaults (`corso.toml` shipped with the workspace)
/// 2. `./corso.toml` in the working directory (optional)
/// 3. `CORSO_*` environment variables (nested fields use `__`, e.g.
///    `CORSO_GROUP_LINKS__VIP`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsoConfig {
    /// Messaging gateway secret. Required; the process refuses to start
    /// without it.
    pub gateway_token: String,
    /// Operator authorized for approve/deny/broadcast. With no operator
    /// configured the system runs in open-authorization mode.
    pub operator_id: Option<UserId>,
    /// Path of the JSON record store
    pub store_path: PathBuf,
    /// Public site with the full course program
    pub site_url: String,
    /// Support contacts
    pub support: SupportContacts,
    /// Community invite links delivered on approval
    pub group_links: GroupLinks,
    /// Locale applied when a user has not chosen one
    pub default_locale: Locale,
    /// Plan price table, immutable reference data
    pub plans: PlanCatalog,
}

impl Default for CorsoConfig {
    fn default() -> Self {
        Self {
            gateway_token: String::new(),
            operator_id: None,
            store_path: PathBuf::from("users.json"),
            site_url: "https://corso.example".to_string(),
            support: SupportContacts::default(),
            group_links: GroupLinks::default(),
            default_locale: Locale::Ru,
            plans: PlanCatalog::default(),
        }
    }
}

impl CorsoConfig {
    /// Load configuration with precedence: environment > user file > bundled
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse or the merged result does
    /// not deserialize.
    #[instrument]
    pub fn load() -> CorsoResult<Self> {
        debug!("Loading configuration: env > ./corso.toml > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../corso.toml");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("corso").required(false))
            .add_source(
                Environment::with_prefix("CORSO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                CorsoError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CorsoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration from a specific file path, with environment
    /// overrides still applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CorsoResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CORSO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                CorsoError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CorsoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Check the invariants that must hold before serving.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway token is missing. A missing operator
    /// id is not an error: the system then runs in open-authorization mode,
    /// which is logged loudly because it treats every caller as operator.
    pub fn validate(&self) -> CorsoResult<()> {
        if self.gateway_token.trim().is_empty() {
            Err(ConfigError::new("CORSO_GATEWAY_TOKEN is not set"))?;
        }
        if self.operator_id.is_none() {
            warn!("No operator id configured: running in open-authorization mode");
        }
        Ok(())
    }

    /// Whether a user is authorized as operator.
    ///
    /// With no operator configured every caller is treated as operator
    /// (bring-up mode).
    pub fn is_operator(&self, user: UserId) -> bool {
        match self.operator_id {
            Some(operator) => operator == user,
            None => true,
        }
    }
}
