//! # Presenter Configuration
//!
//! Explicit configuration passed to [`PresenterClass::builder`]. Values are
//! layered the same way on every load: built-in defaults, then an optional
//! TOML file, then `GIFT_WRAP_*` environment variables.
//!
//! ```rust
//! use gift_wrap::Configuration;
//!
//! let config = Configuration::default().configure(|c| c.use_serializers = false);
//! assert!(!config.use_serializers());
//! ```
//!
//! [`PresenterClass::builder`]: crate::registry::PresenterClass::builder

use crate::error::PresenterResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/gift_wrap.toml";

/// Environment variable prefix, e.g. `GIFT_WRAP_USE_SERIALIZERS=false`
pub const ENV_PREFIX: &str = "GIFT_WRAP";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Configuration {
    /// Whether presenter classes built with this configuration support
    /// `serializable_hash`, `to_json` and `serde::Serialize`.
    #[serde(default = "default_use_serializers")]
    pub use_serializers: bool,
}

fn default_use_serializers() -> bool {
    true
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            use_serializers: default_use_serializers(),
        }
    }
}

impl Configuration {
    /// Load from `config/gift_wrap.toml` (if present) and the environment
    pub fn load() -> PresenterResult<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load from a specific file (if present) and the environment
    pub fn load_from(path: &Path) -> PresenterResult<Self> {
        Self::load_layered(Some(path), ENV_PREFIX)
    }

    pub(crate) fn load_layered(path: Option<&Path>, env_prefix: &str) -> PresenterResult<Self> {
        let mut builder = ::config::Config::builder()
            .set_default("use_serializers", default_use_serializers())?;

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        let config: Self = builder
            .add_source(::config::Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;

        debug!(
            use_serializers = config.use_serializers,
            path = ?path,
            "Presenter configuration loaded"
        );

        Ok(config)
    }

    /// Block-style mutation of an owned configuration before it is handed
    /// to any presenter class builder.
    pub fn configure(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }

    pub fn use_serializers(&self) -> bool {
        self.use_serializers
    }
}
