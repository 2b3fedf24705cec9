//! Configuration Loader
//!
//! Layers configuration sources with the `config` crate: compiled defaults,
//! an optional file (YAML, TOML or JSON by extension), then environment
//! overrides under the `BROKER_RESOLVER__` prefix.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{ConfigResult, ConfigurationError};
use super::Config;
use crate::constants::env;
use crate::logging::redact_url;

/// Builder for a layered `Config`
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    skip_environment: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from this file on top of the defaults
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Ignore `BROKER_RESOLVER__*` variables
    pub fn without_environment(mut self) -> Self {
        self.skip_environment = true;
        self
    }

    pub fn load(&self) -> ConfigResult<Config> {
        let mut builder =
            ::config::Config::builder().add_source(::config::Config::try_from(&Config::default())?);

        if let Some(path) = &self.file {
            Self::ensure_exists(path)?;
            debug!(path = %path.display(), "Loading resolver configuration file");
            builder = builder.add_source(::config::File::from(path.as_path()));
        }

        if !self.skip_environment {
            builder = builder.add_source(
                ::config::Environment::with_prefix(env::OVERRIDE_PREFIX)
                    .separator(env::OVERRIDE_SEPARATOR)
                    .try_parsing(true),
            );
        }

        let loaded: Config = builder.build()?.try_deserialize()?;

        debug!(
            broker = %redact_url(&loaded.broker),
            result_backend = %redact_url(&loaded.result_backend),
            "Configuration loaded successfully"
        );

        Ok(loaded)
    }

    fn ensure_exists(path: &Path) -> ConfigResult<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(ConfigurationError::config_file_not_found(path))
        }
    }
}
