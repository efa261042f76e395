//! Loader for service configuration with an optional YAML file and
//! `ORGLENS_`-prefixed environment overrides.
//!
//! Environment variables win over file values. The shared secret is the only
//! required setting: a missing `ORGLENS_SECRET_KEY` (or `secret_key` in the
//! file) makes [`ServiceConfigLoader::load`] fail, which callers treat as a
//! fatal startup condition.
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the Orglens server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Shared secret compared against the `Authorization` header.
    pub secret_key: String,
    /// Listen address for the HTTP server.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory holding the entity-recognition model files.
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
}

fn default_bind() -> String {
    "0.0.0.0:8080".into()
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

/// Builder hiding the `config` crate wiring (optional YAML + env overrides).
#[derive(Default)]
pub struct ServiceConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl ServiceConfigLoader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a config file; missing files are skipped so headless
    /// deployments can rely purely on environment variables.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet; used by tests.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// The environment source is added last so `ORGLENS_*` variables override
    /// anything from files or inline snippets.
    pub fn load(self) -> Result<ServiceConfig, ConfigError> {
        self.builder
            .add_source(Environment::with_prefix("ORGLENS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_secret_is_an_error() {
        temp_env::with_var_unset("ORGLENS_SECRET_KEY", || {
            let err = ServiceConfigLoader::new().load();
            assert!(err.is_err());
        });
    }

    #[test]
    fn secret_from_environment() {
        temp_env::with_vars(
            [
                ("ORGLENS_SECRET_KEY", Some("hunter2")),
                ("ORGLENS_BIND", None),
                ("ORGLENS_MODEL_DIR", None),
            ],
            || {
                let cfg = ServiceConfigLoader::new().load().expect("valid config");
                assert_eq!(cfg.secret_key, "hunter2");
                assert_eq!(cfg.bind, "0.0.0.0:8080");
                assert_eq!(cfg.model_dir, PathBuf::from("models"));
            },
        );
    }

    #[test]
    fn environment_overrides_file_values() {
        temp_env::with_vars(
            [
                ("ORGLENS_SECRET_KEY", Some("from-env")),
                ("ORGLENS_BIND", Some("127.0.0.1:9999")),
            ],
            || {
                let cfg = ServiceConfigLoader::new()
                    .with_yaml_str("secret_key: from-file\nbind: 0.0.0.0:1\n")
                    .load()
                    .expect("valid config");
                assert_eq!(cfg.secret_key, "from-env");
                assert_eq!(cfg.bind, "127.0.0.1:9999");
            },
        );
    }

    #[test]
    fn file_values_apply_when_env_is_silent() {
        temp_env::with_vars(
            [
                ("ORGLENS_SECRET_KEY", None::<&str>),
                ("ORGLENS_BIND", None),
                ("ORGLENS_MODEL_DIR", None),
            ],
            || {
                let cfg = ServiceConfigLoader::new()
                    .with_yaml_str("secret_key: s3cret\nmodel_dir: /opt/models\n")
                    .load()
                    .expect("valid config");
                assert_eq!(cfg.secret_key, "s3cret");
                assert_eq!(cfg.model_dir, PathBuf::from("/opt/models"));
            },
        );
    }
}
