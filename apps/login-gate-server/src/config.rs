//! Server configuration: YAML file overlaid with `LOGIN_GATE__*` environment variables.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use login_gate::LoginGateConfig;
use serde::Deserialize;

/// Prefix of environment overrides; nested keys are separated by `__`,
/// e.g. `LOGIN_GATE__LOGIN_GATE__VENDOR=acme`.
pub const ENV_PREFIX: &str = "LOGIN_GATE__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub login_gate: LoginGateConfig,
    #[cfg(feature = "static-login")]
    pub static_login_plugin: Option<static_login_plugin::config::StaticLoginPluginConfig>,
    /// Accepted but ignored when the plugin is not compiled in.
    #[cfg(not(feature = "static-login"))]
    pub static_login_plugin: Option<serde::de::IgnoredAny>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load the configuration file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or the merged
    /// configuration does not match the schema.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(
            path.is_file(),
            "config file '{}' not found",
            path.display()
        );

        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("failed to load config from '{}'", path.display()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_yaml_file() {
        let file = write_config(
            r#"
logging:
  format: json
login_gate:
  vendor: "acme"
  identity_pem: "PEM-DATA"
"#,
        );

        let cfg = AppConfig::load(file.path()).unwrap();
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.login_gate.vendor, "acme");
        assert_eq!(
            cfg.login_gate.load_identity().unwrap().as_bytes(),
            b"PEM-DATA"
        );
    }

    #[cfg(feature = "static-login")]
    #[test]
    fn loads_static_plugin_section() {
        let file = write_config(
            r#"
login_gate:
  identity_pem: "PEM-DATA"
static_login_plugin:
  priority: 7
  users:
    - username: "admin"
      secret: "admin"
      local: true
"#,
        );

        let cfg = AppConfig::load(file.path()).unwrap();
        let plugin = cfg.static_login_plugin.unwrap();
        assert_eq!(plugin.priority, 7);
        assert_eq!(plugin.users.len(), 1);
    }

    #[cfg(not(feature = "static-login"))]
    #[test]
    fn static_plugin_section_is_ignored_without_plugin() {
        let file = write_config(
            r#"
login_gate:
  identity_pem: "PEM-DATA"
static_login_plugin:
  users:
    - username: "admin"
      secret: "admin"
"#,
        );

        let cfg = AppConfig::load(file.path()).unwrap();
        assert!(cfg.static_login_plugin.is_some());
    }

    #[test]
    fn shipped_dev_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/login-gate.yaml");
        let cfg = AppConfig::load(&path).unwrap();
        assert!(cfg.static_login_plugin.is_some());
        assert!(cfg.login_gate.identity_path.is_some());
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("logging:\n  level: \"warn\"\n");

        let cfg = temp_env::with_var("LOGIN_GATE__LOGGING__LEVEL", Some("debug"), || {
            AppConfig::load(file.path()).unwrap()
        });
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(&dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("login_gat:\n  vendor: \"acme\"\n");
        assert!(AppConfig::load(file.path()).is_err());
    }
}
