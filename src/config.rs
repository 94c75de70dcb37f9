use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_ENDPOINT;

/// Prefix for environment overrides, e.g. `JOBS_IMPORT_ENDPOINT`.
pub const ENV_PREFIX: &str = "JOBS_IMPORT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: String,
    pub dry_run: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dry_run: false,
            verbose: false,
            json_logs: false,
        }
    }
}

impl AppConfig {
    /// Resolve the configuration: defaults, then environment, then CLI.
    ///
    /// `cli_args` should only serialize the options actually given on the
    /// command line so it does not mask the environment.
    pub fn new<T: Serialize>(cli_args: Option<&T>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX));

        if let Some(args) = cli_args {
            figment = figment.merge(Serialized::defaults(args));
        }

        figment.extract().context("Failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::new(None::<&()>).map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("JOBS_IMPORT_ENDPOINT", "http://env.example/api/admin/recommend");
            jail.set_env("JOBS_IMPORT_DRY_RUN", "true");

            let config = AppConfig::new(None::<&()>).map_err(|e| e.to_string())?;
            assert_eq!(config.endpoint, "http://env.example/api/admin/recommend");
            assert!(config.dry_run);
            assert!(!config.verbose);
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_env() {
        Jail::expect_with(|jail| {
            jail.set_env("JOBS_IMPORT_ENDPOINT", "http://env.example/api/admin/recommend");

            let args = json!({"endpoint": "http://cli.example/api/admin/recommend", "verbose": true});
            let config = AppConfig::new(Some(&args)).map_err(|e| e.to_string())?;
            assert_eq!(config.endpoint, "http://cli.example/api/admin/recommend");
            assert!(config.verbose);
            Ok(())
        });
    }
}
