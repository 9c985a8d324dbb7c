use std::time::Duration;

use common::policy::PasswordPolicy;

use crate::config::Config;
use crate::hibp::BreachChecker;

/// Built once at startup, immutable afterwards, shared across requests.
pub struct State {
    pub config: Config,
    pub policy: PasswordPolicy,
    pub breach: BreachChecker,
}

impl State {
    pub async fn new(config_path: &str) -> eyre::Result<Self> {
        // load config
        let config = Config::load(config_path).await?;

        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> eyre::Result<Self> {
        let policy = match &config.deny_list {
            Some(list) => PasswordPolicy::new(config.min_password_length, list.clone()),
            None => PasswordPolicy::new(
                config.min_password_length,
                common::consts::COMMON_PASSWORDS.iter().map(|p| p.to_string()),
            ),
        };

        let breach = BreachChecker::over_http(
            &config.breach_api_url,
            Duration::from_secs(config.lookup_timeout_secs),
        )?;

        Ok(Self { config, policy, breach })
    }
}
