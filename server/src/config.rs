use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub breach_api_url: String,
    pub lookup_timeout_secs: u64,
    pub min_password_length: usize,
    pub deny_list: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8081".to_string(),
            breach_api_url: common::consts::RANGE_API_URL.to_string(),
            lookup_timeout_secs: 5,
            min_password_length: common::consts::MIN_PASSWORD_LENGTH,
            deny_list: None,
        }
    }
}

impl Config {
    pub async fn load(path: &str) -> eyre::Result<Self> {
        let buf = match tokio::fs::read_to_string(path).await {
            Ok(buf) => buf,
            // a missing file is not an error, the defaults cover every field
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path, "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(toml::from_str(&buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("listen_addr = \"0.0.0.0:9000\"").unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.breach_api_url, common::consts::RANGE_API_URL);
        assert_eq!(config.lookup_timeout_secs, 5);
        assert_eq!(config.min_password_length, common::consts::MIN_PASSWORD_LENGTH);
        assert!(config.deny_list.is_none());
    }

    #[test]
    fn full_file_overrides_everything() {
        let config: Config = toml::from_str(
            r#"
            listen_addr = "127.0.0.1:8082"
            breach_api_url = "https://example.com/hibp"
            lookup_timeout_secs = 2
            min_password_length = 16
            deny_list = ["hunter2"]
            "#,
        )
        .unwrap();

        assert_eq!(config.breach_api_url, "https://example.com/hibp");
        assert_eq!(config.lookup_timeout_secs, 2);
        assert_eq!(config.min_password_length, 16);
        assert_eq!(config.deny_list.as_deref(), Some(&["hunter2".to_string()][..]));
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let config = Config::load("/definitely/not/a/config.toml").await.unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8081");
    }
}
