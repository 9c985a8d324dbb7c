use common::api::{CheckPassword, ErrorBody, PasswordAssessment};
use eyre::{eyre, WrapErr};
use tracing::warn;

#[derive(Clone)]
pub struct CheckClient {
    reqwest_client: reqwest::Client,
    url: String // maybe use Url type directly
}

impl CheckClient {
    pub fn new(url: &str) -> Self {
        Self {
            reqwest_client: reqwest::Client::new(),
            url: url.to_owned()
        }
    }

    /// Never fails: any transport or decode problem is folded into the
    /// degraded assessment, so UI code has no error path to handle.
    pub async fn check(&self, password: &str) -> PasswordAssessment {
        match self.check_result(password).await {
            Ok(assessment) => assessment,
            Err(e) => {
                warn!("check request failed: {:#}", e);
                PasswordAssessment::degraded()
            }
        }
    }

    pub async fn check_result(&self, password: &str) -> eyre::Result<PasswordAssessment> {
        let body = serde_json::to_vec(&CheckPassword { password: password.to_string() })
            .wrap_err("Serialization error")?;

        let mut retries = 1;
        let res = loop {
            match self.reqwest_client.post(&self.url)
                .header("content-type", "application/json")
                .body(body.clone())
                .send()
                .await {
                    Err(e) if e.is_request() && retries != 0 => {
                        warn!("request failed: {:#}", e);
                        retries -= 1;
                    },
                    e => break e,
                }
        }.wrap_err("Reqwest error")?;

        let status = res.status();
        let body = res.bytes().await.wrap_err("Body error")?;

        if !status.is_success() {
            let reason = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("status {}", status));
            return Err(eyre!("service refused the check: {}", reason));
        }

        serde_json::from_slice(&body).wrap_err("Deserialization error")
    }
}
