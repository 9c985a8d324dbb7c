use common::api::{self, PasswordAssessment};
use tracing::{debug, warn};

use crate::hibp::BreachVerdict;
use crate::state::State;

impl State {
    /// Runs the local policy first and consults the breach corpus only for
    /// candidates that pass it. A corpus failure degrades the assessment
    /// instead of failing the request.
    pub async fn check_password(&self, password: &str) -> api::Result<PasswordAssessment> {
        let issues = self.policy.evaluate(password);

        let verdict = if issues.is_empty() {
            self.breach.check(password).await
        } else {
            Ok(BreachVerdict::NotChecked)
        };

        let assessment = match verdict {
            Ok(BreachVerdict::NotChecked) => {
                debug!(rules = issues.len(), "rejected by local policy");
                PasswordAssessment::weak(issues.iter().map(|i| i.to_string()).collect())
            }
            Ok(BreachVerdict::Breached { count }) => {
                debug!(count, "breach corpus match");
                PasswordAssessment::breached(count)
            }
            Ok(BreachVerdict::Clean) => PasswordAssessment::secure(),
            Err(e) => {
                // fail-open: an unreachable corpus must not block the caller
                warn!("breach lookup failed: {:#}", e);
                PasswordAssessment::degraded()
            }
        };

        debug!("ok");
        Ok(assessment)
    }
}
