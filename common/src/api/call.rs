use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body of the check endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct CheckPassword {
    pub password: String,
}

// candidates must never reach logs, not even through a stray {:?}
impl fmt::Debug for CheckPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckPassword").field("password", &"<redacted>").finish()
    }
}

/// Outcome of one password evaluation, as serialized on the wire.
///
/// Only the fields relevant to the outcome are present in the JSON: a weak
/// verdict carries `issues`, a breached one `breachCount` and `message`, a
/// degraded one `apiError`. `breachCount` is never populated together with
/// `isWeak` because a local policy failure short-circuits the breach lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAssessment {
    pub is_breached: bool,
    pub is_weak: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breach_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_error: Option<bool>,
}

impl PasswordAssessment {
    /// Local policy rejected the candidate; the breach corpus was not consulted.
    pub fn weak(issues: Vec<String>) -> Self {
        Self {
            is_breached: false,
            is_weak: true,
            breach_count: None,
            issues,
            message: None,
            api_error: None,
        }
    }

    pub fn breached(count: u64) -> Self {
        Self {
            is_breached: true,
            is_weak: false,
            breach_count: Some(count),
            issues: Vec::new(),
            message: Some(format!(
                "This password has appeared in {} known data breaches, please choose a different one",
                count
            )),
            api_error: None,
        }
    }

    pub fn secure() -> Self {
        Self {
            is_breached: false,
            is_weak: false,
            breach_count: None,
            issues: Vec::new(),
            message: Some("Password is secure".to_string()),
            api_error: None,
        }
    }

    /// The breach corpus could not be reached: the caller may proceed, the
    /// verdict is advisory only.
    pub fn degraded() -> Self {
        Self {
            is_breached: false,
            is_weak: false,
            breach_count: None,
            issues: Vec::new(),
            message: Some("Could not verify the password against known data breaches".to_string()),
            api_error: Some(true),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.api_error == Some(true)
    }
}

/// JSON payload of non-200 responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn password_required() -> Self {
        Self { error: "Password is required".to_string(), details: None }
    }

    pub fn internal(details: String) -> Self {
        Self { error: "Internal server error".to_string(), details: Some(details) }
    }
}
