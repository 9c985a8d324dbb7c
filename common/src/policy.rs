use std::collections::HashSet;

use thiserror::Error;

use crate::consts;

/// One violated strength rule. The `Display` text is what ends up in the
/// `issues` array of the wire response.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StrengthIssue {
    #[error("Password must be at least {0} characters long")]
    TooShort(usize),
    #[error("Password must contain at least one uppercase letter")]
    NoUppercase,
    #[error("Password must contain at least one lowercase letter")]
    NoLowercase,
    #[error("Password must contain at least one number")]
    NoDigit,
    #[error("Password must contain at least one special character")]
    NoSpecial,
    #[error("Password is too common")]
    Common,
}

/// Local strength rules: a minimum length, four character-class requirements
/// and a deny-list of passwords that are rejected no matter what.
///
/// Immutable once built. The deny-list is injected so deployments (and tests)
/// can substitute their own without touching [`consts::COMMON_PASSWORDS`].
#[derive(Clone, Debug)]
pub struct PasswordPolicy {
    min_length: usize,
    deny_list: HashSet<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(
            consts::MIN_PASSWORD_LENGTH,
            consts::COMMON_PASSWORDS.iter().map(|p| p.to_string()),
        )
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize, deny_list: impl IntoIterator<Item = String>) -> Self {
        Self {
            min_length,
            // membership is case-insensitive, normalize once here
            deny_list: deny_list.into_iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Run every rule over the candidate and report all violations at once,
    /// in rule order. An empty result means the candidate passed local policy.
    ///
    /// Pure function: no I/O, and the candidate must never be logged here.
    pub fn evaluate(&self, password: &str) -> Vec<StrengthIssue> {
        let mut issues = Vec::new();

        // length is counted in codepoints, not bytes
        if password.chars().count() < self.min_length {
            issues.push(StrengthIssue::TooShort(self.min_length));
        }

        // character classes are the ASCII ones; anything outside them,
        // including all non-ASCII, only counts towards the special class
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            issues.push(StrengthIssue::NoUppercase);
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            issues.push(StrengthIssue::NoLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            issues.push(StrengthIssue::NoDigit);
        }

        if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            issues.push(StrengthIssue::NoSpecial);
        }

        if self.deny_list.contains(&password.to_lowercase()) {
            issues.push(StrengthIssue::Common);
        }

        issues
    }
}
