pub const CONFIG_PATH: &str = "config.toml";

/// Default URL of the service's own check endpoint, used by clients.
pub const CHECK_API_URL: &str = "http://127.0.0.1:8081/api/check-password";

/// Base URL of the remote breach corpus implementing the range protocol.
pub const RANGE_API_URL: &str = "https://api.pwnedpasswords.com";

/// Length of the hex digest prefix revealed to the breach corpus. 5 chars keeps
/// each candidate hidden among hundreds of hashes sharing the same prefix.
pub const HASH_PREFIX_LEN: usize = 5;

pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Passwords rejected outright no matter how they score on composition rules.
/// Matched case-insensitively against the whole candidate.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "qwerty",
    "qwerty123",
    "abc123",
    "111111",
    "123123",
    "password1",
    "password123",
    "iloveyou",
    "admin",
    "welcome",
    "monkey",
    "letmein",
    "dragon",
    "princess",
];
