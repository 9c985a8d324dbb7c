mod call;
mod error;

pub use call::{CheckPassword, ErrorBody, PasswordAssessment};
pub use error::{Error, Result};
