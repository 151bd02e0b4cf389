//! Contact form submissions.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::project::is_blank;

/// Maximum length for the free-text message body (characters).
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

// `validator` length bounds are `u64`; same value as `MAX_MESSAGE_LENGTH`.
const MAX_MESSAGE_LENGTH_U64: u64 = MAX_MESSAGE_LENGTH as u64;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const MESSAGE_TOO_LONG: &str = "Message is too long";

/// A message left by a visitor through the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = MAX_MESSAGE_LENGTH_U64))]
    pub message: String,
}

impl ContactSubmission {
    /// All three fields must be present, the email well-formed and the
    /// message within [`MAX_MESSAGE_LENGTH`].
    pub fn check(&self) -> Result<(), CoreError> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|v| is_blank(v))
        {
            return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        if let Err(errors) = self.validate() {
            let fields = errors.field_errors();
            let msg = if fields.contains_key("email") {
                INVALID_EMAIL_MESSAGE
            } else {
                MESSAGE_TOO_LONG
            };
            return Err(CoreError::Validation(msg.to_string()));
        }
        Ok(())
    }
}
