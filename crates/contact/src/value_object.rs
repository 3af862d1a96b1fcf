use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// One contact request, as posted by the form and read by the relay.
///
/// Missing fields deserialize to empty strings; the relay forwards whatever
/// it receives.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Editable part of the contact form.
#[derive(Validate, Default, Clone, Debug, PartialEq)]
pub struct FormData {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Email,
    Message,
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SubmitStatus {
    Success,
    Error,
}

/// JSON body returned by the relay endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}
