use std::str::FromStr;

use async_trait::async_trait;
use time::{OffsetDateTime, UtcOffset, macros::format_description};
use validator::Validate;

use crate::{ContactSubmission, Field, FormData, SubmitStatus};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("relay answered with status {0}")]
    Status(u16),
}

/// Why a submit action did not issue a request.
#[derive(Debug, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in progress")]
    InFlight,

    #[error("{0}")]
    Invalid(#[from] validator::ValidationErrors),
}

#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), TransportError>;
}

/// Posts submissions as JSON to a relay endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|err| {
                TransportError::Network(format!("{:#}", anyhow::Error::from(err)))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(())
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g.
/// `2024-05-01T12:00:00.000Z`.
pub fn client_timestamp(now: OffsetDateTime) -> String {
    let now = now.to_offset(UtcOffset::UTC);

    now.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Client side of the contact form.
///
/// A submit goes through [`begin_submit`](Self::begin_submit) and
/// [`finish_submit`](Self::finish_submit); [`submit`](Self::submit) runs
/// both around a single transport call. While a submission is in flight
/// further submits are refused.
pub struct ContactForm<T> {
    transport: T,
    data: FormData,
    is_submitting: bool,
    status: Option<SubmitStatus>,
}

impl<T: SubmitTransport> ContactForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            data: FormData::default(),
            is_submitting: false,
            status: None,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status(&self) -> Option<SubmitStatus> {
        self.status
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Email => self.data.email = value.into(),
            Field::Message => self.data.message = value.into(),
        }
    }

    /// Updates a field by its input name. Unknown names change nothing.
    pub fn update(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Ok(field) = Field::from_str(name) else {
            tracing::debug!(name, "ignoring change of unknown form field");
            return false;
        };

        self.set(field, value);

        true
    }

    pub fn begin_submit(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<ContactSubmission, SubmitBlocked> {
        if self.is_submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.data.validate()?;

        self.is_submitting = true;
        self.status = None;

        Ok(ContactSubmission {
            email: self.data.email.to_owned(),
            message: self.data.message.to_owned(),
            timestamp: client_timestamp(now),
        })
    }

    pub fn finish_submit(&mut self, outcome: Result<(), TransportError>) -> SubmitStatus {
        let status = match outcome {
            Ok(()) => {
                self.data = FormData::default();
                SubmitStatus::Success
            }
            Err(err) => {
                tracing::error!("contact form submission failed: {err:#}");
                SubmitStatus::Error
            }
        };

        self.status = Some(status);
        self.is_submitting = false;

        status
    }

    pub async fn submit(&mut self) -> Result<SubmitStatus, SubmitBlocked> {
        let submission = self.begin_submit(OffsetDateTime::now_utc())?;
        let outcome = self.transport.send(&submission).await;

        Ok(self.finish_submit(outcome))
    }
}
