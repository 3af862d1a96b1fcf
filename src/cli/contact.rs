use anyhow::Result;
use landing::config::Config;
use landing_contact::{ContactForm, Field, HttpTransport, SubmitStatus};

/// Sends one contact submission through a running relay.
pub async fn submit(
    config: Config,
    endpoint: Option<String>,
    email: String,
    message: String,
) -> Result<()> {
    let endpoint = endpoint.unwrap_or_else(|| config.server.relay_url());
    let mut form = ContactForm::new(HttpTransport::new(endpoint.to_owned()));

    form.set(Field::Email, email);
    form.set(Field::Message, message);

    match form.submit().await? {
        SubmitStatus::Success => {
            tracing::info!(endpoint = %endpoint, "Contact submission delivered");

            Ok(())
        }
        SubmitStatus::Error => anyhow::bail!("relay at {endpoint} did not accept the submission"),
    }
}
