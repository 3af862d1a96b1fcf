//! Google Sheets client authenticated with a service account.
//!
//! Every append performs the JWT-bearer grant first: an RS256 assertion
//! signed with the service account key is exchanged for a short-lived
//! access token, which then authorizes a single `values.append` call.

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::{Append, SheetRow};

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 60 * 60;
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Turns the literal `\n` sequences of an environment-stored PEM key into
/// real newlines.
pub fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Clone)]
pub struct ServiceAccount {
    client_email: String,
    private_key: String,
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl ServiceAccount {
    pub fn new(client_email: impl Into<String>, private_key: &str) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: unescape_private_key(private_key),
        }
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn claims(&self, audience: &str, now: u64) -> Claims {
        Claims {
            iss: self.client_email.to_owned(),
            scope: SPREADSHEETS_SCOPE.to_owned(),
            aud: audience.to_owned(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Signed assertion for the JWT-bearer grant.
    pub fn assertion(&self, audience: &str, now: u64) -> anyhow::Result<String> {
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .context("invalid service account private key")?;

        encode(
            &Header::new(Algorithm::RS256),
            &self.claims(audience, now),
            &key,
        )
        .context("failed to sign service account assertion")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Serialize)]
struct ValueRange<'a> {
    values: [[&'a str; 3]; 1],
}

#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    pub client_email: String,
    pub private_key: String,
    pub sheet_id: String,
    pub token_uri: String,
    pub api_base_url: String,
}

#[derive(Clone, Debug)]
pub struct GoogleSheets {
    client: reqwest::Client,
    account: ServiceAccount,
    sheet_id: String,
    token_uri: String,
    api_base_url: String,
}

impl GoogleSheets {
    pub fn new(config: GoogleSheetsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            account: ServiceAccount::new(config.client_email, &config.private_key),
            sheet_id: config.sheet_id,
            token_uri: config.token_uri,
            api_base_url: config.api_base_url,
        }
    }

    pub fn account(&self) -> &ServiceAccount {
        &self.account
    }

    pub fn append_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.api_base_url.trim_end_matches('/'),
            urlencoding::encode(&self.sheet_id),
            urlencoding::encode(range),
        )
    }

    pub async fn fetch_token(&self) -> anyhow::Result<AccessToken> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let assertion = self.account.assertion(&self.token_uri, now)?;

        let response = self
            .client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .context("token request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("token endpoint answered {status}: {body}");
        }

        response
            .json::<AccessToken>()
            .await
            .context("failed to parse token response")
    }

    pub async fn append_with_token(
        &self,
        token: &AccessToken,
        range: &str,
        row: &SheetRow,
    ) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.append_url(range))
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .bearer_auth(&token.access_token)
            .json(&ValueRange {
                values: [row.cells()],
            })
            .send()
            .await
            .context("append request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("sheets append answered {status}: {body}");
        }

        Ok(())
    }
}

#[async_trait]
impl Append for GoogleSheets {
    async fn append(&self, range: &str, row: &SheetRow) -> anyhow::Result<()> {
        let token = self.fetch_token().await?;

        tracing::debug!(sheet_id = %self.sheet_id, "access token acquired");

        self.append_with_token(&token, range, row).await
    }
}
