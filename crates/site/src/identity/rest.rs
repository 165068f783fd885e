//! JSON/REST client for the managed identity service.
//!
//! # Endpoints
//!
//! ```text
//! POST {base}/accounts:signUp              {"email", "password"} -> identity
//! POST {base}/accounts:signInWithPassword  {"email", "password"} -> identity
//! POST {base}/accounts:signOut             {"localId"}
//! ```
//!
//! Rejections carry `{"error": {"message": CODE}}` with Firebase-style
//! codes (`EMAIL_NOT_FOUND`, `INVALID_PASSWORD`, `EMAIL_EXISTS`, ...).

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use classic_cuts_core::{AdminUid, Email};

use crate::config::IdentityConfig;

use super::{Identity, IdentityError};

/// Production identity client.
#[derive(Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignOutRequest<'a> {
    #[serde(rename = "localId")]
    local_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct IdentityResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] if the API key cannot be encoded
    /// into a request header.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let mut headers = HeaderMap::new();
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose_secret()))
                .map_err(|e| IdentityError::Rejected(format!("invalid identity API key: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    #[instrument(skip(self, password), fields(email = %email))]
    pub(super) async fn create_account(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        self.credentials_call("accounts:signUp", email, password)
            .await
    }

    #[instrument(skip(self, password), fields(email = %email))]
    pub(super) async fn sign_in(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        self.credentials_call("accounts:signInWithPassword", email, password)
            .await
    }

    #[instrument(skip(self))]
    pub(super) async fn sign_out(&self, uid: &AdminUid) -> Result<(), IdentityError> {
        let url = format!("{}/accounts:signOut", self.base_url);
        let request = SignOutRequest {
            local_id: uid.as_str(),
        };
        let response = self.client.post(url).json(&request).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn credentials_call(
        &self,
        endpoint: &str,
        email: &Email,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let request = CredentialsRequest {
            email: email.as_str(),
            password,
        };
        let response = self.client.post(url).json(&request).send().await?;
        let body: IdentityResponse = Self::check(response).await?.json().await?;

        let email = Email::parse(&body.email)
            .map_err(|e| IdentityError::Rejected(format!("identity returned bad email: {e}")))?;
        Ok(Identity {
            uid: AdminUid::new(body.local_id),
            email,
        })
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, IdentityError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("identity service returned {status}"),
        };
        match code.as_str() {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                Err(IdentityError::InvalidCredentials)
            }
            "EMAIL_EXISTS" => Err(IdentityError::AccountExists),
            _ => Err(IdentityError::Rejected(code)),
        }
    }
}
