//! Google ID Token 校验
//!
//! 调用 Google tokeninfo 接口校验 ID Token，要求 audience 与配置的
//! client id 一致且邮箱已验证。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::{ClassroomError, Result};

/// 校验通过后的 Google 身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleIdentity {
    pub email: String,
    pub name: String,
}

#[async_trait]
pub trait GoogleTokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity>;
}

// tokeninfo 接口的响应，布尔值以字符串形式返回
#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: Option<String>,
    email_verified: Option<String>,
    name: Option<String>,
}

pub struct GoogleTokenInfoVerifier {
    client: Client,
    endpoint: String,
    client_id: String,
}

impl GoogleTokenInfoVerifier {
    pub fn new(endpoint: String, client_id: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            client_id,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.auth.google_tokeninfo_url.clone(),
            config.auth.google_client_id.clone(),
            Duration::from_secs(config.auth.google_timeout),
        )
    }

    fn check_claims(&self, info: TokenInfo) -> Result<GoogleIdentity> {
        if self.client_id.is_empty() || info.aud != self.client_id {
            warn!("Google token audience mismatch");
            return Err(ClassroomError::authentication("Invalid Google token."));
        }
        if info.email_verified.as_deref() != Some("true") {
            return Err(ClassroomError::authentication(
                "Google account email is not verified.",
            ));
        }
        let email = info
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ClassroomError::authentication("Invalid Google token."))?;
        let name = info.name.unwrap_or_else(|| email.clone());
        Ok(GoogleIdentity { email, name })
    }
}

#[async_trait]
impl GoogleTokenVerifier for GoogleTokenInfoVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity> {
        if id_token.trim().is_empty() {
            return Err(ClassroomError::validation("Google token is required."));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            debug!("Google tokeninfo rejected token with status {}", status);
            return Err(ClassroomError::authentication("Invalid Google token."));
        }
        if !status.is_success() {
            return Err(ClassroomError::external_service(format!(
                "Google tokeninfo returned status {}",
                status.as_u16()
            )));
        }

        let info: TokenInfo = response.json().await?;
        self.check_claims(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> GoogleTokenInfoVerifier {
        GoogleTokenInfoVerifier::new(
            "http://127.0.0.1:1/tokeninfo".into(),
            "client-123".into(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    fn info(aud: &str, verified: &str) -> TokenInfo {
        TokenInfo {
            aud: aud.into(),
            email: Some("s@school.edu".into()),
            email_verified: Some(verified.into()),
            name: Some("Sam".into()),
        }
    }

    #[test]
    fn test_claims_accepted() {
        let identity = verifier().check_claims(info("client-123", "true")).unwrap();
        assert_eq!(identity.email, "s@school.edu");
        assert_eq!(identity.name, "Sam");
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let err = verifier()
            .check_claims(info("other-client", "true"))
            .unwrap_err();
        assert_eq!(err.error_type(), "Authentication Error");
    }

    #[test]
    fn test_unverified_email_rejected() {
        assert!(verifier().check_claims(info("client-123", "false")).is_err());
    }
}
