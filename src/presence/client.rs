use crate::db::TypingFlag;

use super::PresenceError;

/// Talks to the `/writing` routes of a running server.
#[derive(Debug, Clone)]
pub struct PresenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl PresenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn set_typing(&self, post_id: i64, typing: bool) -> Result<(), PresenceError> {
        self.http
            .put(format!("{}/writing/{post_id}/{typing}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn typing(&self, post_id: i64) -> Result<bool, PresenceError> {
        let flag: Option<TypingFlag> = self.http
            .get(format!("{}/writing/{post_id}", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        flag.map(|flag| flag.typing)
            .ok_or(PresenceError::NoSuchPost(post_id))
    }
}
