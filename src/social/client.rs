//! Blocking client for the X API v2 tweets endpoint.
//!
//! Two operations: post a status, and post a reply threaded under an
//! earlier post via `in_reply_to_tweet_id`.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;


/// Publishing failures. The orchestrator treats a failed primary post as
/// fatal for the run and a failed reply as log-only.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("publish request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("publisher returned HTTP {0}")]
    Api(u16),
}


/// Identifier of a published post, usable as a reply target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostId(pub String);


// ── API response types (matching the v2 tweets JSON) ──

#[derive(Debug, Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
}


/// Reusable blocking client + bearer credential.
pub struct SocialClient {
    client: reqwest::blocking::Client,
    base: String,
    token: String,
}


impl SocialClient {
    pub fn new(base: &str, token: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            client,
            base: base.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Post a status message, returning its identifier.
    pub fn post(&self, text: &str) -> Result<PostId, PublishError> {
        self.create_post(post_body(text))
    }

    /// Post a reply threaded under an earlier post.
    pub fn reply(&self, text: &str, to: &PostId) -> Result<PostId, PublishError> {
        self.create_post(reply_body(text, to))
    }

    fn create_post(&self, body: Value) -> Result<PostId, PublishError> {
        let url = format!("{}/2/tweets", self.base);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;

        if !resp.status().is_success() {
            return Err(PublishError::Api(resp.status().as_u16()));
        }

        let parsed: TweetResponse = resp.json()?;
        Ok(PostId(parsed.data.id))
    }
}


impl crate::task::StatusPublisher for SocialClient {
    fn post(&self, text: &str) -> Result<PostId, PublishError> {
        SocialClient::post(self, text)
    }

    fn reply(&self, text: &str, to: &PostId) -> Result<PostId, PublishError> {
        SocialClient::reply(self, text, to)
    }
}


fn post_body(text: &str) -> Value {
    json!({ "text": text })
}


fn reply_body(text: &str, to: &PostId) -> Value {
    json!({
        "text": text,
        "reply": { "in_reply_to_tweet_id": to.0 }
    })
}
