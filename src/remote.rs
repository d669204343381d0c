// src/remote.rs

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::{
    config::Config,
    error::ServiceError,
    models::comment::{Comment, CreateCommentRequest, LikeResponse},
};

/// The three capabilities the widget needs from the comment backend.
/// Kept narrow so tests can substitute an in-memory implementation.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// All comments for one post, newest first.
    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<Comment>, ServiceError>;

    /// Persist a new comment; the returned representation is authoritative.
    async fn create_comment(&self, req: &CreateCommentRequest) -> Result<Comment, ServiceError>;

    /// Increment the like counter of one comment and return its new value.
    async fn like_comment(&self, comment_id: i64) -> Result<LikeResponse, ServiceError>;
}

/// `CommentService` over HTTP, against the REST endpoints:
///
/// * `GET  {base}/comments/{postId}`
/// * `POST {base}/comments`
/// * `POST {base}/comments/{commentId}/like`
///
/// Any non-success status is a uniform failure; no retries, no auth.
pub struct HttpCommentService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCommentService {
    pub fn new(mut base_url: Url, timeout: Duration) -> Self {
        // Url::join treats a base without a trailing slash as a file path
        // and would drop its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to construct HTTP client");
        Self { client, base_url }
    }

    pub fn from_config(config: &Config) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(&config.comments_api_url)?;
        Ok(Self::new(
            base_url,
            Duration::from_secs(config.request_timeout_secs),
        ))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }
}

#[async_trait]
impl CommentService for HttpCommentService {
    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<Comment>, ServiceError> {
        let url = self.endpoint(&format!("comments/{}", post_id))?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Vec<Comment>>().await?)
    }

    async fn create_comment(&self, req: &CreateCommentRequest) -> Result<Comment, ServiceError> {
        let url = self.endpoint("comments")?;
        let response = self.client.post(url).json(req).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Comment>().await?)
    }

    async fn like_comment(&self, comment_id: i64) -> Result<LikeResponse, ServiceError> {
        let url = self.endpoint(&format!("comments/{}/like", comment_id))?;
        let response = self.client.post(url).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status().as_u16()));
        }

        Ok(response.json::<LikeResponse>().await?)
    }
}
