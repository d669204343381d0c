// src/widget.rs

use validator::Validate;

use crate::{
    models::comment::{Comment, CreateCommentRequest},
    remote::CommentService,
    utils::textarea,
};

/// Intrinsic height of the comment textarea, in rows.
const DRAFT_MIN_ROWS: usize = 2;

/// Lifecycle phase of a mounted widget.
///
/// Modeled as a single tagged variant instead of `is_loading`/`is_submitting`
/// booleans so impossible combinations (loading while submitting) cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The initial fetch for the mounted post is in flight.
    Loading,
    /// Idle; the form and the list are interactive.
    Ready,
    /// A create request is in flight; the submit control is disabled.
    Submitting,
}

/// Comment section under one blog post.
///
/// Holds the comment list for the mounted post, the draft form fields, and
/// the current [`Phase`]. All remote access goes through the injected
/// [`CommentService`]; every failure is logged and swallowed, degrading to
/// an empty list (load) or unchanged state (submit, like).
pub struct CommentWidget<S: CommentService> {
    service: S,
    post_id: String,
    phase: Phase,
    comments: Vec<Comment>,
    draft_author: String,
    draft_content: String,
}

impl<S: CommentService> CommentWidget<S> {
    /// A freshly mounted widget, before its initial fetch has settled.
    pub fn new(service: S, post_id: impl Into<String>) -> Self {
        Self {
            service,
            post_id: post_id.into(),
            phase: Phase::Loading,
            comments: Vec::new(),
            draft_author: String::new(),
            draft_content: String::new(),
        }
    }

    /// Mount the widget and run the initial load to settlement.
    pub async fn mount(service: S, post_id: impl Into<String>) -> Self {
        let mut widget = Self::new(service, post_id);
        widget.load().await;
        widget
    }

    /// Fetch the comment list for the mounted post.
    ///
    /// On success the list is replaced with the service's ordering; on any
    /// failure it is left empty. Either way the widget leaves `Loading`, so
    /// the UI can never stick in a loading state.
    pub async fn load(&mut self) {
        match self.service.fetch_comments(&self.post_id).await {
            Ok(comments) => self.comments = comments,
            Err(e) => {
                tracing::error!("Failed to load comments for post {}: {}", self.post_id, e);
                self.comments.clear();
            }
        }
        self.phase = Phase::Ready;
    }

    /// Point the widget at a different post, re-entering `Loading` and
    /// replacing the list. Counterpart of the post id changing under a
    /// still-mounted component.
    pub async fn remount(&mut self, post_id: impl Into<String>) {
        self.post_id = post_id.into();
        self.phase = Phase::Loading;
        self.comments.clear();
        self.load().await;
    }

    /// Submit the current drafts as a new comment.
    ///
    /// A no-op unless the widget is `Ready` (the control is disabled while
    /// loading or while another submission is in flight) and both drafts are
    /// non-empty after trimming. On success the server's representation is
    /// prepended and the drafts are cleared; on failure the drafts are kept
    /// so nothing typed is lost.
    pub async fn submit(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }

        let author = self.draft_author.trim();
        let content = self.draft_content.trim();
        if author.is_empty() || content.is_empty() {
            return;
        }

        let request = CreateCommentRequest {
            post_id: self.post_id.clone(),
            author: author.to_string(),
            content: content.to_string(),
        };
        if let Err(validation_errors) = request.validate() {
            tracing::warn!("Rejected comment draft: {}", validation_errors);
            return;
        }

        self.phase = Phase::Submitting;
        match self.service.create_comment(&request).await {
            Ok(comment) => {
                // Newest first.
                self.comments.insert(0, comment);
                self.draft_author.clear();
                self.draft_content.clear();
            }
            Err(e) => {
                tracing::error!("Failed to submit comment for post {}: {}", self.post_id, e);
            }
        }
        self.phase = Phase::Ready;
    }

    /// Like one comment. Fire-and-forget: on success only the matching
    /// comment's counter is overwritten with the server's value; on failure
    /// nothing changes. One request per call, no client-side debounce.
    pub async fn like(&mut self, comment_id: i64) {
        if self.phase == Phase::Loading {
            return;
        }

        match self.service.like_comment(comment_id).await {
            Ok(response) => {
                if let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) {
                    comment.likes = response.likes;
                }
            }
            Err(e) => {
                tracing::error!("Failed to like comment {}: {}", comment_id, e);
            }
        }
    }

    pub fn set_draft_author(&mut self, author: &str) {
        self.draft_author = author.to_string();
    }

    pub fn set_draft_content(&mut self, content: &str) {
        self.draft_content = content.to_string();
    }

    /// Rendered height of the draft textarea for the given column width:
    /// the intrinsic minimum, grown to fit the wrapped content exactly.
    pub fn draft_rows(&self, cols: usize) -> usize {
        textarea::rows_for(&self.draft_content, cols, DRAFT_MIN_ROWS)
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft_author(&self) -> &str {
        &self.draft_author
    }

    pub fn draft_content(&self) -> &str {
        &self.draft_content
    }
}
