use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

use crate::domain::comment::{Comment, CommentAuthor};
use crate::services::error_handling::{LogHelper, ProjexError, Result};

/// Request seam for posting a comment on a task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentApi: Send + Sync {
    async fn post_comment(
        &self,
        task_id: &str,
        author: CommentAuthor,
        content: String,
    ) -> Result<Comment>;
}

/// Stand-in backend: waits a fixed delay, then echoes the comment back with
/// a freshly generated id.
#[derive(Debug, Clone)]
pub struct SimulatedCommentApi {
    delay: Duration,
}

impl SimulatedCommentApi {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl CommentApi for SimulatedCommentApi {
    async fn post_comment(
        &self,
        task_id: &str,
        author: CommentAuthor,
        content: String,
    ) -> Result<Comment> {
        debug!(task_id = %task_id, delay_ms = self.delay.as_millis() as u64, "Simulating comment request");
        tokio::time::sleep(self.delay).await;
        Ok(Comment::new(author, content))
    }
}

/// Cancels every `CancelToken` created from it.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancelled. Never resolves if the handle is dropped first.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

#[derive(Clone)]
pub struct CommentService {
    api: Arc<dyn CommentApi>,
    author: CommentAuthor,
}

impl CommentService {
    pub fn new(api: Arc<dyn CommentApi>, author: CommentAuthor) -> Self {
        Self { api, author }
    }

    pub fn author(&self) -> &CommentAuthor {
        &self.author
    }

    /// Posts `content` as the configured author. Resolves to
    /// `ProjexError::Cancelled` if `token` fires first.
    #[instrument(skip(self, content, token))]
    pub async fn post(&self, task_id: &str, content: String, mut token: CancelToken) -> Result<Comment> {
        if token.is_cancelled() {
            return Err(ProjexError::Cancelled);
        }

        let result = tokio::select! {
            res = self.api.post_comment(task_id, self.author.clone(), content) => res,
            _ = token.cancelled() => Err(ProjexError::Cancelled),
        };

        match &result {
            Ok(comment) => info!(task_id = %task_id, comment_id = %comment.id, "Comment posted"),
            Err(err) => LogHelper::log_request_failure("post_comment", err),
        }
        result
    }
}

/// Comment thread and draft of the task detail screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDiscussion {
    pub comments: Vec<Comment>,
    pub draft: String,
}

impl TaskDiscussion {
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Text to send, or `None` when the draft is blank.
    pub fn pending_content(&self) -> Option<String> {
        if self.draft.trim().is_empty() {
            None
        } else {
            Some(self.draft.clone())
        }
    }

    /// Appends a posted comment and clears the draft. Failed posts never
    /// reach here, so the draft survives them.
    pub fn apply_posted(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn author() -> CommentAuthor {
        CommentAuthor {
            id: "user_1".into(),
            name: "User".into(),
            image: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_api_waits_for_delay() {
        let api = SimulatedCommentApi::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        let comment = api.post_comment("t1", author(), "hi".into()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(comment.content, "hi");
        assert_eq!(comment.author.id, "user_1");
    }

    #[tokio::test]
    async fn test_post_uses_configured_author() {
        let mut api = MockCommentApi::new();
        api.expect_post_comment()
            .with(eq("t1"), eq(author()), eq("Ship it".to_string()))
            .times(1)
            .returning(|_, author, content| Ok(Comment::new(author, content)));

        let service = CommentService::new(Arc::new(api), author());
        let comment = service
            .post("t1", "Ship it".into(), CancelHandle::new().token())
            .await
            .unwrap();
        assert_eq!(comment.content, "Ship it");
    }

    #[tokio::test]
    async fn test_post_propagates_failure() {
        let mut api = MockCommentApi::new();
        api.expect_post_comment().returning(|_, _, _| {
            Err(ProjexError::RequestFailed {
                message: "network down".into(),
            })
        });

        let service = CommentService::new(Arc::new(api), author());
        let err = service
            .post("t1", "x".into(), CancelHandle::new().token())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed: network down");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_delay() {
        let service = CommentService::new(
            Arc::new(SimulatedCommentApi::new(Duration::from_secs(5))),
            author(),
        );
        let handle = CancelHandle::new();
        let token = handle.token();

        let post = tokio::spawn(async move { service.post("t1", "x".into(), token).await });
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();

        let result = post.await.unwrap();
        assert_eq!(result, Err(ProjexError::Cancelled));
    }

    #[tokio::test]
    async fn test_already_cancelled_token_skips_request() {
        let mut api = MockCommentApi::new();
        api.expect_post_comment().times(0);

        let service = CommentService::new(Arc::new(api), author());
        let handle = CancelHandle::new();
        handle.cancel();
        let result = service.post("t1", "x".into(), handle.token()).await;
        assert_eq!(result, Err(ProjexError::Cancelled));
    }

    #[test]
    fn test_blank_draft_has_no_pending_content() {
        let mut discussion = TaskDiscussion::default();
        assert_eq!(discussion.pending_content(), None);
        discussion.set_draft("  \n\t ");
        assert_eq!(discussion.pending_content(), None);
        discussion.set_draft(" hello ");
        assert_eq!(discussion.pending_content().as_deref(), Some(" hello "));
    }

    #[test]
    fn test_apply_posted_clears_draft() {
        let mut discussion = TaskDiscussion::default();
        discussion.set_draft("hello");
        discussion.apply_posted(Comment::new(author(), "hello"));
        assert_eq!(discussion.comments.len(), 1);
        assert!(discussion.draft.is_empty());
    }
}
