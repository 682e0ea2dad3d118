#[cfg(test)]
mod comment_posting_tests {
    use async_trait::async_trait;
    use mockall::mock;
    use projex::config::AppConfig;
    use projex::domain::comment::{Comment, CommentAuthor};
    use projex::services::{
        CancelHandle, CommentApi, CommentService, ProjexError, Result, SimulatedCommentApi,
        TaskDiscussion,
    };
    use std::sync::Arc;
    use std::time::Duration;

    mock! {
        pub Api {}

        #[async_trait]
        impl CommentApi for Api {
            async fn post_comment(
                &self,
                task_id: &str,
                author: CommentAuthor,
                content: String,
            ) -> Result<Comment>;
        }
    }

    fn configured_service() -> CommentService {
        let config = AppConfig::default();
        CommentService::new(
            Arc::new(SimulatedCommentApi::new(config.comment_delay())),
            config.comment_author(),
        )
    }

    /// Mirrors what the task screen does with the outcome of a post.
    async fn submit(service: &CommentService, discussion: &mut TaskDiscussion, handle: &CancelHandle) -> Option<ProjexError> {
        let content = discussion.pending_content()?;
        match service.post("t1", content, handle.token()).await {
            Ok(comment) => {
                discussion.apply_posted(comment);
                None
            }
            Err(err) => Some(err),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_appends_one_comment_after_delay() {
        let service = configured_service();
        let mut discussion = TaskDiscussion::default();
        discussion.set_draft("Looks good to me");

        let started = tokio::time::Instant::now();
        let err = submit(&service, &mut discussion, &CancelHandle::new()).await;

        assert!(err.is_none());
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(discussion.comments.len(), 1);
        assert_eq!(discussion.comments[0].content, "Looks good to me");
        assert_eq!(discussion.comments[0].author.id, "user_1");
        assert!(discussion.draft.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_post_gets_a_fresh_id() {
        let service = configured_service();
        let handle = CancelHandle::new();
        let mut discussion = TaskDiscussion::default();

        discussion.set_draft("one");
        submit(&service, &mut discussion, &handle).await;
        discussion.set_draft("two");
        submit(&service, &mut discussion, &handle).await;

        assert_eq!(discussion.comments.len(), 2);
        assert_ne!(discussion.comments[0].id, discussion.comments[1].id);
    }

    #[tokio::test]
    async fn test_blank_draft_never_reaches_the_api() {
        let mut api = MockApi::new();
        api.expect_post_comment().times(0);
        let service = CommentService::new(Arc::new(api), AppConfig::default().comment_author());

        let mut discussion = TaskDiscussion::default();
        discussion.set_draft("   ");
        assert!(submit(&service, &mut discussion, &CancelHandle::new()).await.is_none());
        assert!(discussion.comments.is_empty());
        assert_eq!(discussion.draft, "   ");
    }

    #[tokio::test]
    async fn test_failure_keeps_draft() {
        let mut api = MockApi::new();
        api.expect_post_comment().times(1).returning(|_, _, _| {
            Err(ProjexError::RequestFailed {
                message: "server unavailable".into(),
            })
        });
        let service = CommentService::new(Arc::new(api), AppConfig::default().comment_author());

        let mut discussion = TaskDiscussion::default();
        discussion.set_draft("Please review");
        let err = submit(&service, &mut discussion, &CancelHandle::new()).await;

        assert_eq!(
            err,
            Some(ProjexError::RequestFailed {
                message: "server unavailable".into()
            })
        );
        assert!(discussion.comments.is_empty());
        assert_eq!(discussion.draft, "Please review");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_post_appends_nothing() {
        let service = configured_service();
        let handle = CancelHandle::new();
        let mut discussion = TaskDiscussion::default();
        discussion.set_draft("never sent");

        let cancel = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            handle.cancel();
        };
        let (err, ()) = tokio::join!(submit(&service, &mut discussion, &handle), cancel);

        assert_eq!(err, Some(ProjexError::Cancelled));
        assert!(discussion.comments.is_empty());
        assert_eq!(discussion.draft, "never sent");
    }
}
