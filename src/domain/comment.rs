use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub author: CommentAuthor,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentAuthor {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

impl Comment {
    pub fn new(author: CommentAuthor, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_by(&self, user_id: &str) -> bool {
        self.author.id == user_id
    }

    /// Timestamp as shown under each comment, e.g. `04 Mar 2025, 14:05`.
    pub fn display_time(&self) -> String {
        self.created_at.format("%d %b %Y, %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn author() -> CommentAuthor {
        CommentAuthor {
            id: "user_1".to_string(),
            name: "User".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_new_comment() {
        let comment = Comment::new(author(), "Looks good!");
        assert_eq!(comment.content, "Looks good!");
        assert!(comment.is_by("user_1"));
        assert!(!comment.is_by("user_2"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Comment::new(author(), "one");
        let b = Comment::new(author(), "one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display_time() {
        let mut comment = Comment::new(author(), "x");
        comment.created_at = Utc.with_ymd_and_hms(2025, 3, 4, 14, 5, 0).unwrap();
        assert_eq!(comment.display_time(), "04 Mar 2025, 14:05");
    }
}
