//! Post model for corkboard.

/// Post entity representing one board record.
///
/// The password is the per-post mutation credential. It is carried here so
/// the service can compare it against submitted values, but it must never
/// reach a response body; the web DTO layer strips it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID, assigned on insert and never reused.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Display name of the author.
    pub writer: String,
    /// Mutation credential, compared by exact value equality.
    pub password: String,
    /// Number of detail views.
    pub read_count: i64,
    /// Creation timestamp, set by the database.
    pub created_at: String,
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Display name of the author.
    pub writer: String,
    /// Mutation credential for later update/delete.
    pub password: String,
}

impl NewPost {
    /// Create a new post candidate with required fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            writer: writer.into(),
            password: password.into(),
        }
    }
}

/// Replacement values for a post's mutable fields.
///
/// Deliberately has no password field: the authorizing password travels as
/// a separate parameter, so an update can never overwrite the stored
/// credential. Every field here is written as-is on a successful update.
#[derive(Debug, Clone)]
pub struct PostEdit {
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
    /// New writer name.
    pub writer: String,
}

impl PostEdit {
    /// Create an edit with the full set of mutable fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            writer: writer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post() {
        let post = NewPost::new("Title", "Body", "alice", "secret");
        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "Body");
        assert_eq!(post.writer, "alice");
        assert_eq!(post.password, "secret");
    }

    #[test]
    fn test_post_edit() {
        let edit = PostEdit::new("New Title", "New Body", "bob");
        assert_eq!(edit.title, "New Title");
        assert_eq!(edit.content, "New Body");
        assert_eq!(edit.writer, "bob");
    }
}
