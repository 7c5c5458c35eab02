//! Board service for corkboard.
//!
//! Orchestrates the five post operations: create, list, detail, update,
//! delete. Each mutation runs the same fixed sequence: field validation,
//! then the stored-record fetch, then the password check, then the write.
//! A failure at any step leaves the record set untouched, and malformed
//! input never reaches the database at all.

use sqlx::SqlitePool;
use tracing::{debug, info};

use super::pagination::PageWindow;
use super::post::{NewPost, Post, PostEdit};
use super::repository::PostRepository;
use crate::config::BoardConfig;
use crate::error::FieldErrors;
use crate::{CorkboardError, Result};

/// One page of posts plus the window that produced it.
#[derive(Debug, Clone)]
pub struct PostListing {
    /// Posts for the current page, newest first.
    pub posts: Vec<Post>,
    /// Row range and navigation bounds.
    pub page: PageWindow,
}

/// Service for board post lifecycle operations.
///
/// Holds its collaborators explicitly: the connection pool and the board
/// policy are injected at construction.
#[derive(Clone)]
pub struct BoardService {
    pool: SqlitePool,
    policy: BoardConfig,
}

impl BoardService {
    /// Create a new service over the given pool and policy.
    pub fn new(pool: SqlitePool, policy: BoardConfig) -> Self {
        Self { pool, policy }
    }

    /// The board policy this service applies.
    pub fn policy(&self) -> &BoardConfig {
        &self.policy
    }

    /// Create a new post.
    ///
    /// Validation failures are returned before any store interaction.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "title", &new_post.title, self.policy.max_title_len);
        check_text(
            &mut errors,
            "content",
            &new_post.content,
            self.policy.max_content_len,
        );
        check_text(
            &mut errors,
            "writer",
            &new_post.writer,
            self.policy.max_writer_len,
        );
        check_password(&mut errors, &new_post.password, self.policy.max_password_len);
        if !errors.is_empty() {
            return Err(CorkboardError::Validation(errors));
        }

        let repo = PostRepository::new(&self.pool);
        let post = repo.insert(new_post).await?;
        info!("Post {} created by {}", post.id, post.writer);

        Ok(post)
    }

    /// List one page of posts.
    ///
    /// An empty board returns an empty listing without issuing the ranged
    /// query. Repeated calls against an unchanged store return identical
    /// results.
    pub async fn list(&self, requested_page: i64) -> Result<PostListing> {
        let repo = PostRepository::new(&self.pool);
        let total_count = repo.count().await?;

        let page = PageWindow::compute(
            requested_page,
            total_count,
            self.policy.page_size,
            self.policy.block_size,
        );
        debug!(
            "Listing page {} of {} ({} posts)",
            page.current_page, page.total_pages, total_count
        );

        let posts = if page.is_empty() {
            Vec::new()
        } else {
            repo.list_range(page.start_row, page.end_row).await?
        };

        Ok(PostListing { posts, page })
    }

    /// Fetch one post and count the view.
    ///
    /// The increment and the fetch are two statements, not a transaction;
    /// a post deleted in between surfaces as NotFound.
    pub async fn detail(&self, id: i64) -> Result<Post> {
        let repo = PostRepository::new(&self.pool);

        if !repo.increment_read_count(id).await? {
            return Err(CorkboardError::NotFound("post".to_string()));
        }

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))
    }

    /// Update a post's mutable fields after password authorization.
    ///
    /// Writes title, content, and writer; the stored password and
    /// timestamps are not rewritable through this path.
    pub async fn update(&self, id: i64, edit: &PostEdit, password: &str) -> Result<Post> {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "title", &edit.title, self.policy.max_title_len);
        check_text(
            &mut errors,
            "content",
            &edit.content,
            self.policy.max_content_len,
        );
        check_text(&mut errors, "writer", &edit.writer, self.policy.max_writer_len);
        if password.is_empty() {
            errors.add("password", "required");
        }
        if !errors.is_empty() {
            return Err(CorkboardError::Validation(errors));
        }

        let repo = PostRepository::new(&self.pool);
        let stored = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))?;

        if stored.password != password {
            debug!("Rejected update of post {}: password mismatch", id);
            return Err(CorkboardError::InvalidPassword);
        }

        let updated = repo
            .update(id, edit)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))?;
        info!("Post {} updated", id);

        Ok(updated)
    }

    /// Delete a post after password authorization. Irreversible.
    pub async fn delete(&self, id: i64, password: &str) -> Result<()> {
        if password.is_empty() {
            let mut errors = FieldErrors::new();
            errors.add("password", "required");
            return Err(CorkboardError::Validation(errors));
        }

        let repo = PostRepository::new(&self.pool);
        let stored = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))?;

        if stored.password != password {
            debug!("Rejected delete of post {}: password mismatch", id);
            return Err(CorkboardError::InvalidPassword);
        }

        if !repo.delete(id).await? {
            return Err(CorkboardError::NotFound("post".to_string()));
        }
        info!("Post {} deleted", id);

        Ok(())
    }
}

/// Require a non-blank value within the length bound.
fn check_text(errors: &mut FieldErrors, field: &str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        errors.add(field, "required");
    } else if value.chars().count() > max_len {
        errors.add(field, "too_long");
    }
}

/// Passwords are matched byte-for-byte, so presence means non-empty
/// without trimming.
fn check_password(errors: &mut FieldErrors, password: &str, max_len: usize) {
    if password.is_empty() {
        errors.add("password", "required");
    } else if password.chars().count() > max_len {
        errors.add("password", "too_long");
    }
}
