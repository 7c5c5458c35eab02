//! Post repository for corkboard.
//!
//! CRUD operations for posts in the database. Listing order is newest
//! first (id descending), stable for a given snapshot.

use sqlx::SqlitePool;

use super::post::{NewPost, Post, PostEdit};
use crate::{CorkboardError, Result};

/// Repository for post CRUD operations.
pub struct PostRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Count all posts.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// List the posts within a 1-based inclusive row range, newest first.
    ///
    /// An inverted range yields an empty list without touching the
    /// database.
    pub async fn list_range(&self, start_row: i64, end_row: i64) -> Result<Vec<Post>> {
        if end_row < start_row {
            return Ok(Vec::new());
        }

        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, writer, password, read_count, created_at
             FROM posts ORDER BY id DESC LIMIT ? OFFSET ?",
        )
        .bind(end_row - start_row + 1)
        .bind(start_row - 1)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, writer, password, read_count, created_at
             FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// Insert a new post.
    ///
    /// Returns the stored post with its assigned ID and creation
    /// timestamp.
    pub async fn insert(&self, new_post: &NewPost) -> Result<Post> {
        let result = sqlx::query(
            "INSERT INTO posts (title, content, writer, password) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(&new_post.writer)
        .bind(&new_post.password)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))
    }

    /// Overwrite a post's mutable fields.
    ///
    /// Writes title, content, and writer; id, password, read_count, and
    /// created_at are untouched. Returns the updated post, or None if the
    /// row is gone.
    pub async fn update(&self, id: i64, edit: &PostEdit) -> Result<Option<Post>> {
        let result = sqlx::query("UPDATE posts SET title = ?, content = ?, writer = ? WHERE id = ?")
            .bind(&edit.title)
            .bind(&edit.content)
            .bind(&edit.writer)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a post by ID.
    ///
    /// Returns true if a post was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Increment a post's read count.
    ///
    /// Returns true if the post exists.
    pub async fn increment_read_count(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE posts SET read_count = read_count + 1 WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
