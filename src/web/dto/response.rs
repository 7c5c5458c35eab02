//! Response DTOs for the web API.

use serde::Serialize;

use crate::board::{PageWindow, Post};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Response data.
    pub data: Vec<T>,
    /// Page navigation metadata.
    pub page: PageInfo,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Create a new paginated response from a computed page window.
    pub fn new(data: Vec<T>, window: &PageWindow) -> Self {
        Self {
            data,
            page: PageInfo::from(window),
        }
    }
}

/// Page navigation metadata.
#[derive(Debug, Serialize)]
pub struct PageInfo {
    /// Current page number.
    pub current_page: i64,
    /// Posts per page.
    pub page_size: i64,
    /// Total number of posts.
    pub total_count: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// First page link of the navigation block.
    pub block_start: i64,
    /// Last page link of the navigation block.
    pub block_end: i64,
    /// Page before the block, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<i64>,
    /// Page after the block, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<i64>,
}

impl From<&PageWindow> for PageInfo {
    fn from(window: &PageWindow) -> Self {
        Self {
            current_page: window.current_page,
            page_size: window.page_size,
            total_count: window.total_count,
            total_pages: window.total_pages,
            block_start: window.block_start,
            block_end: window.block_end,
            prev_page: window.prev_page(),
            next_page: window.next_page(),
        }
    }
}

/// Post in responses. Carries everything except the password.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Display name of the author.
    pub writer: String,
    /// Number of detail views.
    pub read_count: i64,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            writer: post.writer,
            read_count: post.read_count,
            created_at: post.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_response_has_no_password() {
        let post = Post {
            id: 1,
            title: "Title".to_string(),
            content: "Body".to_string(),
            writer: "alice".to_string(),
            password: "secret".to_string(),
            read_count: 3,
            created_at: "2026-01-01 00:00:00".to_string(),
        };

        let json = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["writer"], "alice");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_page_info_from_window() {
        let window = PageWindow::compute(11, 250, 10, 10);
        let info = PageInfo::from(&window);
        assert_eq!(info.current_page, 11);
        assert_eq!(info.total_pages, 25);
        assert_eq!(info.block_start, 11);
        assert_eq!(info.block_end, 20);
        assert_eq!(info.prev_page, Some(10));
        assert_eq!(info.next_page, Some(21));
    }

    #[test]
    fn test_page_info_omits_absent_links() {
        let window = PageWindow::compute(1, 5, 10, 10);
        let json = serde_json::to_value(PageInfo::from(&window)).unwrap();
        assert!(json.get("prev_page").is_none());
        assert!(json.get("next_page").is_none());
    }
}
