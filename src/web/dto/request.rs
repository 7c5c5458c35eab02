//! Request DTOs for the web API.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use super::validation::not_empty_trimmed;

/// Query parameters for the post listing.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    /// Requested page number. Missing or unparsable values fall back to
    /// page 1; out-of-range values are clamped by the page window.
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: i64,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self { page: default_page() }
    }
}

fn default_page() -> i64 {
    1
}

fn lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(default_page))
}

/// Post creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post title.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub title: String,
    /// Post body.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub content: String,
    /// Display name of the author.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub writer: String,
    /// Credential for later update/delete.
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub password: String,
}

/// Post update request: replacement field values plus the credential.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    /// New title.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub title: String,
    /// New body.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub content: String,
    /// New writer name.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub writer: String,
    /// Credential; checked against the stored post, never persisted.
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub password: String,
}

/// Post deletion request.
#[derive(Debug, Deserialize, Validate)]
pub struct DeletePostRequest {
    /// Credential; checked against the stored post.
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_query(s: &str) -> ListPostsQuery {
        serde_urlencoded::from_str(s).unwrap()
    }

    #[test]
    fn test_list_query_parses_page() {
        assert_eq!(parse_query("page=3").page, 3);
    }

    #[test]
    fn test_list_query_defaults_missing_page() {
        assert_eq!(parse_query("").page, 1);
    }

    #[test]
    fn test_list_query_defaults_garbage_page() {
        assert_eq!(parse_query("page=abc").page, 1);
        assert_eq!(parse_query("page=").page, 1);
    }

    #[test]
    fn test_list_query_keeps_negative_for_clamping() {
        // Negative numbers parse fine; the page window clamps them to 1
        assert_eq!(parse_query("page=-2").page, -2);
    }

    #[test]
    fn test_create_request_validates() {
        let request = CreatePostRequest {
            title: "Hello".to_string(),
            content: "Body".to_string(),
            writer: "alice".to_string(),
            password: "pw".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_title() {
        let request = CreatePostRequest {
            title: "   ".to_string(),
            content: "Body".to_string(),
            writer: "alice".to_string(),
            password: "pw".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_delete_request_rejects_empty_password() {
        let request = DeletePostRequest {
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
