//! Board handlers for the web API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::board::{NewPost, PostEdit};
use crate::web::dto::{
    ApiResponse, CreatePostRequest, DeletePostRequest, ListPostsQuery, PaginatedResponse,
    PostResponse, UpdatePostRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/posts - List one page of posts, newest first.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<PaginatedResponse<PostResponse>>, ApiError> {
    let listing = state.service.list(query.page).await?;

    let posts: Vec<PostResponse> = listing.posts.into_iter().map(PostResponse::from).collect();

    Ok(Json(PaginatedResponse::new(posts, &listing.page)))
}

/// POST /api/posts - Create a post.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let candidate = NewPost::new(request.title, request.content, request.writer, request.password);
    let post = state.service.create(&candidate).await?;

    Ok(Json(ApiResponse::new(post.into())))
}

/// GET /api/posts/:id - Fetch one post and count the view.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let post = state.service.detail(id).await?;

    Ok(Json(ApiResponse::new(post.into())))
}

/// PUT /api/posts/:id - Update a post, gated on its password.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let edit = PostEdit::new(request.title, request.content, request.writer);
    let post = state.service.update(id, &edit, &request.password).await?;

    Ok(Json(ApiResponse::new(post.into())))
}

/// DELETE /api/posts/:id - Delete a post, gated on its password.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<DeletePostRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    state.service.delete(id, &request.password).await?;

    Ok(Json(ApiResponse::new(serde_json::json!({}))))
}
