//! Test helpers for integration tests.

use std::sync::Arc;

use axum_test::TestServer;

use corkboard::config::BoardConfig;
use corkboard::web::create_router;
use corkboard::web::handlers::AppState;
use corkboard::{db, BoardService, NewPost};

/// Create a board service over a fresh in-memory database.
pub async fn create_test_service() -> BoardService {
    create_test_service_with_policy(BoardConfig::default()).await
}

/// Create a board service with a custom policy.
pub async fn create_test_service_with_policy(policy: BoardConfig) -> BoardService {
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    BoardService::new(pool, policy)
}

/// Create a test server plus a handle on its service for direct seeding
/// and inspection.
pub async fn create_test_server() -> (TestServer, BoardService) {
    let service = create_test_service().await;
    let app_state = Arc::new(AppState::new(service.clone()));

    let router = create_router(app_state, &[]);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, service)
}

/// A valid post candidate, numbered for ordering assertions.
pub fn sample_post(n: u32) -> NewPost {
    NewPost::new(
        format!("Title {n}"),
        format!("Content of post {n}"),
        format!("writer{n}"),
        format!("pw{n}"),
    )
}

/// Seed `count` posts through the service.
pub async fn seed_posts(service: &BoardService, count: u32) {
    for n in 1..=count {
        service
            .create(&sample_post(n))
            .await
            .expect("Failed to seed post");
    }
}
