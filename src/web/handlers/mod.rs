//! API handlers for the web layer.

pub mod board;

pub use board::*;

use crate::board::BoardService;

/// Shared state for API handlers.
pub struct AppState {
    /// Board lifecycle service.
    pub service: BoardService,
}

impl AppState {
    /// Create the handler state around a board service.
    pub fn new(service: BoardService) -> Self {
        Self { service }
    }
}
