//! corkboard - a small password-gated discussion board.
//!
//! Posts carry their own mutation credential: anyone can read and write,
//! but updating or deleting a post requires the password it was created
//! with. Listings are paginated with block-style navigation.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{BoardService, NewPost, PageWindow, Post, PostEdit, PostListing, PostRepository};
pub use config::Config;
pub use error::{CorkboardError, FieldErrors, Result};
