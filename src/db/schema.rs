//! Database schema and migrations for corkboard.
//!
//! Migrations are applied sequentially when the pool is opened; the
//! `schema_version` table records which have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - posts table
    r#"
-- Posts table for the discussion board
CREATE TABLE posts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    writer      TEXT NOT NULL,
    password    TEXT NOT NULL,           -- per-post mutation credential
    read_count  INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_posts_created_at ON posts(created_at);
"#,
];
