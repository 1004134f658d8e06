//! # Habitz Architecture
//!
//! Habitz is a small habit tracker: a REST API over a single JSON document,
//! plus a static web page that talks to that API. The core is a library; the
//! HTTP server is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/, wired by main.rs)                       │
//! │  - axum routes, JSON bodies, status codes, static files     │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Supplies "today" from an injectable clock                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → mutate → save, one operation per module           │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - HabitStore trait (load / save the whole collection)      │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Model
//!
//! Every operation reads the whole document, changes it in memory and writes
//! the whole document back. Create, delete and a first completion of the day
//! write exactly once; list and a repeated completion never write. There is no
//! locking between requests, so concurrent writers race and the last one wins.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `MemoryStore`, where most of the logic lives.
//! 2. **Store**: `FileStore` tests on temp directories (`tests/file_store.rs`).
//! 3. **HTTP**: the router served on an ephemeral port (`tests/http_api.rs`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: list, create, delete, complete
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Habit` type
//! - [`http`]: Router, handlers, error mapping, static files
//! - [`config`]: Server configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod store;
