//! HTTP client for the posts collection.
//!
//! One request per operation, plain JSON over HTTP verbs. A non-success
//! status surfaces as [`postdeck_types::ApiError::Status`]; an exchange
//! that never completes surfaces as [`postdeck_types::ApiError::Transport`].

pub mod client;

pub use client::PostsClient;
