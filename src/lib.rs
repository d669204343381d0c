// src/lib.rs

pub mod config;
pub mod error;
pub mod models;
pub mod remote;
pub mod search;
pub mod utils;
pub mod widget;

// Re-export specific items for convenience if needed
pub use remote::{CommentService, HttpCommentService};
pub use widget::{CommentWidget, Phase};
