// src/search.rs

use serde::{Deserialize, Serialize};

use crate::models::post::{Category, PostMeta};

/// Queries shorter than this return nothing; one-character queries match
/// too much to be useful.
const MIN_QUERY_LEN: usize = 2;

/// One entry in the search dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: Category,
}

/// Pre-built post metadata, searched client side.
///
/// The index is produced at site build time from the content collection;
/// at runtime it is static, so searching is a pure filter over it.
pub struct PostIndex {
    posts: Vec<PostMeta>,
}

impl PostIndex {
    pub fn new(posts: Vec<PostMeta>) -> Self {
        Self { posts }
    }

    /// Load the index from its build-time JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn posts(&self) -> &[PostMeta] {
        &self.posts
    }

    /// Case-insensitive substring search over title and description,
    /// preserving index order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.posts
            .iter()
            .filter(|post| {
                let haystack = format!("{} {}", post.title, post.description).to_lowercase();
                haystack.contains(&needle)
            })
            .map(|post| SearchHit {
                title: post.title.clone(),
                description: post.description.clone(),
                url: post.url(),
                category: post.category,
            })
            .collect()
    }
}
