use serde::{Deserialize, Serialize};
use validator::Validate;

/// Section a post is published under. Mirrors the content collection
/// schema; the variant name doubles as the URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Programming,
    DataScience,
    Design,
}

impl Category {
    /// Path segment used when building post URLs.
    pub fn as_slug(&self) -> &'static str {
        match self {
            Category::Programming => "programming",
            Category::DataScience => "data-science",
            Category::Design => "design",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// Front-matter of one post in the pre-built metadata index.
/// The index is generated at build time; entries that fail validation here
/// would have failed the collection schema there too.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostMeta {
    pub id: String,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Publication date string as authored in the front matter.
    pub date: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    pub category: Category,

    pub image: Option<String>,

    /// Collection slug, e.g. "programming/why-rust". The category folder
    /// comes first, the post folder second.
    pub slug: String,
}

impl PostMeta {
    /// Site-relative URL of the post page: the category prefix plus the
    /// second slug segment.
    pub fn url(&self) -> String {
        let leaf = self.slug.split('/').nth(1).unwrap_or(&self.slug);
        format!("/{}/{}", self.category.as_slug(), leaf)
    }
}
