//! Row and Payload Types
//!
//! Serde types mirroring the remote tables. The authoritative schema lives in
//! the hosted backend; these are the columns the dashboard consumes.

use chrono::{DateTime, Utc};

/// Publication state of a post or page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    /// Wire value, as stored in the status column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }

    /// Human-readable label for badges and selects.
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
        }
    }

    /// Parse a form value, falling back to draft for anything unknown.
    pub fn parse(value: &str) -> Self {
        match value {
            "published" => PostStatus::Published,
            _ => PostStatus::Draft,
        }
    }
}

/// A row from the posts table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A row from the pages table. Same shape as [`Post`] minus the rich-text
/// content; pages are read-only in the dashboard.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The singleton row from the settings table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteSettings {
    pub id: i64,
    pub site_title: String,
    #[serde(default)]
    pub site_description: Option<String>,
    #[serde(default)]
    pub site_logo: Option<String>,
    #[serde(default)]
    pub site_favicon: Option<String>,
    #[serde(default)]
    pub footer_text: Option<String>,
    pub posts_per_page: u32,
    #[serde(default)]
    pub disqus_shortname: Option<String>,
    #[serde(default)]
    pub google_analytics_id: Option<String>,
}

/// Full-record update body for a post.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PostUpdate {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub status: PostStatus,
    pub meta_title: String,
    pub meta_description: String,
    pub updated_at: DateTime<Utc>,
}

/// Insert/update body for the settings row.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SettingsPayload {
    pub site_title: String,
    pub site_description: String,
    pub site_logo: String,
    pub site_favicon: String,
    pub footer_text: String,
    pub posts_per_page: u32,
    pub disqus_shortname: String,
    pub google_analytics_id: String,
}
