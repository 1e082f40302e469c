//! Form State
//!
//! Immutable form structs with reducer-style field updates, and a declarative
//! validation rule list evaluated on submit. Rich-text content is not part of
//! the post form; it lives in its own signal next to the editor widget.

use chrono::Utc;

use crate::api::types::{Post, PostStatus, PostUpdate, SettingsPayload, SiteSettings};

/// Default page size applied when the settings form has no usable value.
pub const DEFAULT_POSTS_PER_PAGE: u32 = 10;

// ============ Validation ============

/// One validation rule: the predicate must hold for the form to be valid.
pub struct Rule<F> {
    pub field: &'static str,
    pub check: fn(&F) -> bool,
    pub message: &'static str,
}

/// Failed rules keyed by field, in rule order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    /// First error message for a field, if any.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluate every rule against the form and collect the failures.
pub fn validate<F>(form: &F, rules: &[Rule<F>]) -> FieldErrors {
    FieldErrors(
        rules
            .iter()
            .filter(|rule| !(rule.check)(form))
            .map(|rule| (rule.field, rule.message))
            .collect(),
    )
}

// ============ Post form ============

/// Editable fields of a post, excluding the rich-text content and the slug
/// (both managed outside the form).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub excerpt: String,
    pub status: PostStatus,
    pub featured_image: String,
    pub meta_title: String,
    pub meta_description: String,
}

/// A single field update for [`PostForm::apply`].
#[derive(Clone, Debug)]
pub enum PostField {
    Title(String),
    Excerpt(String),
    Status(PostStatus),
    FeaturedImage(String),
    MetaTitle(String),
    MetaDescription(String),
}

impl PostForm {
    pub const RULES: &'static [Rule<Self>] = &[Rule {
        field: "title",
        check: |form: &PostForm| !form.title.trim().is_empty(),
        message: "Title is required",
    }];

    /// Reducer-style update: consumes the form, returns the next state.
    pub fn apply(mut self, field: PostField) -> Self {
        match field {
            PostField::Title(v) => self.title = v,
            PostField::Excerpt(v) => self.excerpt = v,
            PostField::Status(v) => self.status = v,
            PostField::FeaturedImage(v) => self.featured_image = v,
            PostField::MetaTitle(v) => self.meta_title = v,
            PostField::MetaDescription(v) => self.meta_description = v,
        }
        self
    }

    /// Seed the form from a fetched row.
    pub fn from_row(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            status: post.status,
            featured_image: post.featured_image.clone().unwrap_or_default(),
            meta_title: post.meta_title.clone().unwrap_or_default(),
            meta_description: post.meta_description.clone().unwrap_or_default(),
        }
    }

    /// Package the form fields, the out-of-band content, and the current slug
    /// into one update payload.
    pub fn to_update(&self, content: &str, slug: &str) -> PostUpdate {
        PostUpdate {
            title: self.title.clone(),
            slug: slug.to_string(),
            excerpt: self.excerpt.clone(),
            content: content.to_string(),
            featured_image: self.featured_image.clone(),
            status: self.status,
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            updated_at: Utc::now(),
        }
    }
}

// ============ Settings form ============

/// Editable fields of the site settings. `posts_per_page` stays a string
/// while editing; it is parsed by validation and payload construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub site_title: String,
    pub site_description: String,
    pub site_logo: String,
    pub site_favicon: String,
    pub footer_text: String,
    pub posts_per_page: String,
    pub disqus_shortname: String,
    pub google_analytics_id: String,
}

/// A single field update for [`SettingsForm::apply`].
#[derive(Clone, Debug)]
pub enum SettingsField {
    SiteTitle(String),
    SiteDescription(String),
    SiteLogo(String),
    SiteFavicon(String),
    FooterText(String),
    PostsPerPage(String),
    DisqusShortname(String),
    GoogleAnalyticsId(String),
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            site_title: "My Site".to_string(),
            site_description: "A site powered by Inkwell".to_string(),
            site_logo: "/logo.svg".to_string(),
            site_favicon: "/favicon.svg".to_string(),
            footer_text: "© 2025 My Site. All rights reserved.".to_string(),
            posts_per_page: DEFAULT_POSTS_PER_PAGE.to_string(),
            disqus_shortname: String::new(),
            google_analytics_id: String::new(),
        }
    }
}

impl SettingsForm {
    pub const RULES: &'static [Rule<Self>] = &[
        Rule {
            field: "site_title",
            check: |form: &SettingsForm| !form.site_title.trim().is_empty(),
            message: "Site title is required",
        },
        Rule {
            field: "posts_per_page",
            check: |form: &SettingsForm| !form.posts_per_page.trim().is_empty(),
            message: "Posts per page is required",
        },
        Rule {
            field: "posts_per_page",
            check: |form: &SettingsForm| {
                let value = form.posts_per_page.trim();
                value.is_empty() || matches!(value.parse::<u32>(), Ok(1..=50))
            },
            message: "Must be a number between 1 and 50",
        },
    ];

    /// Reducer-style update: consumes the form, returns the next state.
    pub fn apply(mut self, field: SettingsField) -> Self {
        match field {
            SettingsField::SiteTitle(v) => self.site_title = v,
            SettingsField::SiteDescription(v) => self.site_description = v,
            SettingsField::SiteLogo(v) => self.site_logo = v,
            SettingsField::SiteFavicon(v) => self.site_favicon = v,
            SettingsField::FooterText(v) => self.footer_text = v,
            SettingsField::PostsPerPage(v) => self.posts_per_page = v,
            SettingsField::DisqusShortname(v) => self.disqus_shortname = v,
            SettingsField::GoogleAnalyticsId(v) => self.google_analytics_id = v,
        }
        self
    }

    /// Seed the form from the stored row, or from the fixed defaults if no
    /// row exists. Each field falls back independently, so a partially
    /// populated row mixes stored and default values per field.
    pub fn from_row(row: Option<&SiteSettings>) -> Self {
        let defaults = Self::default();
        let Some(row) = row else {
            return defaults;
        };

        let or_default = |stored: &Option<String>, default: String| {
            stored
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            site_title: if row.site_title.is_empty() {
                defaults.site_title
            } else {
                row.site_title.clone()
            },
            site_description: or_default(&row.site_description, defaults.site_description),
            site_logo: or_default(&row.site_logo, defaults.site_logo),
            site_favicon: or_default(&row.site_favicon, defaults.site_favicon),
            footer_text: or_default(&row.footer_text, defaults.footer_text),
            posts_per_page: if row.posts_per_page == 0 {
                defaults.posts_per_page
            } else {
                row.posts_per_page.to_string()
            },
            disqus_shortname: row.disqus_shortname.clone().unwrap_or_default(),
            google_analytics_id: row.google_analytics_id.clone().unwrap_or_default(),
        }
    }

    /// Build the insert/update body. Call after validation; an unparseable
    /// page size falls back to the default rather than panicking.
    pub fn to_payload(&self) -> SettingsPayload {
        SettingsPayload {
            site_title: self.site_title.clone(),
            site_description: self.site_description.clone(),
            site_logo: self.site_logo.clone(),
            site_favicon: self.site_favicon.clone(),
            footer_text: self.footer_text.clone(),
            posts_per_page: self
                .posts_per_page
                .trim()
                .parse()
                .unwrap_or(DEFAULT_POSTS_PER_PAGE),
            disqus_shortname: self.disqus_shortname.clone(),
            google_analytics_id: self.google_analytics_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_row() -> SiteSettings {
        SiteSettings {
            id: 7,
            site_title: "Field Notes".to_string(),
            site_description: None,
            site_logo: Some(String::new()),
            site_favicon: Some("/custom.ico".to_string()),
            footer_text: None,
            posts_per_page: 25,
            disqus_shortname: None,
            google_analytics_id: Some("G-ABC123".to_string()),
        }
    }

    #[test]
    fn post_title_is_required() {
        let form = PostForm::default();
        let errors = validate(&form, PostForm::RULES);
        assert_eq!(errors.get("title"), Some("Title is required"));

        let form = form.apply(PostField::Title("Hello".to_string()));
        assert!(validate(&form, PostForm::RULES).is_empty());
    }

    #[test]
    fn posts_per_page_bounds() {
        let valid = |value: &str| {
            let form = SettingsForm {
                posts_per_page: value.to_string(),
                ..SettingsForm::default()
            };
            validate(&form, SettingsForm::RULES).is_empty()
        };

        assert!(!valid("0"));
        assert!(!valid("51"));
        assert!(!valid(""));
        assert!(!valid("ten"));
        assert!(valid("1"));
        assert!(valid("50"));
    }

    #[test]
    fn posts_per_page_error_messages() {
        let empty = SettingsForm {
            posts_per_page: String::new(),
            ..SettingsForm::default()
        };
        let errors = validate(&empty, SettingsForm::RULES);
        assert_eq!(errors.get("posts_per_page"), Some("Posts per page is required"));

        let out_of_range = SettingsForm {
            posts_per_page: "51".to_string(),
            ..SettingsForm::default()
        };
        let errors = validate(&out_of_range, SettingsForm::RULES);
        assert_eq!(
            errors.get("posts_per_page"),
            Some("Must be a number between 1 and 50")
        );
    }

    #[test]
    fn settings_seed_mixes_stored_and_defaults() {
        let form = SettingsForm::from_row(Some(&settings_row()));
        let defaults = SettingsForm::default();

        // Stored values win where present.
        assert_eq!(form.site_title, "Field Notes");
        assert_eq!(form.site_favicon, "/custom.ico");
        assert_eq!(form.posts_per_page, "25");
        assert_eq!(form.google_analytics_id, "G-ABC123");

        // Missing and empty fields fall back independently.
        assert_eq!(form.site_description, defaults.site_description);
        assert_eq!(form.site_logo, defaults.site_logo);
        assert_eq!(form.footer_text, defaults.footer_text);
        assert_eq!(form.disqus_shortname, "");
    }

    #[test]
    fn settings_seed_without_row_uses_defaults() {
        assert_eq!(SettingsForm::from_row(None), SettingsForm::default());
    }

    #[test]
    fn repeated_saves_build_identical_payloads() {
        let form = PostForm::default()
            .apply(PostField::Title("Hello, World!".to_string()))
            .apply(PostField::Status(PostStatus::Published));

        let first = form.to_update("<p>body</p>", "hello-world");
        let second = form.to_update("<p>body</p>", "hello-world");

        // Identical except for the save timestamp; no duplicate prevention
        // happens at the payload level.
        assert_eq!(first.title, second.title);
        assert_eq!(first.slug, second.slug);
        assert_eq!(first.content, second.content);
        assert_eq!(first.status, second.status);
        assert_eq!(first.excerpt, second.excerpt);
        assert_eq!(first.meta_title, second.meta_title);
        assert_eq!(first.meta_description, second.meta_description);
    }

    #[test]
    fn settings_payload_parses_page_size() {
        let form = SettingsForm {
            posts_per_page: " 25 ".to_string(),
            ..SettingsForm::default()
        };
        assert_eq!(form.to_payload().posts_per_page, 25);
    }
}
