//! Slug State Machine
//!
//! URL slugs are either derived mechanically from the title (auto mode) or
//! edited directly (manual mode). A direct edit always switches to manual;
//! only the explicit toggle switches back.

/// How the slug field is currently driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlugMode {
    /// Recomputed from the title on every title change.
    Auto,
    /// Typed value taken verbatim.
    Manual,
}

/// Current slug value plus the mode driving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugState {
    pub value: String,
    pub mode: SlugMode,
}

impl Default for SlugState {
    fn default() -> Self {
        Self {
            value: String::new(),
            mode: SlugMode::Manual,
        }
    }
}

impl SlugState {
    /// Seed from a stored row. Loaded slugs start in manual mode so a saved
    /// slug is never rewritten behind the user's back.
    pub fn from_row(slug: &str) -> Self {
        Self {
            value: slug.to_string(),
            mode: SlugMode::Manual,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.mode == SlugMode::Auto
    }

    /// Title field changed; in auto mode the slug follows it.
    pub fn title_changed(&mut self, title: &str) {
        if self.mode == SlugMode::Auto && !title.is_empty() {
            self.value = slugify(title);
        }
    }

    /// Direct edit of the slug field: manual mode, typed value verbatim.
    pub fn edited(&mut self, typed: &str) {
        self.mode = SlugMode::Manual;
        self.value = typed.to_string();
    }

    /// Explicit toggle control. Entering auto mode recomputes from the
    /// current title immediately.
    pub fn toggle(&mut self, title: &str) {
        self.mode = match self.mode {
            SlugMode::Auto => SlugMode::Manual,
            SlugMode::Manual => SlugMode::Auto,
        };
        self.title_changed(title);
    }
}

/// Derive a URL-safe slug: ASCII-lowercased, alphanumeric runs kept,
/// everything else collapsed to single `-` separators.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Leading and trailing  "), "leading-and-trailing");
        assert_eq!(slugify("Already-A-Slug"), "already-a-slug");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("a -- b // c"), "a-b-c");
        assert_eq!(slugify("100% Rust!"), "100-rust");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn auto_mode_follows_title() {
        let mut slug = SlugState::from_row("old-slug");
        slug.toggle("Hello, World!");
        assert!(slug.is_auto());
        assert_eq!(slug.value, "hello-world");

        slug.title_changed("Another Title");
        assert_eq!(slug.value, "another-title");
    }

    #[test]
    fn direct_edit_pins_the_slug() {
        let mut slug = SlugState::default();
        slug.toggle("First Title");
        assert_eq!(slug.value, "first-title");

        slug.edited("custom-slug");
        assert!(!slug.is_auto());
        assert_eq!(slug.value, "custom-slug");

        // Later title changes must not touch a manually edited slug.
        slug.title_changed("Completely Different");
        assert_eq!(slug.value, "custom-slug");
    }

    #[test]
    fn toggle_off_keeps_current_value() {
        let mut slug = SlugState::default();
        slug.toggle("Some Post");
        slug.toggle("Some Post");
        assert!(!slug.is_auto());
        assert_eq!(slug.value, "some-post");
    }

    #[test]
    fn loaded_row_starts_manual() {
        let slug = SlugState::from_row("stored-slug");
        assert!(!slug.is_auto());
        assert_eq!(slug.value, "stored-slug");
    }
}
