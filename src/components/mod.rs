//! UI Components
//!
//! Reusable Leptos components for the admin dashboard.

pub mod alert;
pub mod editor;
pub mod loading;
pub mod nav;
pub mod status_badge;
pub mod toast;

pub use alert::{Alert, AlertVariant};
pub use editor::ContentEditor;
pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use status_badge::StatusBadge;
pub use toast::Toast;
