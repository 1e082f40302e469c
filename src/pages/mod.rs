//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod edit_post;
pub mod posts;
pub mod settings;

pub use dashboard::Dashboard;
pub use edit_post::EditPost;
pub use posts::Posts;
pub use settings::Settings;
