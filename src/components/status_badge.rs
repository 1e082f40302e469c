//! Status Badge Component
//!
//! Published/draft pill used in listings.

use leptos::*;

use crate::api::types::PostStatus;

/// Publication status pill
#[component]
pub fn StatusBadge(status: PostStatus) -> impl IntoView {
    let color = match status {
        PostStatus::Published => "bg-green-100 text-green-800",
        PostStatus::Draft => "bg-yellow-100 text-yellow-800",
    };

    view! {
        <span class=format!(
            "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
            color
        )>
            {status.label()}
        </span>
    }
}
