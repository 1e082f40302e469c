//! Alert Component
//!
//! Inline error and success boxes rendered above forms.

use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
    Success,
}

/// Inline alert box with a title and message
#[component]
pub fn Alert(
    variant: AlertVariant,
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let (title, box_class, title_class, text_class) = match variant {
        AlertVariant::Error => (
            "Error",
            "mb-4 rounded-md bg-red-50 p-4",
            "text-sm font-medium text-red-800",
            "mt-2 text-sm text-red-700",
        ),
        AlertVariant::Success => (
            "Success",
            "mb-4 rounded-md bg-green-50 p-4",
            "text-sm font-medium text-green-800",
            "mt-2 text-sm text-green-700",
        ),
    };

    view! {
        <div class=box_class>
            <h3 class=title_class>{title}</h3>
            <div class=text_class>
                <p>{message}</p>
            </div>
        </div>
    }
}
