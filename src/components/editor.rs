//! Content Editor Component
//!
//! Markdown-flavored editor widget for the post body. The content signal is
//! owned by the page, not by the generic form state, because this widget
//! produces it independently of the plain inputs.

use leptos::html;
use leptos::*;
use wasm_bindgen::JsCast;

/// Markdown editor with a small formatting toolbar
#[component]
pub fn ContentEditor(value: RwSignal<String>) -> impl IntoView {
    let input_ref = create_node_ref::<html::Textarea>();

    let apply = move |prefix: &'static str, suffix: &'static str| {
        if let Some(el) = input_ref.get() {
            let start = el.selection_start().ok().flatten().unwrap_or(0) as usize;
            let end = el.selection_end().ok().flatten().unwrap_or(0) as usize;
            value.update(|v| *v = wrap_range(v, start, end, prefix, suffix));
        }
    };

    view! {
        <div class="border border-gray-600 rounded-lg overflow-hidden">
            // Toolbar
            <div class="flex items-center space-x-1 bg-gray-700 px-2 py-1 border-b border-gray-600">
                <ToolbarButton label="B" title="Bold" on_click=move |_| apply("**", "**") />
                <ToolbarButton label="I" title="Italic" on_click=move |_| apply("_", "_") />
                <ToolbarButton label="H2" title="Heading" on_click=move |_| apply("\n## ", "") />
                <ToolbarButton label="Link" title="Link" on_click=move |_| apply("[", "](url)") />
            </div>

            <textarea
                node_ref=input_ref
                rows=12
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(target) = ev.target() {
                        if let Ok(el) = target.dyn_into::<web_sys::HtmlTextAreaElement>() {
                            value.set(el.value());
                        }
                    }
                }
                class="w-full bg-gray-800 px-4 py-3 text-sm font-mono focus:outline-none"
            />
        </div>
    }
}

#[component]
fn ToolbarButton(
    label: &'static str,
    title: &'static str,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            title=title
            on:click=on_click
            class="px-2 py-1 rounded text-sm text-gray-300 hover:text-white hover:bg-gray-600 transition-colors"
        >
            {label}
        </button>
    }
}

/// Wrap the selected range with a prefix and suffix. Offsets arrive from the
/// textarea as UTF-16 code units, clamped here and possibly reversed.
fn wrap_range(text: &str, start: usize, end: usize, prefix: &str, suffix: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let len = units.len();
    let (start, end) = (start.min(len), end.min(len));
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let mut out = String::with_capacity(text.len() + prefix.len() + suffix.len());
    out.push_str(&String::from_utf16_lossy(&units[..start]));
    out.push_str(prefix);
    out.push_str(&String::from_utf16_lossy(&units[start..end]));
    out.push_str(suffix);
    out.push_str(&String::from_utf16_lossy(&units[end..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_selection() {
        assert_eq!(wrap_range("hello world", 0, 5, "**", "**"), "**hello** world");
        assert_eq!(wrap_range("hello", 5, 5, "[", "](url)"), "hello[](url)");
    }

    #[test]
    fn clamps_and_reorders_offsets() {
        assert_eq!(wrap_range("abc", 99, 1, "_", "_"), "a_bc_");
        assert_eq!(wrap_range("", 3, 7, "**", "**"), "****");
    }

    #[test]
    fn offsets_count_utf16_units() {
        // The smiley takes two code units, so "b" starts at offset 3.
        assert_eq!(wrap_range("a🙂b", 3, 4, "**", "**"), "a🙂**b**");
        assert_eq!(wrap_range("🙂🙂", 2, 4, "_", "_"), "🙂_🙂_");
    }
}
