//! Edit Post Page
//!
//! Loads one post by id, seeds the form, and submits a full-record update.
//! The rich-text content and the slug live outside the generic form state:
//! content is produced by the editor widget, the slug by its own auto/manual
//! state machine.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::client::ApiError;
use crate::api::types::{Post, PostStatus};
use crate::components::{Alert, AlertVariant, ContentEditor, Loading};
use crate::state::forms::{validate, FieldErrors, PostField, PostForm};
use crate::state::slug::SlugState;

fn parse_post_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::new(format!("Invalid post id: {}", raw)))
}

async fn load_post(id: &str) -> Result<Post, ApiError> {
    api::post_by_id(parse_post_id(id)?).await
}

/// Page state after the fetch. A missing row, a failed query, and an
/// unparseable id all collapse into the same terminal not-found state.
fn loaded_post(result: Result<Post, ApiError>) -> Option<Post> {
    result.ok()
}

/// Edit post page component
#[component]
pub fn EditPost() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let post = create_rw_signal(None::<Post>);
    let form = create_rw_signal(PostForm::default());
    let content = create_rw_signal(String::new());
    let slug = create_rw_signal(SlugState::default());
    let errors = create_rw_signal(FieldErrors::default());
    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Fetch the post on mount (and when the route param changes). A missing
    // row and a failed query both leave `post` empty, which renders the
    // terminal not-found state.
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned()).unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);

            let result = load_post(&id).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error fetching post: {}", e).into());
            }

            if let Some(row) = loaded_post(result) {
                form.set(PostForm::from_row(&row));
                content.set(row.content.clone().unwrap_or_default());
                slug.set(SlugState::from_row(&row.slug));
                post.set(Some(row));
            }

            set_loading.set(false);
        });
    });

    let navigate_for_save = navigate.clone();
    let on_save = move |_| {
        // In-flight guard: a second submit is ignored, never queued.
        if saving.get() {
            return;
        }

        let checked = validate(&form.get(), PostForm::RULES);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FieldErrors::default());

        let Some(row) = post.get() else {
            return;
        };
        let payload = form.get().to_update(&content.get(), &slug.get().value);

        set_saving.set(true);
        set_error.set(None);

        let navigate = navigate_for_save.clone();
        spawn_local(async move {
            match api::update_post(row.id, &payload).await {
                Ok(()) => {
                    navigate("/posts", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error updating post: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };
    let on_save_bottom = on_save.clone();

    let navigate_for_cancel = navigate.clone();
    let on_cancel = move |_| navigate_for_cancel("/posts", Default::default());
    let on_cancel_bottom = on_cancel.clone();
    let navigate_for_missing = navigate;

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }

            if post.get().is_none() {
                let navigate = navigate_for_missing.clone();
                return view! {
                    <PostMissing on_back=move |_| navigate("/posts", Default::default()) />
                }.into_view();
            }

            let on_save = on_save.clone();
            let on_save_bottom = on_save_bottom.clone();
            let on_cancel = on_cancel.clone();
            let on_cancel_bottom = on_cancel_bottom.clone();

            view! {
                <div class="space-y-8">
                    // Header with actions
                    <div class="flex items-center justify-between">
                        <h1 class="text-3xl font-bold">"Edit Post"</h1>
                        <div class="flex space-x-3">
                            <button
                                type="button"
                                on:click=on_cancel
                                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                            >
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                on:click=on_save
                                disabled=move || saving.get()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 \
                                       rounded-lg font-medium transition-colors"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save Post" }}
                            </button>
                        </div>
                    </div>

                    // Submit failure, form left intact for retry
                    {move || error.get().map(|msg| view! {
                        <Alert variant=AlertVariant::Error message=msg />
                    })}

                    <form class="space-y-6" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                        // Title
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().title
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| *f = f.clone().apply(PostField::Title(v.clone())));
                                    slug.update(|s| s.title_changed(&v));
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                            {move || errors.get().get("title").map(|msg| view! {
                                <p class="mt-2 text-sm text-red-400">{msg}</p>
                            })}
                        </div>

                        // Slug with auto-generate toggle
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Slug"</label>
                            <input
                                type="text"
                                prop:value=move || slug.get().value
                                on:input=move |ev| {
                                    slug.update(|s| s.edited(&event_target_value(&ev)));
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                            <label class="mt-2 flex items-center space-x-2 text-sm text-gray-400">
                                <input
                                    type="checkbox"
                                    prop:checked=move || slug.get().is_auto()
                                    on:change=move |_| {
                                        slug.update(|s| s.toggle(&form.get().title));
                                    }
                                />
                                <span>"Auto-generate from title"</span>
                            </label>
                        </div>

                        // Excerpt
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Excerpt"</label>
                            <textarea
                                rows=3
                                prop:value=move || form.get().excerpt
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| *f = f.clone().apply(PostField::Excerpt(v)));
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                            <p class="mt-2 text-sm text-gray-500">
                                "A short summary of your post. If left empty, it will be generated from the content."
                            </p>
                        </div>

                        // Content (editor widget, outside the form state)
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Content"</label>
                            <ContentEditor value=content />
                        </div>

                        // Featured image
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Featured Image URL"</label>
                            <input
                                type="text"
                                placeholder="https://example.com/image.jpg"
                                prop:value=move || form.get().featured_image
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| *f = f.clone().apply(PostField::FeaturedImage(v)));
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        // Status
                        <div class="max-w-xs">
                            <label class="block text-sm text-gray-400 mb-2">"Status"</label>
                            <select
                                prop:value=move || form.get().status.as_str().to_string()
                                on:change=move |ev| {
                                    let status = PostStatus::parse(&event_target_value(&ev));
                                    form.update(|f| *f = f.clone().apply(PostField::Status(status)));
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            >
                                <option value="draft">"Draft"</option>
                                <option value="published">"Published"</option>
                            </select>
                        </div>

                        // SEO settings
                        <section class="pt-6 border-t border-gray-700 space-y-6">
                            <div>
                                <h2 class="text-lg font-semibold">"SEO Settings"</h2>
                                <p class="text-sm text-gray-400 mt-1">
                                    "Optimize your post for search engines."
                                </p>
                            </div>

                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Meta Title"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.get().meta_title
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        form.update(|f| *f = f.clone().apply(PostField::MetaTitle(v)));
                                    }
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <p class="mt-2 text-sm text-gray-500">"Leave blank to use the post title."</p>
                            </div>

                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Meta Description"</label>
                                <textarea
                                    rows=3
                                    prop:value=move || form.get().meta_description
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        form.update(|f| *f = f.clone().apply(PostField::MetaDescription(v)));
                                    }
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <p class="mt-2 text-sm text-gray-500">"Leave blank to use the post excerpt."</p>
                            </div>
                        </section>

                        // Bottom actions
                        <div class="pt-6 border-t border-gray-700 flex justify-end space-x-3">
                            <button
                                type="button"
                                on:click=on_cancel_bottom
                                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                            >
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                on:click=on_save_bottom
                                disabled=move || saving.get()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 \
                                       rounded-lg font-medium transition-colors"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save Post" }}
                            </button>
                        </div>
                    </form>
                </div>
            }.into_view()
        }}
    }
}

/// Terminal not-found state. Navigation back is user-initiated only.
#[component]
fn PostMissing(on_back: impl Fn(web_sys::MouseEvent) + 'static) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <h2 class="text-lg font-semibold">"Post not found"</h2>
            <p class="mt-2 text-sm text-gray-400">
                "The post you're looking for doesn't exist or you don't have permission to view it."
            </p>
            <button
                type="button"
                on:click=on_back
                class="mt-5 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go back to posts"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row() -> Post {
        Post {
            id: 404,
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            excerpt: None,
            content: Some("body".to_string()),
            featured_image: None,
            status: PostStatus::Draft,
            meta_title: None,
            meta_description: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_post_id("404").unwrap(), 404);
        assert_eq!(parse_post_id("1").unwrap(), 1);
    }

    #[test]
    fn unparseable_id_is_rejected() {
        assert!(parse_post_id("not-a-number").is_err());
        assert!(parse_post_id("").is_err());
        assert!(parse_post_id("4o4").is_err());
    }

    #[test]
    fn failed_fetch_lands_in_not_found() {
        // An id that matched no rows and a transport failure both render the
        // same terminal state.
        let missing = ApiError {
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
            code: Some(api::NO_ROWS_CODE.to_string()),
        };
        assert_eq!(loaded_post(Err(missing)), None);
        assert_eq!(loaded_post(Err(ApiError::new("Network error: timed out"))), None);
    }

    #[test]
    fn successful_fetch_seeds_the_page() {
        let loaded = loaded_post(Ok(row()));
        assert_eq!(loaded.as_ref().map(|p| p.id), Some(404));
    }
}
