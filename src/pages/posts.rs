//! Posts Page
//!
//! Read-only listing of every post, newest first. Each title links into the
//! editor; creation and deletion are not handled here.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::Post;
use crate::components::{ListSkeleton, StatusBadge};
use crate::state::global::GlobalState;

/// Posts listing page component
#[component]
pub fn Posts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let posts = create_rw_signal(Vec::<Post>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch all posts on mount
    create_effect(move |_| {
        spawn_local(async move {
            set_loading.set(true);

            match api::list_posts().await {
                Ok(rows) => posts.set(rows),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching posts: {}", e).into());
                    state.show_error(&format!("Failed to load posts: {}", e));
                }
            }

            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Posts"</h1>
                <p class="text-gray-400 mt-1">"Manage your blog posts"</p>
            </div>

            <section class="bg-gray-800 rounded-xl border border-gray-700">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="p-4">
                                <ListSkeleton count=5 />
                            </div>
                        }.into_view();
                    }

                    let rows = posts.get();
                    if rows.is_empty() {
                        return view! {
                            <p class="px-4 py-8 text-center text-gray-400">"No posts found."</p>
                        }.into_view();
                    }

                    view! {
                        <div class="divide-y divide-gray-700">
                            {rows.into_iter().map(|post| {
                                let date = post.created_at.format("%b %d, %Y").to_string();
                                view! {
                                    <div class="px-4 py-4 flex items-center justify-between">
                                        <div class="flex items-center space-x-3">
                                            <A
                                                href=format!("/posts/{}", post.id)
                                                class="text-primary-400 hover:text-primary-300 font-medium"
                                            >
                                                {post.title.clone()}
                                            </A>
                                            <StatusBadge status=post.status />
                                        </div>
                                        <span class="text-sm text-gray-400">{date}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </section>
        </div>
    }
}
