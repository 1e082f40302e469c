//! Settings Page
//!
//! Singleton upsert: the settings table holds at most one row, and whether a
//! row was loaded decides between the update and insert branches on save.
//! Also hosts the API connection card (local-storage backed).

use leptos::*;

use crate::api;
use crate::api::types::SiteSettings;
use crate::components::{Alert, AlertVariant, Loading};
use crate::state::forms::{validate, FieldErrors, SettingsField, SettingsForm};
use crate::state::global::GlobalState;

/// Which write the save button issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveAction {
    Update(i64),
    Insert,
}

fn save_action(loaded: Option<&SiteSettings>) -> SaveAction {
    match loaded {
        Some(row) => SaveAction::Update(row.id),
        None => SaveAction::Insert,
    }
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let settings = create_rw_signal(None::<SiteSettings>);
    let form = create_rw_signal(SettingsForm::default());
    let errors = create_rw_signal(FieldErrors::default());
    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Fetch the singleton row on mount. "No rows" is a normal empty state;
    // anything else is surfaced.
    create_effect(move |_| {
        spawn_local(async move {
            set_loading.set(true);

            match api::site_settings().await {
                Ok(row) => {
                    form.set(SettingsForm::from_row(Some(&row)));
                    settings.set(Some(row));
                }
                Err(e) if e.is_no_rows() => {
                    form.set(SettingsForm::from_row(None));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching settings: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }

            set_loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // In-flight guard: a second submit is ignored, never queued.
        if saving.get() {
            return;
        }

        let checked = validate(&form.get(), SettingsForm::RULES);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FieldErrors::default());

        let payload = form.get().to_payload();
        let action = save_action(settings.get().as_ref());

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match action {
                SaveAction::Update(id) => api::update_settings(id, &payload).await,
                SaveAction::Insert => api::insert_settings(&payload).await,
            };

            match result {
                Ok(()) => state.show_success("Settings saved successfully!"),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving settings: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }

            set_saving.set(false);
        });
    };

    // Re-seed from the last successfully loaded row; no-op if none.
    let on_reset = move |_| {
        if let Some(row) = settings.get() {
            form.set(SettingsForm::from_row(Some(&row)));
        }
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your website settings"</p>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                view! {
                    <div class="space-y-8">
                        {move || error.get().map(|msg| view! {
                            <Alert variant=AlertVariant::Error message=msg />
                        })}

                        <form class="space-y-8" on:submit=on_submit>
                            // General settings
                            <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                                <div>
                                    <h2 class="text-xl font-semibold">"General Settings"</h2>
                                    <p class="text-sm text-gray-400 mt-1">
                                        "Basic information about your website."
                                    </p>
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Site Title"</label>
                                    <input
                                        type="text"
                                        prop:value=move || form.get().site_title
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::SiteTitle(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                    {move || errors.get().get("site_title").map(|msg| view! {
                                        <p class="mt-2 text-sm text-red-400">{msg}</p>
                                    })}
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Site Description"</label>
                                    <textarea
                                        rows=3
                                        prop:value=move || form.get().site_description
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::SiteDescription(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                    <p class="mt-2 text-sm text-gray-500">
                                        "A brief description of your website. Used in search results and social media shares."
                                    </p>
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Site Logo URL"</label>
                                    <input
                                        type="text"
                                        prop:value=move || form.get().site_logo
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::SiteLogo(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Site Favicon URL"</label>
                                    <input
                                        type="text"
                                        prop:value=move || form.get().site_favicon
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::SiteFavicon(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Footer Text"</label>
                                    <input
                                        type="text"
                                        prop:value=move || form.get().footer_text
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::FooterText(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>
                            </section>

                            // Content settings
                            <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                                <div>
                                    <h2 class="text-xl font-semibold">"Content Settings"</h2>
                                    <p class="text-sm text-gray-400 mt-1">
                                        "Configure how your content is displayed."
                                    </p>
                                </div>

                                <div class="max-w-xs">
                                    <label class="block text-sm text-gray-400 mb-2">"Posts Per Page"</label>
                                    <input
                                        type="number"
                                        min="1"
                                        max="50"
                                        prop:value=move || form.get().posts_per_page
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::PostsPerPage(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                    {move || errors.get().get("posts_per_page").map(|msg| view! {
                                        <p class="mt-2 text-sm text-red-400">{msg}</p>
                                    })}
                                </div>
                            </section>

                            // Integrations
                            <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                                <div>
                                    <h2 class="text-xl font-semibold">"Integrations"</h2>
                                    <p class="text-sm text-gray-400 mt-1">
                                        "Connect your website with third-party services."
                                    </p>
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Disqus Shortname"</label>
                                    <input
                                        type="text"
                                        prop:value=move || form.get().disqus_shortname
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::DisqusShortname(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                    <p class="mt-2 text-sm text-gray-500">"Leave empty to disable comments."</p>
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Google Analytics ID"</label>
                                    <input
                                        type="text"
                                        placeholder="UA-XXXXXXXXX-X or G-XXXXXXXXXX"
                                        prop:value=move || form.get().google_analytics_id
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| *f = f.clone().apply(SettingsField::GoogleAnalyticsId(v)));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                    <p class="mt-2 text-sm text-gray-500">"Leave empty to disable analytics."</p>
                                </div>
                            </section>

                            // Actions
                            <div class="flex justify-end space-x-3">
                                <button
                                    type="button"
                                    on:click=on_reset
                                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                                >
                                    "Reset"
                                </button>
                                <button
                                    type="submit"
                                    disabled=move || saving.get()
                                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 \
                                           rounded-lg font-medium transition-colors"
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save Settings" }}
                                </button>
                            </div>
                        </form>

                        <ConnectionSettings />
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// API connection card: base URL and anon key, persisted to local storage.
#[component]
fn ConnectionSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (api_key, set_api_key_value) = create_signal(api::get_api_key());

    let on_save = move |_| {
        api::set_api_base(&api_url.get());
        api::set_api_key(&api_key.get());
        state.show_success("Connection settings saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            <div>
                <h2 class="text-xl font-semibold">"API Connection"</h2>
                <p class="text-sm text-gray-400 mt-1">
                    "Where this dashboard reads and writes your content."
                </p>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"API Base URL"</label>
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Anon Key"</label>
                <input
                    type="password"
                    prop:value=move || api_key.get()
                    on:input=move |ev| set_api_key_value.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="flex justify-end">
                <button
                    type="button"
                    on:click=on_save
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                >
                    "Save Connection"
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64) -> SiteSettings {
        SiteSettings {
            id,
            site_title: "My Site".to_string(),
            site_description: None,
            site_logo: None,
            site_favicon: None,
            footer_text: None,
            posts_per_page: 10,
            disqus_shortname: None,
            google_analytics_id: None,
        }
    }

    #[test]
    fn no_loaded_row_inserts() {
        assert_eq!(save_action(None), SaveAction::Insert);
    }

    #[test]
    fn loaded_row_updates_by_its_id() {
        let existing = row(7);
        assert_eq!(save_action(Some(&existing)), SaveAction::Update(7));
    }
}
