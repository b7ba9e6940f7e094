//! Free-text search input for a directory.
//!
//! The term lives in a signal owned by the directory that renders the bar;
//! nothing outside that section reads it.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

/// Trim surrounding whitespace so a stray space does not hide every entry.
pub fn search_needle(raw: &str) -> &str {
    raw.trim()
}

/// Notice shown when a non-empty term filters everything out.
pub fn no_match_message(raw: &str) -> Option<String> {
    let needle = search_needle(raw);
    if needle.is_empty() {
        return None;
    }
    Some(format!("No resources match \u{201c}{needle}\u{201d}."))
}

#[component]
pub fn SearchBar(term: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mb-8 px-6">
            <input
                type="search"
                class="w-full rounded-lg border border-gray-200 bg-white px-4 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-200"
                placeholder=placeholder.clone()
                aria-label=placeholder
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
        </div>
    }
}
