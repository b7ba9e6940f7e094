//! Top bar with the site title and in-page section links.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use catalog::Catalog;
use leptos::prelude::*;

/// `(href, label)` pairs pointing at each section on the landing page.
pub fn nav_links(catalog: &Catalog) -> [(String, &'static str); 3] {
    [
        (format!("/#{}", catalog.resources.copy.anchor), "Resources"),
        (format!("/#{}", catalog.roadmap.copy.anchor), "Timeline"),
        (format!("/#{}", catalog.sponsors.copy.anchor), "Sponsors"),
    ]
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();

    view! {
        <header class="border-b border-gray-100 bg-white">
            <nav class="container mx-auto flex items-center justify-between px-6 py-4">
                <a href="/" class="text-lg font-bold text-olympiad-navy">{catalog.site.title.as_str()}</a>
                <div class="flex items-center space-x-6 text-sm text-olympiad-gray">
                    {nav_links(catalog)
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="hover:text-olympiad-blue">{label}</a> })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
