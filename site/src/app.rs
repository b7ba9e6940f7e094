//! Root layout shell, routing, and content context.

use catalog::Catalog;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::home::HomePage;
use crate::pages::section::{ResourcesPage, SponsorsPage, TimelinePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the parsed content as `&'static Catalog` context. When the
/// embedded content fails to parse, a notice replaces the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            leptos::logging::error!("site content unavailable: {err}");
            return view! {
                <Stylesheet id="leptos" href="/pkg/olympiad-site.css"/>
                <Title text="Rwanda Computing Olympiad"/>
                <div class="container mx-auto px-6 py-16 text-center">
                    <p class="text-gray-600">"Site content is unavailable right now."</p>
                </div>
            }
            .into_any();
        }
    };
    provide_context(catalog);

    view! {
        <Stylesheet id="leptos" href="/pkg/olympiad-site.css"/>
        <Title text=catalog.site.title.clone()/>
        <Meta name="description" content=catalog.site.description.clone()/>

        <Router>
            <SiteHeader/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("resources") view=ResourcesPage/>
                    <Route path=StaticSegment("timeline") view=TimelinePage/>
                    <Route path=StaticSegment("sponsors") view=SponsorsPage/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
