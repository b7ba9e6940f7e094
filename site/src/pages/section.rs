//! Standalone routes for individual sections.

use catalog::Catalog;
use leptos::prelude::*;

use crate::components::directory::CategoryDirectory;
use crate::components::timeline::Timeline;

/// `/resources` — learning resource directory.
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    view! { <CategoryDirectory directory=&catalog.resources/> }
}

/// `/timeline` — program roadmap.
#[component]
pub fn TimelinePage() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    view! { <Timeline roadmap=&catalog.roadmap/> }
}

/// `/sponsors` — sponsor directory.
#[component]
pub fn SponsorsPage() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    view! { <CategoryDirectory directory=&catalog.sponsors/> }
}
