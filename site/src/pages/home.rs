//! Landing page with every section stacked in order.

use catalog::Catalog;
use leptos::prelude::*;

use crate::components::directory::CategoryDirectory;
use crate::components::timeline::Timeline;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();

    view! {
        <div class="home-page">
            <CategoryDirectory directory=&catalog.resources/>
            <Timeline roadmap=&catalog.roadmap/>
            <CategoryDirectory directory=&catalog.sponsors/>
        </div>
    }
}
