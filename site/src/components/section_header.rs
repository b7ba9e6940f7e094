//! Heading block shared by every section.

use catalog::SectionCopy;
use leptos::prelude::*;

/// Centered heading, accent rule, and lead paragraph.
#[component]
pub fn SectionHeader(copy: &'static SectionCopy, heading_class: &'static str, blurb_class: &'static str) -> impl IntoView {
    view! {
        <div class="text-center max-w-3xl mx-auto mb-12 px-6">
            <h2 class=format!("text-3xl md:text-4xl font-bold mb-6 {heading_class}")>{copy.heading.as_str()}</h2>
            <div class="h-1 w-20 bg-olympiad-blue mx-auto mb-6"></div>
            <p class=format!("{blurb_class} text-lg mx-auto")>{copy.blurb.as_str()}</p>
        </div>
    }
}
