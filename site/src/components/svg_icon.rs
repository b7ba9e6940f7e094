//! Inline SVG glyph.

use leptos::prelude::*;

use crate::util::icons::Icon;

#[component]
pub fn SvgIcon(icon: Icon, #[prop(into)] classes: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
            aria-hidden="true"
            inner_html=icon.markup()
        ></svg>
    }
}
