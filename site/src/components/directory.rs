//! Category directory: one parameterized grid used for both the learning
//! resource section and the sponsor section.
//!
//! DESIGN
//! ======
//! A directory's theme picks its palette and spacing, `searchable` adds the
//! search bar, and `legend` adds the track legend. Filtering runs on every
//! term change through `catalog::filter_categories`.

use catalog::{CardTheme, Directory, Resource, ResourceCategory, filter_categories};
use leptos::prelude::*;

use crate::components::legend::{TrackGlyphs, TrackLegend};
use crate::components::search_bar::{SearchBar, no_match_message, search_needle};
use crate::components::section_header::SectionHeader;
use crate::components::svg_icon::SvgIcon;
use crate::util::icons::{Icon, resource_track_icons};
use crate::util::palette::{ColorClasses, color_classes, section_layout};

#[component]
pub fn CategoryDirectory(directory: &'static Directory) -> impl IntoView {
    let term = RwSignal::new(String::new());
    let layout = section_layout(directory.theme);
    let theme = directory.theme;

    let visible = Memo::new(move |_| filter_categories(&directory.categories, search_needle(&term.get())));

    view! {
        <section class=layout.section id=directory.copy.anchor.as_str()>
            <div class="container mx-auto px-6">
                <SectionHeader copy=&directory.copy heading_class=layout.heading blurb_class=layout.blurb/>
                {directory.searchable.then(|| view! { <SearchBar term=term placeholder="Search resources"/> })}
                <div class=format!("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 {}", layout.grid_gap)>
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|category| view! { <CategoryCard category=category theme=theme/> })
                            .collect_view()
                    }}
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="mt-6 text-center text-sm text-gray-500">
                        {move || no_match_message(&term.get()).unwrap_or_default()}
                    </p>
                </Show>
                {directory.legend.then(|| view! { <TrackLegend/> })}
            </div>
        </section>
    }
}

/// Card with a colored header and the category's links.
#[component]
pub fn CategoryCard(category: ResourceCategory, theme: CardTheme) -> impl IntoView {
    let colors = color_classes(theme, category.color);
    let padding = section_layout(theme).card_padding;
    let icon = Icon::from(category.icon);

    view! {
        <div class="flex flex-col rounded-xl shadow-sm hover:shadow-md transition-all">
            <div class=format!("flex items-center gap-3 {padding} rounded-t-xl {} {} border-b-0", colors.light, colors.border)>
                <div class=format!("p-2 rounded-full {} flex-shrink-0", colors.icon_bg)>
                    <SvgIcon icon=icon classes=format!("h-6 w-6 {}", colors.icon)/>
                </div>
                <h3 class=format!("font-bold {} text-lg", colors.text)>{category.title}</h3>
            </div>
            <div class=format!("flex-1 rounded-b-xl {} {} border-t-0 {padding}", colors.light, colors.border)>
                <div class="space-y-3">
                    {category
                        .resources
                        .into_iter()
                        .map(|resource| view! { <ResourceLink resource=resource colors=colors/> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// External link card, opened in a new browsing context.
#[component]
fn ResourceLink(resource: Resource, colors: ColorClasses) -> impl IntoView {
    let track_icons = resource_track_icons(resource.track);

    view! {
        <a
            href=resource.link
            class=format!(
                "block rounded-lg p-4 bg-white border border-gray-100 hover:shadow-md transition-all {} group",
                colors.hover,
            )
            target="_blank"
            rel="noopener noreferrer"
        >
            <div class="flex items-start justify-between">
                <h4 class=format!("font-semibold {} flex items-center text-sm mb-1", colors.text)>
                    {resource.title}
                    <SvgIcon icon=Icon::ChevronRight classes="ml-1 h-3 w-3 group-hover:translate-x-1 transition-transform"/>
                </h4>
                <TrackGlyphs icons=track_icons size="h-3 w-3"/>
            </div>
            {resource.description.map(|d| view! { <p class="text-gray-600 text-xs leading-relaxed">{d}</p> })}
        </a>
    }
}
