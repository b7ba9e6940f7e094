//! Track glyph groups and the legend explaining them.

use leptos::prelude::*;

use crate::components::svg_icon::SvgIcon;
use crate::util::icons::{Icon, TRACK_LEGEND, resource_track_icons, track_tint};

/// Row of track glyphs at the given size. Renders nothing for no glyphs.
#[component]
pub fn TrackGlyphs(icons: &'static [Icon], size: &'static str) -> impl IntoView {
    (!icons.is_empty()).then(|| {
        view! {
            <div class="flex space-x-1">
                {icons
                    .iter()
                    .map(|icon| view! { <SvgIcon icon=*icon classes=format!("{size} {}", track_tint(*icon))/> })
                    .collect_view()}
            </div>
        }
    })
}

#[component]
pub fn TrackLegend() -> impl IntoView {
    view! {
        <div class="mt-8 flex justify-center">
            <div class="flex items-center space-x-6 text-sm text-gray-600">
                {TRACK_LEGEND
                    .iter()
                    .map(|(track, label)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <TrackGlyphs icons=resource_track_icons(Some(*track)) size="h-4 w-4"/>
                                <span>{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
