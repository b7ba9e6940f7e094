//! Program timeline: milestones alternating around a vertical axis.

use catalog::Roadmap;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::components::svg_icon::SvgIcon;
use crate::util::palette::{StatusClasses, status_label};
use crate::util::timeline::{PlacedEvent, Side, layout};

#[component]
pub fn Timeline(roadmap: &'static Roadmap) -> impl IntoView {
    let placed = layout(&roadmap.events);

    view! {
        <div class="relative py-16" id=roadmap.copy.anchor.as_str()>
            <SectionHeader copy=&roadmap.copy heading_class="text-olympiad-navy" blurb_class="text-olympiad-gray max-w-lg"/>
            <div class="container mx-auto px-6">
                <div class="relative">
                    // center line
                    <div class="absolute left-1/2 top-0 h-full border-l-2 border-olympiad-blue -ml-1"></div>
                    <div class="space-y-12">
                        {placed.into_iter().map(|placed| view! { <TimelineEntry placed=placed/> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TimelineEntry(placed: PlacedEvent<'static>) -> impl IntoView {
    let PlacedEvent { side, event, status, track_icon, .. } = placed;
    let is_left = side == Side::Left;

    view! {
        <div class=side.row_class()>
            <div class=side.column_class()>
                {is_left
                    .then(|| {
                        view! {
                            <div class="flex items-center justify-end mb-2">
                                <div class="text-xs font-medium text-gray-500 mr-2">{event.date.as_str()}</div>
                                <StatusMarker status=status/>
                            </div>
                        }
                    })}
                <div class=format!("{} {} border rounded-lg shadow-sm px-6 py-4", status.light_bg, status.border)>
                    <div class="flex items-center mb-2 space-x-2 justify-start">
                        {track_icon.map(|icon| view! { <SvgIcon icon=icon classes="h-4 w-4 text-gray-600"/> })}
                        <div class=format!(
                            "inline-block px-2 py-1 rounded-full text-[11px] font-semibold {} text-white",
                            status.bg,
                        )>{status_label(event.status)}</div>
                        {(!is_left).then(|| view! { <span class="text-xs font-medium text-gray-500">{event.date.as_str()}</span> })}
                    </div>
                    <h3 class=format!("font-semibold text-[16px] {}", status.text)>{event.title.as_str()}</h3>
                    <p class="text-olympiad-gray py-1">{event.description.as_str()}</p>
                </div>
            </div>

            // marker on the axis for right-hand entries
            <div class="absolute left-1/2 top-0 transform -translate-x-1/2">
                {(!is_left).then(|| view! { <StatusMarker status=status/> })}
            </div>

            <div class="w-1/2"></div>
        </div>
    }
}

/// Round status badge with the status glyph.
#[component]
fn StatusMarker(status: StatusClasses) -> impl IntoView {
    let glyph = if status.pulse { "h-5 w-5 text-white animate-pulse" } else { "h-5 w-5 text-white" };
    view! {
        <div class=format!("rounded-full {} w-8 h-8 flex items-center justify-center shadow", status.bg)>
            <SvgIcon icon=status.icon classes=glyph/>
        </div>
    }
}
