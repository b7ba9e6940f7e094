//! Timeline placement: which side of the axis each milestone sits on and
//! which glyphs it carries.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use catalog::{TimelineEvent, Track};

use crate::util::icons::Icon;
use crate::util::palette::{StatusClasses, status_classes};

/// Half of the timeline a milestone card occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even indices sit left of the axis, odd indices right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    /// Row classes; right-hand rows are mirrored so the card lands right of the axis.
    pub fn row_class(self) -> &'static str {
        match self {
            Self::Left => "relative flex w-full",
            Self::Right => "relative flex flex-row-reverse w-full",
        }
    }

    /// Classes for the half-width column holding the card.
    pub fn column_class(self) -> &'static str {
        match self {
            Self::Left => "w-1/2 pr-8 text-right",
            Self::Right => "w-1/2 pl-8 text-left",
        }
    }
}

/// A milestone with its resolved placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedEvent<'a> {
    pub index: usize,
    pub side: Side,
    pub event: &'a TimelineEvent,
    pub status: StatusClasses,
    pub track_icon: Option<Icon>,
}

/// Place `events` in input order.
pub fn layout(events: &[TimelineEvent]) -> Vec<PlacedEvent<'_>> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| PlacedEvent {
            index,
            side: Side::for_index(index),
            event,
            status: status_classes(event.status),
            track_icon: track_icon(event.track),
        })
        .collect()
}

/// Track glyph on a milestone card. Joint milestones carry none.
pub fn track_icon(track: Option<Track>) -> Option<Icon> {
    match track {
        Some(Track::Ai) => Some(Icon::Brain),
        Some(Track::Core) => Some(Icon::Cpu),
        Some(Track::Both) | None => None,
    }
}
