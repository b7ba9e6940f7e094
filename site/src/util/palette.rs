//! Tag-to-class lookup tables for category cards and timeline statuses.
//!
//! Both resolvers are exhaustive `match`es over closed enums, so every tag the
//! content can carry has a class record.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use catalog::{CardTheme, CategoryColor, EventStatus};

use crate::util::icons::Icon;

/// Utility classes for one category card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorClasses {
    /// Card background.
    pub light: &'static str,
    pub border: &'static str,
    /// Heading and link text.
    pub text: &'static str,
    /// Link border on hover.
    pub hover: &'static str,
    /// Disc behind the category glyph.
    pub icon_bg: &'static str,
    /// Category glyph tint.
    pub icon: &'static str,
}

/// Utility classes for one timeline status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusClasses {
    /// Badge and marker fill.
    pub bg: &'static str,
    pub text: &'static str,
    pub light_bg: &'static str,
    pub border: &'static str,
    pub icon: Icon,
    /// Whether the marker glyph pulses.
    pub pulse: bool,
}

pub fn color_classes(theme: CardTheme, color: CategoryColor) -> ColorClasses {
    match (theme, color) {
        (CardTheme::Standard, CategoryColor::Blue) => ColorClasses {
            light: "bg-blue-50",
            border: "border-blue-200",
            text: "text-blue-700",
            hover: "hover:border-blue-300",
            icon_bg: "bg-blue-100",
            icon: "text-blue-600",
        },
        (CardTheme::Standard, CategoryColor::Emerald) => ColorClasses {
            light: "bg-emerald-50",
            border: "border-emerald-200",
            text: "text-emerald-700",
            hover: "hover:border-emerald-300",
            icon_bg: "bg-emerald-100",
            icon: "text-emerald-600",
        },
        (CardTheme::Standard, CategoryColor::Purple) => ColorClasses {
            light: "bg-purple-50",
            border: "border-purple-200",
            text: "text-purple-700",
            hover: "hover:border-purple-300",
            icon_bg: "bg-purple-100",
            icon: "text-purple-600",
        },
        (CardTheme::Standard, CategoryColor::Amber) => ColorClasses {
            light: "bg-amber-50",
            border: "border-amber-200",
            text: "text-amber-700",
            hover: "hover:border-amber-300",
            icon_bg: "bg-amber-100",
            icon: "text-amber-600",
        },
        (CardTheme::Olympiad, CategoryColor::Blue) => ColorClasses {
            light: "bg-olympiad-blue/10",
            border: "border-olympiad-blue",
            text: "text-olympiad-blue",
            hover: "hover:border-olympiad-blue-300",
            icon_bg: "bg-olympiad-blue/40",
            icon: "text-blue-600",
        },
        (CardTheme::Olympiad, CategoryColor::Emerald) => ColorClasses {
            light: "bg-emerald-50",
            border: "border-emerald-100",
            text: "text-emerald-600",
            hover: "hover:border-emerald-300",
            icon_bg: "bg-emerald-100",
            icon: "text-emerald-600",
        },
        (CardTheme::Olympiad, CategoryColor::Purple) => ColorClasses {
            light: "bg-purple-50",
            border: "border-purple-100",
            text: "text-purple-600",
            hover: "hover:border-purple-300",
            icon_bg: "bg-purple-100",
            icon: "text-purple-600",
        },
        (CardTheme::Olympiad, CategoryColor::Amber) => ColorClasses {
            light: "bg-amber-50",
            border: "border-amber-100",
            text: "text-amber-600",
            hover: "hover:border-amber-300",
            icon_bg: "bg-amber-100",
            icon: "text-amber-600",
        },
    }
}

pub fn status_classes(status: EventStatus) -> StatusClasses {
    match status {
        EventStatus::Completed => StatusClasses {
            bg: "bg-green-500",
            text: "text-green-700",
            light_bg: "bg-green-50",
            border: "border-green-200",
            icon: Icon::Check,
            pulse: false,
        },
        EventStatus::InProgress => StatusClasses {
            bg: "bg-blue-500",
            text: "text-blue-700",
            light_bg: "bg-blue-50",
            border: "border-blue-200",
            icon: Icon::Clock,
            pulse: true,
        },
        EventStatus::Upcoming => StatusClasses {
            bg: "bg-amber-400",
            text: "text-amber-700",
            light_bg: "bg-amber-50",
            border: "border-amber-200",
            icon: Icon::Clock,
            pulse: false,
        },
    }
}

/// Badge text for a status.
pub fn status_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Completed => "Completed",
        EventStatus::InProgress => "In Progress",
        EventStatus::Upcoming => "Upcoming",
    }
}

/// Section layout differences between card themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionLayout {
    pub section: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub grid_gap: &'static str,
    pub card_padding: &'static str,
}

pub fn section_layout(theme: CardTheme) -> SectionLayout {
    match theme {
        CardTheme::Standard => SectionLayout {
            section: "py-16 bg-gray-50",
            heading: "text-gray-900",
            blurb: "text-gray-600 max-w-2xl",
            grid_gap: "gap-6",
            card_padding: "p-5",
        },
        CardTheme::Olympiad => SectionLayout {
            section: "py-16",
            heading: "text-olympiad-navy",
            blurb: "text-olympiad-gray max-w-md",
            grid_gap: "gap-5",
            card_padding: "p-4",
        },
    }
}
