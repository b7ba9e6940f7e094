//! Inline SVG glyphs (lucide outlines) and track-to-glyph rules.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use catalog::{CategoryIcon, Track};

/// Glyphs used by the site. Drawn on a 24x24 stroke-only canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    Book,
    Brain,
    Check,
    ChevronRight,
    Clock,
    Code,
    Cpu,
    FileText,
}

impl Icon {
    pub const ALL: [Self; 9] = [
        Self::Award,
        Self::Book,
        Self::Brain,
        Self::Check,
        Self::ChevronRight,
        Self::Clock,
        Self::Code,
        Self::Cpu,
        Self::FileText,
    ];

    /// Inner SVG markup for the glyph.
    pub fn markup(self) -> &'static str {
        match self {
            Self::Award => r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
            Self::Book => r#"<path d="M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"/>"#,
            Self::Brain => concat!(
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/>"#,
                r#"<path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#,
                r#"<path d="M12 5v13"/>"#,
            ),
            Self::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            Self::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Self::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            Self::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            Self::Cpu => concat!(
                r#"<rect x="4" y="4" width="16" height="16" rx="2"/><rect x="9" y="9" width="6" height="6"/>"#,
                r#"<path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/>"#,
                r#"<path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#,
            ),
            Self::FileText => concat!(
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>"#,
                r#"<path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#,
            ),
        }
    }
}

impl From<CategoryIcon> for Icon {
    fn from(icon: CategoryIcon) -> Self {
        match icon {
            CategoryIcon::Code => Self::Code,
            CategoryIcon::Book => Self::Book,
            CategoryIcon::FileText => Self::FileText,
            CategoryIcon::Award => Self::Award,
        }
    }
}

/// Legend entries, in display order.
pub const TRACK_LEGEND: [(Track, &str); 3] = [(Track::Core, "Programming"), (Track::Ai, "AI/ML"), (Track::Both, "Both")];

/// Glyphs shown next to a resource title. `Both` shows the pair.
pub fn resource_track_icons(track: Option<Track>) -> &'static [Icon] {
    match track {
        Some(Track::Core) => &[Icon::Cpu],
        Some(Track::Ai) => &[Icon::Brain],
        Some(Track::Both) => &[Icon::Cpu, Icon::Brain],
        None => &[],
    }
}

/// Text tint for track glyphs; empty for non-track glyphs.
pub fn track_tint(icon: Icon) -> &'static str {
    match icon {
        Icon::Cpu => "text-indigo-500",
        Icon::Brain => "text-teal-500",
        _ => "",
    }
}
