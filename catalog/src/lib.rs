//! Site content model shared by `site` and `server`.
//!
//! All copy rendered by the site lives in one YAML document (`content.yaml`)
//! embedded at compile time. Tag fields (colors, icons, statuses, tracks) are
//! closed enums, so a tag without a style entry cannot get past parsing.

pub mod filter;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use filter::filter_categories;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

const BUILTIN_CONTENT: &str = include_str!("../content.yaml");

static BUILTIN: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(|| Catalog::from_yaml_str(BUILTIN_CONTENT));

// =============================================================================
// ERROR
// =============================================================================

/// Error returned when a content document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid YAML or does not match the content schema.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_yaml::Error),
}

// =============================================================================
// TAGS
// =============================================================================

/// Program track a resource or milestone belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Algorithmic / informatics track (IOI).
    #[serde(alias = "programming")]
    Core,
    /// Artificial intelligence track (IOAI).
    #[serde(alias = "AI")]
    Ai,
    Both,
}

/// Completion status of a timeline milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl EventStatus {
    pub const ALL: [Self; 3] = [Self::Completed, Self::InProgress, Self::Upcoming];
}

/// Color theme key of a resource category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Emerald,
    Purple,
    Amber,
}

impl CategoryColor {
    pub const ALL: [Self; 4] = [Self::Blue, Self::Emerald, Self::Purple, Self::Amber];
}

/// Header glyph of a resource category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryIcon {
    Code,
    Book,
    FileText,
    Award,
}

/// Palette variant a directory renders its cards with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTheme {
    /// Stock Tailwind palette.
    #[default]
    Standard,
    /// Brand palette, with `olympiad-blue` standing in for blue.
    Olympiad,
}

impl CardTheme {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Olympiad];
}

// =============================================================================
// RECORDS
// =============================================================================

/// Document-level metadata for the root layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

/// Heading block shared by every section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    /// Element id used for in-page navigation.
    pub anchor: String,
    pub heading: String,
    pub blurb: String,
}

/// A single external learning link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub link: String,
    #[serde(default)]
    pub track: Option<Track>,
}

/// A named group of resources sharing a color theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCategory {
    pub title: String,
    pub icon: CategoryIcon,
    pub color: CategoryColor,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A grid of resource categories with its section copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(flatten)]
    pub copy: SectionCopy,
    #[serde(default)]
    pub theme: CardTheme,
    /// Whether the section offers a free-text search input.
    #[serde(default)]
    pub searchable: bool,
    /// Whether the track legend is shown under the grid.
    #[serde(default)]
    pub legend: bool,
    pub categories: Vec<ResourceCategory>,
}

impl Directory {
    /// Total number of links across all categories.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.categories.iter().map(|c| c.resources.len()).sum()
    }
}

/// A dated milestone on the program timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Free-form date label, e.g. `"Nov 2024"`.
    pub date: String,
    pub title: String,
    pub status: EventStatus,
    pub description: String,
    #[serde(default)]
    pub track: Option<Track>,
}

/// The program timeline section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(flatten)]
    pub copy: SectionCopy,
    pub events: Vec<TimelineEvent>,
}

/// Complete site content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub site: SiteMeta,
    pub resources: Directory,
    pub roadmap: Roadmap,
    pub sponsors: Directory,
}

/// Entry counts, logged by the server at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogStats {
    pub resource_categories: usize,
    pub resources: usize,
    pub events: usize,
    pub sponsor_categories: usize,
    pub sponsor_links: usize,
}

impl Catalog {
    /// Parse a content document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the document is malformed or uses a
    /// tag outside the closed enumerations.
    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// The content compiled into the binary. Parsed once per process.
    ///
    /// # Errors
    ///
    /// Returns the cached parse error if the embedded document is invalid.
    pub fn builtin() -> Result<&'static Self, &'static CatalogError> {
        BUILTIN.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            resource_categories: self.resources.categories.len(),
            resources: self.resources.link_count(),
            events: self.roadmap.events.len(),
            sponsor_categories: self.sponsors.categories.len(),
            sponsor_links: self.sponsors.link_count(),
        }
    }
}
