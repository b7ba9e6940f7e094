use super::*;

fn builtin() -> &'static Catalog {
    Catalog::builtin().expect("embedded content should parse")
}

// =============================================================
// Embedded content
// =============================================================

#[test]
fn builtin_content_parses() {
    let catalog = builtin();
    assert_eq!(catalog.site.title, "Rwanda Computing Olympiad");
    assert_eq!(catalog.resources.copy.anchor, "resources");
    assert_eq!(catalog.roadmap.copy.anchor, "timeline");
    assert_eq!(catalog.sponsors.copy.anchor, "sponsors");
}

#[test]
fn builtin_is_cached() {
    let a: *const Catalog = builtin();
    let b: *const Catalog = builtin();
    assert_eq!(a, b);
}

#[test]
fn builtin_stats_match_content() {
    let stats = builtin().stats();
    assert_eq!(
        stats,
        CatalogStats {
            resource_categories: 4,
            resources: 21,
            events: 8,
            sponsor_categories: 4,
            sponsor_links: 16,
        }
    );
}

#[test]
fn every_link_is_non_empty() {
    let catalog = builtin();
    for directory in [&catalog.resources, &catalog.sponsors] {
        for category in &directory.categories {
            for resource in &category.resources {
                assert!(!resource.link.trim().is_empty(), "{} has an empty link", resource.title);
            }
        }
    }
}

#[test]
fn every_category_has_resources() {
    let catalog = builtin();
    for directory in [&catalog.resources, &catalog.sponsors] {
        for category in &directory.categories {
            assert!(!category.resources.is_empty(), "{} is empty", category.title);
        }
    }
}

#[test]
fn directories_carry_their_theme_and_flags() {
    let catalog = builtin();
    assert_eq!(catalog.resources.theme, CardTheme::Standard);
    assert!(catalog.resources.searchable);
    assert!(catalog.resources.legend);
    assert_eq!(catalog.sponsors.theme, CardTheme::Olympiad);
    assert!(!catalog.sponsors.searchable);
    assert!(!catalog.sponsors.legend);
}

#[test]
fn every_resource_in_resource_directory_has_a_track() {
    for category in &builtin().resources.categories {
        for resource in &category.resources {
            assert!(resource.track.is_some(), "{} has no track", resource.title);
        }
    }
}

#[test]
fn roadmap_keeps_declared_order() {
    let dates: Vec<&str> = builtin().roadmap.events.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(
        dates,
        ["Nov 2024", "Dec 2024", "Feb 2025", "Apr 2025", "May 2025", "June 2025", "Aug 2025", "July 2025"]
    );
}

// =============================================================
// Tag parsing
// =============================================================

#[test]
fn track_accepts_original_spellings() {
    assert_eq!(serde_yaml::from_str::<Track>("programming").unwrap(), Track::Core);
    assert_eq!(serde_yaml::from_str::<Track>("core").unwrap(), Track::Core);
    assert_eq!(serde_yaml::from_str::<Track>("AI").unwrap(), Track::Ai);
    assert_eq!(serde_yaml::from_str::<Track>("ai").unwrap(), Track::Ai);
    assert_eq!(serde_yaml::from_str::<Track>("both").unwrap(), Track::Both);
}

#[test]
fn status_uses_kebab_case() {
    assert_eq!(serde_yaml::from_str::<EventStatus>("in-progress").unwrap(), EventStatus::InProgress);
    assert_eq!(serde_yaml::from_str::<EventStatus>("completed").unwrap(), EventStatus::Completed);
    assert!(serde_yaml::from_str::<EventStatus>("done").is_err());
}

#[test]
fn icon_uses_kebab_case() {
    assert_eq!(serde_yaml::from_str::<CategoryIcon>("file-text").unwrap(), CategoryIcon::FileText);
}

// =============================================================
// Documents
// =============================================================

const MINIMAL: &str = r#"
site:
  title: "T"
  description: "D"
resources:
  anchor: "resources"
  heading: "H"
  blurb: "B"
  categories:
    - title: "Contest Platforms"
      icon: award
      color: amber
      resources:
        - title: "Codeforces"
          link: "https://codeforces.com/"
roadmap:
  anchor: "timeline"
  heading: "H"
  blurb: "B"
  events: []
sponsors:
  anchor: "sponsors"
  heading: "H"
  blurb: "B"
  categories: []
"#;

#[test]
fn minimal_document_applies_defaults() {
    let catalog = Catalog::from_yaml_str(MINIMAL).unwrap();
    assert_eq!(catalog.resources.theme, CardTheme::Standard);
    assert!(!catalog.resources.searchable);
    assert!(!catalog.resources.legend);
    let codeforces = &catalog.resources.categories[0].resources[0];
    assert_eq!(codeforces.description, None);
    assert_eq!(codeforces.track, None);
}

#[test]
fn unknown_color_is_a_parse_error() {
    let raw = MINIMAL.replace("color: amber", "color: crimson");
    let err = Catalog::from_yaml_str(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse site content"));
}

#[test]
fn missing_link_is_a_parse_error() {
    let raw = MINIMAL.replace("          link: \"https://codeforces.com/\"\n", "");
    assert!(Catalog::from_yaml_str(&raw).is_err());
}
