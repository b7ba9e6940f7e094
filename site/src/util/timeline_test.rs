use super::*;
use catalog::EventStatus;

fn event(title: &str, status: EventStatus, track: Option<Track>) -> TimelineEvent {
    TimelineEvent {
        date: "Nov 2024".to_owned(),
        title: title.to_owned(),
        status,
        description: String::new(),
        track,
    }
}

#[test]
fn side_alternates_by_index_parity() {
    assert_eq!(Side::for_index(0), Side::Left);
    assert_eq!(Side::for_index(1), Side::Right);
    assert_eq!(Side::for_index(2), Side::Left);
    assert_eq!(Side::for_index(7), Side::Right);
}

#[test]
fn layout_preserves_order_and_alternates() {
    let events = vec![
        event("a", EventStatus::Completed, None),
        event("b", EventStatus::InProgress, None),
        event("c", EventStatus::Upcoming, None),
    ];
    let placed = layout(&events);
    let summary: Vec<(usize, &str, Side)> = placed.iter().map(|p| (p.index, p.event.title.as_str(), p.side)).collect();
    assert_eq!(
        summary,
        vec![(0, "a", Side::Left), (1, "b", Side::Right), (2, "c", Side::Left)]
    );
}

#[test]
fn layout_resolves_status_classes() {
    let events = vec![event("a", EventStatus::InProgress, None)];
    let placed = layout(&events);
    assert_eq!(placed[0].status, status_classes(EventStatus::InProgress));
    assert!(placed[0].status.pulse);
}

#[test]
fn layout_of_empty_input_is_empty() {
    assert!(layout(&[]).is_empty());
}

#[test]
fn builtin_roadmap_alternates_strictly() {
    let catalog = catalog::Catalog::builtin().expect("builtin catalog");
    let placed = layout(&catalog.roadmap.events);
    assert_eq!(placed.len(), catalog.roadmap.events.len());
    for pair in placed.windows(2) {
        assert_ne!(pair[0].side, pair[1].side);
    }
    assert_eq!(placed[0].side, Side::Left);
}

#[test]
fn track_icon_skips_joint_milestones() {
    assert_eq!(track_icon(Some(Track::Ai)), Some(Icon::Brain));
    assert_eq!(track_icon(Some(Track::Core)), Some(Icon::Cpu));
    assert_eq!(track_icon(Some(Track::Both)), None);
    assert_eq!(track_icon(None), None);
}

#[test]
fn column_class_pads_toward_axis() {
    assert!(Side::Left.column_class().contains("pr-8"));
    assert!(Side::Right.column_class().contains("pl-8"));
}

#[test]
fn right_rows_are_mirrored() {
    assert!(!Side::Left.row_class().contains("flex-row-reverse"));
    assert!(Side::Right.row_class().contains("flex-row-reverse"));
}
