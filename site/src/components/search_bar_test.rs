use super::*;

#[test]
fn search_needle_trims_whitespace() {
    assert_eq!(search_needle("  lee "), "lee");
    assert_eq!(search_needle("   "), "");
}

#[test]
fn no_match_message_is_absent_for_blank_terms() {
    assert_eq!(no_match_message(""), None);
    assert_eq!(no_match_message("  "), None);
}

#[test]
fn no_match_message_quotes_trimmed_term() {
    assert_eq!(no_match_message(" zig "), Some("No resources match \u{201c}zig\u{201d}.".to_owned()));
}
