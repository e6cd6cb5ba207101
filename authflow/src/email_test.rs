use super::*;

#[test]
fn accepts_plain_address() {
    assert!(is_valid_email("alice@example.com"));
}

#[test]
fn accepts_subdomains_and_trailing_dot_after_valid_dot() {
    assert!(is_valid_email("a@mail.example.org"));
    assert!(is_valid_email("a@b.c."));
}

#[test]
fn rejects_missing_at() {
    assert!(!is_valid_email("not-an-email"));
}

#[test]
fn rejects_empty_local_or_domain() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("alice@"));
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_domain_without_inner_dot() {
    assert!(!is_valid_email("alice@localhost"));
    assert!(!is_valid_email("alice@.com"));
    assert!(!is_valid_email("alice@com."));
}

#[test]
fn rejects_second_at_and_whitespace() {
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("ali ce@example.com"));
    assert!(!is_valid_email(" alice@example.com"));
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    assert!(!is_valid_email("\u{FEFF}alice@example.com"));
    assert!(!is_valid_email("alice@exa\u{FEFF}mple.com"));
    assert!(!is_valid_email("alice@example.com\u{3000}"));
}

#[test]
fn next_line_control_is_not_whitespace() {
    assert!(is_valid_email("ali\u{85}ce@example.com"));
}
