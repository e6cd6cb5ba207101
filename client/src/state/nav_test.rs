use super::*;

#[test]
fn primary_links_target_expected_routes() {
    let hrefs: Vec<_> = PRIMARY_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, ["/admin", "/profile", "/settings"]);
}

#[test]
fn footer_links_target_help_and_support() {
    let hrefs: Vec<_> = FOOTER_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, ["/help", "/support"]);
}

#[test]
fn every_link_has_a_label() {
    for link in PRIMARY_LINKS.iter().chain(FOOTER_LINKS.iter()) {
        assert!(!link.label.is_empty(), "{}", link.href);
    }
}
