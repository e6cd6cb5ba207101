//! Client-side email shape check.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// Accept `local@domain.tld`-shaped input.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace anywhere, exactly
/// one `@` with a non-empty local part, and a domain holding at least one `.`
/// that has characters on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_regex_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Members of the regex `\s` class, which differs from `char::is_whitespace`
/// on U+FEFF (a member) and U+0085 (not one).
fn is_regex_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{B}' | '\u{C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}
