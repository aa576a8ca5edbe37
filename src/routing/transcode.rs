//! Identifier to URL segment conversion.
//!
//! # Responsibilities
//! - Turn program identifiers (controller and method names) into URL path segments
//!
//! # Design Decisions
//! - Every upper-case ASCII letter after the first character starts a new word
//! - No acronym detection: `IOError` becomes `i-o-error`
//! - Output is fully lower-cased, so applying the conversion twice is a no-op

/// Convert an identifier into a lowercase, hyphen-delimited URL segment.
///
/// ```
/// use route_binder::routing::transcode;
///
/// assert_eq!(transcode("UserList"), "user-list");
/// assert_eq!(transcode("IOError"), "i-o-error");
/// ```
pub fn transcode(ident: &str) -> String {
    let mut part = String::with_capacity(ident.len() + ident.len() / 2);
    for (i, ch) in ident.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            part.push('-');
        }
        part.push(ch);
    }
    part.to_lowercase()
}
