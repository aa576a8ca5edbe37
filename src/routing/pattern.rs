//! Pattern template compilation.
//!
//! # Responsibilities
//! - Substitute the built-in `{.struct}` and `{.method}` placeholders
//! - Derive a distinct route per controller method when no method placeholder exists
//!
//! # Design Decisions
//! - Substitution is global: every occurrence of a placeholder is replaced
//! - An explicit `{.method}` always wins over the append fallback
//! - The domain qualifier (`@domain`) is split off once and reattached verbatim
//! - Patterns are otherwise opaque; the method prefix (`get:`) is never parsed

use crate::routing::transcode::transcode;

/// Placeholder replaced by the transcoded controller name.
pub const STRUCT_PLACEHOLDER: &str = "{.struct}";

/// Placeholder replaced by the transcoded method name.
pub const METHOD_PLACEHOLDER: &str = "{.method}";

/// Compile a pattern template for one controller method.
///
/// `{.struct}` and `{.method}` are replaced by the transcoded names. When the
/// template has no `{.method}`, the method name is appended to the path part,
/// in front of any `@domain` suffix.
///
/// ```
/// use route_binder::routing::compile_pattern;
///
/// assert_eq!(compile_pattern("/user/{.struct}/{.method}", "User", "List"), "/user/user/list");
/// assert_eq!(compile_pattern("/api@example.com", "User", "List"), "/api/list@example.com");
/// ```
pub fn compile_pattern(template: &str, struct_name: &str, method_name: &str) -> String {
    let method = transcode(method_name);
    let pattern = template.replace(STRUCT_PLACEHOLDER, &transcode(struct_name));

    if pattern.contains(METHOD_PLACEHOLDER) {
        return pattern.replace(METHOD_PLACEHOLDER, &method);
    }

    match pattern.split_once('@') {
        Some((path, domain)) => format!("{}/{}@{}", path.trim_end_matches('/'), method, domain),
        None => format!("{}/{}", pattern.trim_end_matches('/'), method),
    }
}

/// Replace the built-in placeholders without the append fallback.
///
/// Used when a pattern is bound to one explicit controller method, where the
/// caller's pattern is already the final route.
pub fn substitute_placeholders(template: &str, struct_name: &str, method_name: &str) -> String {
    let mut pattern = template.to_string();
    if pattern.contains(STRUCT_PLACEHOLDER) {
        pattern = pattern.replace(STRUCT_PLACEHOLDER, &transcode(struct_name));
    }
    if pattern.contains(METHOD_PLACEHOLDER) {
        pattern = pattern.replace(METHOD_PLACEHOLDER, &transcode(method_name));
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_placeholders() {
        assert_eq!(
            compile_pattern("/user/{.struct}/{.method}", "User", "List"),
            "/user/user/list"
        );
        assert_eq!(
            compile_pattern("post:/{.struct}/{.method}@admin.example.com", "OrderItem", "BulkCreate"),
            "post:/order-item/bulk-create@admin.example.com"
        );
    }

    #[test]
    fn test_append_fallback() {
        assert_eq!(compile_pattern("/api", "User", "List"), "/api/list");
        assert_eq!(compile_pattern("/api/", "User", "List"), "/api/list");
        assert_eq!(compile_pattern("/api///", "User", "List"), "/api/list");
        assert_eq!(compile_pattern("/{.struct}", "UserList", "ShowAll"), "/user-list/show-all");
    }

    #[test]
    fn test_domain_preserved() {
        assert_eq!(compile_pattern("/api@example.com", "User", "List"), "/api/list@example.com");
        assert_eq!(compile_pattern("/api/@example.com", "User", "List"), "/api/list@example.com");
        // Only the first '@' separates the domain.
        assert_eq!(compile_pattern("/a@b@c", "User", "List"), "/a/list@b@c");
    }

    #[test]
    fn test_global_substitution() {
        assert_eq!(
            compile_pattern("/{.struct}/{.method}/{.struct}/{.method}", "User", "List"),
            "/user/list/user/list"
        );
    }

    #[test]
    fn test_empty_names() {
        assert_eq!(compile_pattern("/api", "User", ""), "/api/");
        assert_eq!(compile_pattern("/{.struct}/{.method}", "", ""), "//");
        assert_eq!(compile_pattern("", "User", "List"), "/list");
    }

    #[test]
    fn test_substitute_without_fallback() {
        assert_eq!(substitute_placeholders("/api", "User", "List"), "/api");
        assert_eq!(substitute_placeholders("/{.struct}/x", "UserList", "List"), "/user-list/x");
        assert_eq!(substitute_placeholders("/{.method}@h", "User", "ShowAll"), "/show-all@h");
    }
}
