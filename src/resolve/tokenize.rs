//! Request-path tokenization.
//!
//! [`tokenize`] splits a raw path into `/`-prefixed segment tokens for
//! uniform matching against route-node children. Empty components from
//! double or trailing slashes are dropped, so malformed paths normalize
//! instead of failing; the root path produces no tokens at all.

/// Split a request path into ordered, `/`-prefixed segment tokens.
#[must_use]
pub fn tokenize(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| format!("/{s}"))
        .collect()
}

/// Strip a configured application base path from the front of `path`.
///
/// The resolver expects paths with the base already removed; this is
/// the helper the web-facing caller uses to do that. A base of `""` or
/// `"/"` leaves the path untouched, and stripping the whole path yields
/// `"/"` rather than an empty string.
#[must_use]
pub fn strip_base<'p>(path: &'p str, base: &str) -> &'p str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_slash_prefixed() {
        assert_eq!(tokenize("/shop/item/5"), vec!["/shop", "/item", "/5"]);
    }

    #[test]
    fn root_path_yields_no_tokens() {
        assert!(tokenize("/").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn double_and_trailing_slashes_normalize() {
        assert_eq!(tokenize("//shop///item/"), vec!["/shop", "/item"]);
    }

    #[test]
    fn base_path_stripping() {
        assert_eq!(strip_base("/app/shop", "/app"), "/shop");
        assert_eq!(strip_base("/app", "/app"), "/");
        assert_eq!(strip_base("/shop", ""), "/shop");
        assert_eq!(strip_base("/shop", "/"), "/shop");
        // Not a prefix: left untouched
        assert_eq!(strip_base("/application", "/app"), "/application");
    }
}
