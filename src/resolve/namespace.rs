//! Controller-namespace accumulation.
//!
//! Every matched node contributes one PascalCase label. A `namespace`
//! override restarts accumulation from the node that declared it, and
//! the synthetic root label is dropped from the published namespace
//! once real segments exist (unless a reset already discarded it).

/// Append the label for a matched node, clearing first on a reset.
pub(crate) fn push(segments: &mut Vec<String>, name: &str, reset: bool) {
    if reset {
        segments.clear();
    }
    segments.push(pascal_label(name));
}

/// Publish the final namespace: the synthetic root label is implicit,
/// not addressable, once child segments accumulated. A reset already
/// removed it, so only unreset namespaces drop their head.
pub(crate) fn finish(mut segments: Vec<String>, reset_occurred: bool) -> Vec<String> {
    if !reset_occurred && segments.len() > 1 {
        segments.remove(0);
    }
    segments
}

/// Normalize a node name into its namespace label.
///
/// Separator and wildcard characters are trimmed, an empty result maps
/// to the canonical root label, and word boundaries (`-`, `_`)
/// capitalize: `not-found` becomes `NotFound`.
#[must_use]
pub fn pascal_label(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c| c == '/' || c == '?');
    if trimmed.is_empty() {
        return "Index".to_string();
    }

    trimmed
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_pascal_case() {
        assert_eq!(pascal_label("page1"), "Page1");
        assert_eq!(pascal_label("not-found"), "NotFound");
        assert_eq!(pascal_label("my_long_name"), "MyLongName");
    }

    #[test]
    fn prefix_characters_trimmed() {
        assert_eq!(pascal_label("/?id"), "Id");
        assert_eq!(pascal_label("/shop"), "Shop");
    }

    #[test]
    fn empty_name_is_index() {
        assert_eq!(pascal_label(""), "Index");
        assert_eq!(pascal_label("/"), "Index");
    }

    #[test]
    fn reset_clears_before_appending() {
        let mut segments = vec!["Index".to_string(), "A".to_string()];
        push(&mut segments, "b", true);
        assert_eq!(segments, vec!["B"]);
    }

    #[test]
    fn finish_drops_root_label_when_unreset() {
        let segments = vec!["Index".to_string(), "A".to_string(), "B".to_string()];
        assert_eq!(finish(segments, false), vec!["A", "B"]);
    }

    #[test]
    fn finish_keeps_single_root_label() {
        let segments = vec!["Index".to_string()];
        assert_eq!(finish(segments, false), vec!["Index"]);
    }

    #[test]
    fn finish_keeps_everything_after_reset() {
        let segments = vec!["B".to_string(), "C".to_string()];
        assert_eq!(finish(segments, true), vec!["B", "C"]);
    }
}
