// src/domain/article/services/mod.rs
//! Backend-independent tag filtering.
//!
//! Storage backends disagree on tag case sensitivity, so the service filters
//! the full collection itself. A stored tag matches a query when it equals
//! the query verbatim, its all-lowercase form, or its all-uppercase form.
//! Mixed-case variants other than the verbatim query (`"gO"` for `"Go"`) do
//! not match.

/// Returns `true` when `tags` contains `query` under the three-form rule.
pub fn tags_match(tags: &[String], query: &str) -> bool {
    let mut sorted: Vec<&str> = tags.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let lower = query.to_lowercase();
    let upper = query.to_uppercase();

    [query, lower.as_str(), upper.as_str()]
        .into_iter()
        .any(|candidate| sorted.binary_search(&candidate).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn matches_verbatim_lower_and_upper_forms() {
        assert!(tags_match(&tags(&["Go"]), "Go"));
        assert!(tags_match(&tags(&["go"]), "Go"));
        assert!(tags_match(&tags(&["GO"]), "Go"));
        assert!(!tags_match(&tags(&["Rust"]), "Go"));
    }

    #[test]
    fn mixed_case_variants_do_not_match() {
        assert!(!tags_match(&tags(&["gO"]), "Go"));
        assert!(!tags_match(&tags(&["Golang"]), "golang"));
    }

    #[test]
    fn order_of_stored_tags_is_irrelevant() {
        let stored = tags(&["zig", "Rust", "async", "GOLANG"]);
        assert!(tags_match(&stored, "golang"));
        assert!(tags_match(&stored, "Rust"));
        assert!(!tags_match(&stored, "rust"));
        assert!(!tags_match(&stored, "python"));
    }

    #[test]
    fn empty_tag_list_never_matches() {
        assert!(!tags_match(&[], "Go"));
    }
}
