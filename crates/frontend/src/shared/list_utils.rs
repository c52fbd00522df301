/// Helpers for comma-separated list fields (components, keywords)

/// Split a comma-separated field into trimmed, non-empty entries.
///
/// Entries are not deduplicated: `"a, a"` yields `["a", "a"]`.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append `token` to a comma-separated field unless it is already listed.
///
/// Matching is exact and case-sensitive against the trimmed entries. When the
/// token is present the value is returned unchanged.
pub fn append_token(value: &str, token: &str) -> String {
    let mut entries = split_list(value);
    if entries.iter().any(|entry| entry == token) {
        return value.to_string();
    }
    entries.push(token.to_string());
    entries.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(split_list("a, ,b ,"), vec!["a", "b"]);
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn test_split_list_keeps_duplicates() {
        assert_eq!(split_list("a,a"), vec!["a", "a"]);
    }

    #[test]
    fn test_append_token_is_idempotent() {
        let once = append_token("", "svc-a");
        let twice = append_token(&once, "svc-a");
        assert_eq!(once, "svc-a");
        assert_eq!(twice, "svc-a");
        assert_eq!(split_list(&twice), vec!["svc-a"]);
    }

    #[test]
    fn test_append_token_joins_with_comma() {
        assert_eq!(append_token("svc-a", "svc-b"), "svc-a, svc-b");
        assert_eq!(append_token("svc-a, ", "svc-b"), "svc-a, svc-b");
    }

    #[test]
    fn test_append_token_is_case_sensitive() {
        assert_eq!(append_token("Error", "error"), "Error, error");
    }

    #[test]
    fn test_present_token_leaves_value_untouched() {
        assert_eq!(append_token(" svc-a ,svc-b", "svc-b"), " svc-a ,svc-b");
    }
}
