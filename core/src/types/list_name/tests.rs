use super::*;

#[test]
fn list_name_normal_usage() {
    let name = ListName::try_from("work").unwrap();
    assert_eq!(name.as_str(), "work");
}

#[test]
fn list_name_is_trimmed() {
    let name = ListName::try_from("  feature-x ").unwrap();
    assert_eq!(name.as_str(), "feature-x");
}

#[test]
fn list_name_rejects_empty_string() {
    let result = ListName::try_from("");
    assert!(matches!(result, Err(ListNameError::NotEmptyViolated)));
}

#[test]
fn list_name_rejects_whitespace_string() {
    ListName::try_from("   ").unwrap_err();
}

#[test]
fn list_name_rejects_reserved_identifier() {
    let result = ListName::try_from(DEFAULT_SNAPSHOT_NAME);
    assert!(matches!(result, Err(ListNameError::PredicateViolated)));
}

#[test]
fn list_name_rejects_path_components() {
    for bad in ["a/b", "..", ".", "dir\\file", "nul\0byte"] {
        assert!(ListName::try_from(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn list_name_rejects_too_long_string() {
    let long_string = "a".repeat(MAX_LIST_NAME_LENGTH + 1);
    ListName::try_from(long_string.as_str()).unwrap_err();
}

#[test]
fn list_name_ordering_is_lexicographic() {
    let mut names: Vec<ListName> = ["beta", "alpha", "Zed"]
        .into_iter()
        .map(|s| ListName::try_from(s).unwrap())
        .collect();
    names.sort();
    let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
    assert_eq!(names, ["Zed", "alpha", "beta"]);
}
