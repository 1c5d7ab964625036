//! Library-level validation behavior over real profile trees.

use super::test_utils::{valid_profile_named, ProfileTree, VALID_PROFILE};
use profile_validator::{ProfileValidator, ValidationReport};

fn validate(tree: &ProfileTree) -> ValidationReport {
    ProfileValidator::new(tree.root()).validate().unwrap()
}

fn messages(report: &ValidationReport) -> Vec<String> {
    report.errors.iter().map(|e| e.message.clone()).collect()
}

#[test]
fn test_valid_profile_passes() {
    let tree = ProfileTree::new();
    tree.write("web.json", VALID_PROFILE);

    let report = validate(&tree);
    assert_eq!(report.checked, 1);
    assert_eq!(report.passed, 1);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_each_missing_required_field_is_a_single_error() {
    let tree = ProfileTree::new();
    tree.write("no-name.json", r#"{"description": "x", "marketplaces": []}"#)
        .write(
            "no-description.json",
            r#"{"name": "Bad Name", "marketplaces": [{"source": "gitlab", "repo": "x"}]}"#,
        )
        .write(
            "no-marketplaces.json",
            r#"{"name": "Bad Name", "description": "tiny", "plugins": ["a","b","c","d","e","f","g","h","i","j","k"]}"#,
        );

    let report = validate(&tree);
    assert_eq!(report.checked, 3);
    assert_eq!(report.failed, 3);
    assert!(report.warnings.is_empty());
    assert_eq!(
        messages(&report),
        vec![
            "Missing required field: description",
            "Missing required field: marketplaces (must have at least one)",
            "Missing required field: name",
        ]
    );
}

#[test]
fn test_gitlab_source_still_checks_repo() {
    let tree = ProfileTree::new();
    tree.write(
        "gitlab.json",
        r#"{"name": "gl", "description": "GitLab hosted plugins",
            "marketplaces": [
                {"source": "gitlab", "repo": "a/b"},
                {"source": "github", "repo": "invalid"},
                {"source": "gitlab", "repo": "never/checked"}
            ]}"#,
    );

    let report = validate(&tree);
    assert_eq!(report.failed, 1);
    assert_eq!(
        messages(&report),
        vec![
            "Invalid marketplace source: gitlab (only 'github' is supported)",
            "Invalid marketplace repo format: invalid (should be owner/repo)",
        ]
    );
}

#[test]
fn test_eleven_plugins_warns_once() {
    let tree = ProfileTree::new();
    let plugins: Vec<String> = (1..=11).map(|i| format!("\"plugin-{}\"", i)).collect();
    tree.write(
        "big.json",
        &format!(
            r#"{{"name": "big", "description": "Everything and the kitchen sink",
                "plugins": [{}],
                "marketplaces": [{{"source": "github", "repo": "acme/plugins"}}]}}"#,
            plugins.join(",")
        ),
    );

    let report = validate(&tree);
    assert_eq!(report.passed, 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("11"));
}

#[test]
fn test_passed_plus_failed_equals_checked() {
    let tree = ProfileTree::new();
    tree.write("a.json", VALID_PROFILE)
        .write("b.json", &valid_profile_named("b"))
        .write(
            "c.json",
            r#"{"name": "c", "description": "two errors in one file",
                "marketplaces": [{"source": "svn", "repo": "nope"}]}"#,
        )
        .write("d.json", "not json");

    let report = validate(&tree);
    assert_eq!(report.checked, 4);
    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 2);
    assert_eq!(report.errors.len(), 3);
    assert_eq!(report.passed + report.failed, report.checked);
}

#[test]
fn test_errors_follow_walk_order() {
    let tree = ProfileTree::new();
    tree.write("z.json", "{}")
        .write("a/inner.json", "{}")
        .write("b.json", "{}");

    let report = validate(&tree);
    let files: Vec<&str> = report.errors.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(files, vec!["a/inner.json", "b.json", "z.json"]);
}
