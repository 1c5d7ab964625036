//! Property-based tests for the content rules

use profile_validator::profile::{Marketplace, Profile};
use profile_validator::rules::{check_profile, MAX_PLUGINS};
use proptest::prelude::*;

fn profile(name: String, description: String, plugins: usize, repos: Vec<String>) -> Profile {
    Profile {
        name,
        description,
        plugins: (0..plugins).map(|i| format!("plugin-{}", i)).collect(),
        marketplaces: repos
            .into_iter()
            .map(|repo| Marketplace {
                source: "github".to_string(),
                repo,
            })
            .collect(),
        ..Profile::default()
    }
}

/// Checking the same profile twice gives the same findings
#[test]
fn test_check_is_deterministic() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                ".{0,16}",
                ".{0,24}",
                0usize..20,
                proptest::collection::vec(".{0,12}", 0..4),
            ),
            |(name, description, plugins, repos)| {
                let p = profile(name, description, plugins, repos);
                assert_eq!(check_profile(&p), check_profile(&p));
                Ok(())
            },
        )
        .unwrap();
}

/// Warnings never turn into errors
#[test]
fn test_advisory_rules_never_error() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &("[A-Za-z0-9_ -]{1,16}", ".{1,24}", 0usize..30),
            |(name, description, plugins)| {
                let p = profile(name, description, plugins, vec!["owner/repo".to_string()]);
                let findings = check_profile(&p);
                prop_assert!(findings.errors.is_empty());
                prop_assert!(findings.warnings.len() <= 3);
                prop_assert_eq!(
                    findings.warnings.iter().any(|w| w.starts_with("Profile has many plugins")),
                    plugins > MAX_PLUGINS
                );
                Ok(())
            },
        )
        .unwrap();
}

/// Exactly the owner/repo shape is accepted
#[test]
fn test_owner_repo_shape() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[^/]{1,10}", "[^/]{1,10}"), |(owner, repo)| {
            let ok = profile(
                "ok".to_string(),
                "long enough text".to_string(),
                0,
                vec![format!("{}/{}", owner, repo)],
            );
            prop_assert!(check_profile(&ok).errors.is_empty());

            let nested = profile(
                "ok".to_string(),
                "long enough text".to_string(),
                0,
                vec![format!("{}/{}/{}", owner, repo, owner)],
            );
            prop_assert_eq!(check_profile(&nested).errors.len(), 1);
            Ok(())
        })
        .unwrap();
}
