//! Content rules applied to a parsed profile.
//!
//! Rules run in a fixed order and the order is observable in the report:
//!
//! 1. Required fields (`name`, `description`, `marketplaces`). The first
//!    missing field is the only finding for the document.
//! 2. Advisory checks (name format, description length, plugin count). These
//!    only ever add warnings.
//! 3. Marketplace checks in document order. A bad `source` is recorded and the
//!    same entry's `repo` is still checked; a bad `repo` ends the document.

use crate::profile::{Marketplace, Profile};
use crate::report::Findings;
use regex::Regex;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

static REPO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^/]+/[^/]+$").unwrap());

/// The only marketplace source currently accepted.
pub const SUPPORTED_SOURCE: &str = "github";

/// Descriptions shorter than this many characters get a warning.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Profiles with more plugins than this get a warning.
pub const MAX_PLUGINS: usize = 10;

/// Apply every rule to `profile` and return the findings in check order.
pub fn check_profile(profile: &Profile) -> Findings {
    let mut findings = Findings::default();

    if let Some(message) = missing_required_field(profile) {
        findings.error(message);
        return findings;
    }

    advisory_checks(profile, &mut findings);
    marketplace_checks(&profile.marketplaces, &mut findings);

    findings
}

/// Findings for a document whose bytes could not be read.
pub fn read_failure(cause: &std::io::Error) -> Findings {
    let mut findings = Findings::default();
    findings.error(format!("Failed to read file: {}", cause));
    findings
}

/// Findings for a document that is not a valid profile JSON object.
pub fn parse_failure(cause: &serde_json::Error) -> Findings {
    let mut findings = Findings::default();
    findings.error(format!("Invalid JSON: {}", cause));
    findings
}

/// Parse raw bytes and check the resulting profile.
pub fn check_document(bytes: &[u8]) -> Findings {
    match Profile::from_slice(bytes) {
        Ok(profile) => check_profile(&profile),
        Err(e) => parse_failure(&e),
    }
}

fn missing_required_field(profile: &Profile) -> Option<&'static str> {
    if profile.name.is_empty() {
        Some("Missing required field: name")
    } else if profile.description.is_empty() {
        Some("Missing required field: description")
    } else if profile.marketplaces.is_empty() {
        Some("Missing required field: marketplaces (must have at least one)")
    } else {
        None
    }
}

fn advisory_checks(profile: &Profile, findings: &mut Findings) {
    if !NAME_RE.is_match(&profile.name) {
        findings.warning("Name should be lowercase alphanumeric with hyphens only");
    }

    if profile.description.chars().count() < MIN_DESCRIPTION_CHARS {
        findings.warning("Description should be at least 10 characters");
    }

    if profile.plugins.len() > MAX_PLUGINS {
        findings.warning(format!(
            "Profile has many plugins ({}). Consider splitting or removing unused ones.",
            profile.plugins.len()
        ));
    }
}

fn marketplace_checks(marketplaces: &[Marketplace], findings: &mut Findings) {
    for marketplace in marketplaces {
        if marketplace.source != SUPPORTED_SOURCE {
            findings.error(format!(
                "Invalid marketplace source: {} (only 'github' is supported)",
                marketplace.source
            ));
        }
        // A malformed repo stops the document; later entries are not checked.
        if !REPO_RE.is_match(&marketplace.repo) {
            findings.error(format!(
                "Invalid marketplace repo format: {} (should be owner/repo)",
                marketplace.repo
            ));
            return;
        }
    }
}
