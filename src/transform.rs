use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// A single literal, case-sensitive substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Text to search for
    pub from: Cow<'static, str>,
    /// Text every occurrence is replaced with
    pub to: Cow<'static, str>,
}

impl Replacement {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self {
            from: Cow::Borrowed(from),
            to: Cow::Borrowed(to),
        }
    }
}

/// The substitutions that reconcile Drogon's `Jsoncpp` spelling with the
/// `jsoncpp` package name exported by the Windows package manager.
pub const DEFAULT_REPLACEMENTS: [Replacement; 3] = [
    Replacement::new("Jsoncpp_lib", "jsoncpp_lib"),
    Replacement::new(
        "find_package(Jsoncpp REQUIRED)",
        "find_package(jsoncpp REQUIRED)",
    ),
    Replacement::new("JSONCPP_INCLUDE_DIRS", "jsoncpp_INCLUDE_DIRS"),
];

/// Result of running a replacement table over a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Buffer after every substitution has been applied
    pub content: String,
    /// Occurrences replaced per table entry, in table order
    pub counts: Vec<usize>,
}

impl Transformed {
    pub fn total_replacements(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Whether the transformed buffer differs from `original`
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Apply every replacement, in order, across the whole buffer.
///
/// Entries with an empty `from` never match.
pub fn apply_replacements(content: &str, replacements: &[Replacement]) -> Transformed {
    let mut buffer = content.to_string();
    let mut counts = Vec::with_capacity(replacements.len());

    for replacement in replacements {
        let from: &str = &replacement.from;
        let to: &str = &replacement.to;
        if from.is_empty() {
            counts.push(0);
            continue;
        }

        let occurrences = buffer.matches(from).count();
        if occurrences > 0 {
            buffer = buffer.replace(from, to);
        }
        debug!(
            "Replaced {} occurrence(s) of '{}' with '{}'",
            occurrences, from, to
        );
        counts.push(occurrences);
    }

    Transformed {
        content: buffer,
        counts,
    }
}

/// Check whether any pattern of the table occurs in `content`
pub fn needs_patch(content: &str, replacements: &[Replacement]) -> bool {
    replacements
        .iter()
        .any(|r| !r.from.is_empty() && content.contains(&*r.from))
}
