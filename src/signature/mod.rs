//! The closed set of defect signatures this tool recognizes, and the
//! dispatcher that routes a report to the first signature claiming it.

pub mod index_access;
pub mod stack_return;

use crate::model::{BugReport, FixResult, RefusalReason};
use serde::Serialize;

/// A recognized defect signature: the languages it covers and the error
/// substrings that mark it.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureSpec {
    pub name: &'static str,
    pub languages: &'static [&'static str],
    pub error_markers: &'static [&'static str],
}

static SIGNATURE_SPECS: &[SignatureSpec] = &[
    SignatureSpec {
        name: "index-out-of-bounds",
        languages: &["python"],
        error_markers: &["IndexError"],
    },
    SignatureSpec {
        name: "stack-use-after-return",
        languages: &["c", "c++"],
        error_markers: &["use-after-return", "stack-use-after-return"],
    },
];

pub fn signature_specs() -> &'static [SignatureSpec] {
    SIGNATURE_SPECS
}

impl SignatureSpec {
    fn claims(&self, language: &str, error: &str) -> bool {
        self.languages.contains(&language)
            && self
                .error_markers
                .iter()
                .any(|marker| error.contains(marker))
    }
}

/// Route a report through the registry. Every report yields exactly one
/// patch or one refusal. The declared language is matched after ASCII
/// lowercasing; the first claiming signature decides.
pub fn generate_fix(report: &BugReport) -> FixResult {
    let language = report.language.to_ascii_lowercase();
    for spec in SIGNATURE_SPECS {
        if !spec.claims(&language, &report.error) {
            continue;
        }
        return match spec.name {
            "index-out-of-bounds" => index_access::apply(report),
            "stack-use-after-return" => stack_return::apply(report),
            _ => continue,
        };
    }
    FixResult::Refusal {
        reason: RefusalReason::UnsupportedSignature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        for (i, a) in SIGNATURE_SPECS.iter().enumerate() {
            for b in &SIGNATURE_SPECS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_claims_is_case_sensitive_on_markers() {
        let spec = &SIGNATURE_SPECS[0];
        assert!(spec.claims("python", "IndexError: list index out of range"));
        assert!(!spec.claims("python", "indexerror: list index out of range"));
        assert!(!spec.claims("rust", "IndexError"));
    }
}
