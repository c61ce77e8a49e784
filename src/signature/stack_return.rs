//! Sanitizer-reported stack-use-after-return fixes: promote the returned
//! local's declaration to static storage.

use crate::diff;
use crate::lines::SourceLines;
use crate::locate;
use crate::model::{BugReport, FixResult, RefusalReason};
use crate::util;
use regex::Regex;
use std::sync::LazyLock;

/// Matches `return &name;` shapes, whitespace-tolerant after the keyword.
static RETURN_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\breturn\s*&\s*([A-Za-z_]\w*)").expect("Invalid return-of-address regex")
});

pub fn apply(report: &BugReport) -> FixResult {
    let files = report.file_map();

    let Some(site) = locate::token_location(&report.error, &files) else {
        return FixResult::refusal(RefusalReason::NoErrorLocation);
    };
    let Some(content) = files.get(site.file.as_str()).copied() else {
        return FixResult::refusal(RefusalReason::NoErrorLocation);
    };

    let lines = SourceLines::parse(content);
    let Some(return_line) = lines.content(site.line) else {
        return FixResult::refusal(RefusalReason::ErrorLineOutOfRange);
    };
    let Some(caps) = RETURN_ADDRESS_REGEX.captures(return_line) else {
        return FixResult::refusal(RefusalReason::NoAddressReturn);
    };
    let var = &caps[1];

    // Nearest line above the return that mentions the variable as a whole
    // word. Not scope-aware; a comment mention wins and gets promoted.
    let mut declaration = None;
    for line_no in (1..site.line).rev() {
        if let Some(candidate) = lines.content(line_no) {
            if util::contains_word(candidate, var) {
                declaration = Some((line_no, candidate));
                break;
            }
        }
    }
    let Some((decl_no, decl)) = declaration else {
        return FixResult::refusal(RefusalReason::DeclarationNotFound);
    };

    let trimmed = decl.trim_start();
    if trimmed.starts_with("static ") {
        return FixResult::refusal(RefusalReason::AlreadyStatic);
    }

    let hoisted = format!("static {trimmed}");
    match lines.splice(decl_no, &hoisted) {
        Some(after) => FixResult::patch(diff::unified_diff(&site.file, content, &after)),
        None => FixResult::refusal(RefusalReason::DeclarationNotFound),
    }
}
