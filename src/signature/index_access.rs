//! Python `IndexError` fixes: wrap the first bare index access on the
//! traceback line in a bounds guard.

use crate::diff;
use crate::lines::SourceLines;
use crate::locate;
use crate::model::{BugReport, FixResult, RefusalReason};
use regex::Regex;
use std::sync::LazyLock;

/// Matches `seq[idx]` with identifier operands only. Literal indices,
/// attribute paths and nested expressions stay unmatched: the guard can
/// only be built for names it can repeat verbatim.
static INDEX_ACCESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_]\w*)\s*\[\s*([A-Za-z_]\w*)\s*\]").expect("Invalid index access regex")
});

pub fn apply(report: &BugReport) -> FixResult {
    let files = report.file_map();

    let Some(site) = locate::traceback_location(&report.error) else {
        return FixResult::refusal(RefusalReason::NoTracebackLocation);
    };
    let Some(content) = files.get(site.file.as_str()).copied() else {
        return FixResult::refusal(RefusalReason::FileNotProvided);
    };

    let lines = SourceLines::parse(content);
    let Some(line) = lines.content(site.line) else {
        return FixResult::refusal(RefusalReason::TracebackLineOutOfRange);
    };
    let Some(caps) = INDEX_ACCESS_REGEX.captures(line) else {
        return FixResult::refusal(RefusalReason::NoIndexAccess);
    };

    let (access, seq, idx) = match (caps.get(0), caps.get(1), caps.get(2)) {
        (Some(access), Some(seq), Some(idx)) => (access.range(), seq.as_str(), idx.as_str()),
        _ => return FixResult::refusal(RefusalReason::NoIndexAccess),
    };
    let guarded = format!("({seq}[{idx}] if {idx} < len({seq}) else None)");

    let mut rewritten = String::with_capacity(line.len() + guarded.len());
    rewritten.push_str(&line[..access.start]);
    rewritten.push_str(&guarded);
    rewritten.push_str(&line[access.end..]);

    match lines.splice(site.line, &rewritten) {
        Some(after) => FixResult::patch(diff::unified_diff(&site.file, content, &after)),
        None => FixResult::refusal(RefusalReason::TracebackLineOutOfRange),
    }
}
