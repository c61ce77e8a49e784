//! Unified-diff rendering for emitted patches.

use crate::config::Config;
use similar::TextDiff;

/// Render a unified diff between two versions of one file, labelled with
/// the reported path on both sides. Equal inputs render as the empty
/// string. Context width comes from configuration.
pub fn unified_diff(path: &str, before: &str, after: &str) -> String {
    unified_diff_with_radius(path, before, after, Config::get().diff_context_lines)
}

pub fn unified_diff_with_radius(
    path: &str,
    before: &str,
    after: &str,
    context_radius: usize,
) -> String {
    let diff = TextDiff::from_lines(before, after);
    diff.unified_diff()
        .context_radius(context_radius)
        .header(path, path)
        .to_string()
}
