//! Defect-site extraction from raw error text.
//!
//! Two narrow strategies, one per error family. Both return the first
//! usable file/line pair or nothing; callers refuse on nothing rather
//! than guessing a location.

use crate::model::Coordinate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches an interpreter traceback frame like `File "app.py", line 3`.
static FRAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"File "([^"]+)", line (\d+)"#).expect("Invalid traceback frame regex")
});

/// Matches a generic `path:line` token as emitted by compilers and sanitizers.
static SITE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+):(\d+)").expect("Invalid site token regex"));

/// Digits-only capture, so a failed parse can only mean overflow.
/// Saturating keeps an oversized line number in the out-of-range family
/// rather than the missing-location one.
fn parse_line_number(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

/// First traceback frame in `error`. Line 0 does not name a real line and
/// counts as extraction failure.
pub fn traceback_location(error: &str) -> Option<Coordinate> {
    let caps = FRAME_REGEX.captures(error)?;
    let line = parse_line_number(&caps[2]);
    if line == 0 {
        return None;
    }
    Some(Coordinate {
        file: caps[1].to_string(),
        line,
    })
}

/// First `path:line` token whose path names a supplied file. That token
/// decides the outcome: a zero line there is extraction failure, and the
/// scan does not resume past it. Tokens with unknown paths are skipped.
pub fn token_location(error: &str, files: &HashMap<&str, &str>) -> Option<Coordinate> {
    for caps in SITE_REGEX.captures_iter(error) {
        let path = &caps[1];
        if !files.contains_key(path) {
            continue;
        }
        let line = parse_line_number(&caps[2]);
        if line == 0 {
            return None;
        }
        return Some(Coordinate {
            file: path.to_string(),
            line,
        });
    }
    None
}
