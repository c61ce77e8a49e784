//! Bug report intake: raw payload in, `BugReport` out.

use crate::config::Config;
use crate::model::BugReport;
use crate::util;
use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

/// Printed verbatim when the payload does not decode into a bug report.
pub const INPUT_NOT_JSON: &str = "Input must be JSON.";

/// Decode a raw payload. Invalid JSON and JSON of the wrong shape are the
/// same failure; absent fields default to empty, unknown fields are
/// ignored.
pub fn parse_report(raw: &str) -> Option<BugReport> {
    serde_json::from_str(raw).ok()
}

/// Read the raw report text from `path`, or from stdin when no path is
/// given. Oversized payloads are rejected before decoding.
pub fn read_report_text(path: Option<&Path>) -> Result<String> {
    let raw = match path {
        Some(path) => util::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };
    let max = Config::get().max_report_bytes;
    if raw.len() > max {
        bail!("report payload is {} bytes, limit is {}", raw.len(), max);
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_defaults() {
        let report = parse_report("{}").unwrap();
        assert_eq!(report.language, "");
        assert_eq!(report.error, "");
        assert!(report.files.is_empty());
    }

    #[test]
    fn test_parse_report_rejects_wrong_shapes() {
        assert!(parse_report("not json").is_none());
        assert!(parse_report("[1,2,3]").is_none());
        assert!(parse_report(r#"{"files": "nope"}"#).is_none());
        assert!(parse_report(r#"{"files": [{"path": "a.py"}]}"#).is_none());
    }

    #[test]
    fn test_parse_report_ignores_unknown_fields() {
        let report = parse_report(r#"{"language": "python", "severity": "high"}"#).unwrap();
        assert_eq!(report.language, "python");
    }
}
