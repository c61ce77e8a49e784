use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// A structured bug report, the single input to the fix pipeline.
///
/// All fields default to empty so partial reports still decode; the
/// signature preconditions decide what is actually usable.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct BugReport {
    /// Language the report claims the defect is in (matched case-insensitively).
    #[serde(default)]
    pub language: String,
    /// Raw error text: a traceback, a sanitizer report, a one-line message.
    #[serde(default)]
    pub error: String,
    /// Source files the reporter supplied. Only these may be patched.
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

impl BugReport {
    /// Path -> content lookup over the supplied files. Later entries with
    /// the same path shadow earlier ones.
    pub fn file_map(&self) -> HashMap<&str, &str> {
        let mut map = HashMap::new();
        for entry in &self.files {
            map.insert(entry.path.as_str(), entry.content.as_str());
        }
        map
    }
}

/// A file/line pair extracted from error text. 1-based; never guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub file: String,
    pub line: usize,
}

/// Outcome of a fix attempt: exactly one patch or one refusal per report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixResult {
    /// Unified diff against the reported file, ready to print verbatim.
    Patch { diff: String },
    Refusal { reason: RefusalReason },
}

impl FixResult {
    pub fn patch(diff: String) -> Self {
        FixResult::Patch { diff }
    }

    pub fn refusal(reason: RefusalReason) -> Self {
        FixResult::Refusal { reason }
    }
}

/// Why a fix was refused. Each variant renders a stable one-line message;
/// callers and tests rely on the exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalReason {
    UnsupportedSignature,
    NoTracebackLocation,
    FileNotProvided,
    TracebackLineOutOfRange,
    NoIndexAccess,
    NoErrorLocation,
    ErrorLineOutOfRange,
    NoAddressReturn,
    DeclarationNotFound,
    AlreadyStatic,
}

impl RefusalReason {
    pub fn detail(&self) -> &'static str {
        match self {
            RefusalReason::UnsupportedSignature => "unsupported error or language",
            RefusalReason::NoTracebackLocation => "no traceback file/line found",
            RefusalReason::FileNotProvided => "source file not provided",
            RefusalReason::TracebackLineOutOfRange => "traceback line out of range",
            RefusalReason::NoIndexAccess => "no index access found",
            RefusalReason::NoErrorLocation => "no error file/line found",
            RefusalReason::ErrorLineOutOfRange => "error line out of range",
            RefusalReason::NoAddressReturn => "no return-of-address found",
            RefusalReason::DeclarationNotFound => "variable declaration not found",
            RefusalReason::AlreadyStatic => "variable already static",
        }
    }
}

impl fmt::Display for RefusalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot safely apply a minimal fix because: {}.",
            self.detail()
        )
    }
}
