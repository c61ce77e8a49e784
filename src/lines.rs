//! Line table over a source file that keeps every byte accountable.
//!
//! Each line owns its terminator (`\n`, `\r\n`, or nothing for a final
//! unterminated line), so a single-line edit can rebuild the file with
//! every untouched byte intact. A trailing newline does not open an
//! empty final line.

struct LineSpan {
    start: usize,
    content_end: usize,
    end: usize,
}

pub struct SourceLines<'a> {
    source: &'a str,
    lines: Vec<LineSpan>,
}

impl<'a> SourceLines<'a> {
    pub fn parse(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0usize;
        for (idx, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                let content_end = if idx > start && bytes[idx - 1] == b'\r' {
                    idx - 1
                } else {
                    idx
                };
                lines.push(LineSpan {
                    start,
                    content_end,
                    end: idx + 1,
                });
                start = idx + 1;
            }
        }
        if start < bytes.len() {
            lines.push(LineSpan {
                start,
                content_end: bytes.len(),
                end: bytes.len(),
            });
        }
        Self { source, lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when `line_no` (1-based) names an existing line.
    pub fn in_range(&self, line_no: usize) -> bool {
        line_no >= 1 && line_no <= self.lines.len()
    }

    /// Content of line `line_no` (1-based), terminator excluded.
    pub fn content(&self, line_no: usize) -> Option<&'a str> {
        let span = self.lines.get(line_no.checked_sub(1)?)?;
        Some(&self.source[span.start..span.content_end])
    }

    /// Rebuild the file with line `line_no`'s content replaced. The line
    /// keeps its own terminator; every other byte is copied verbatim.
    pub fn splice(&self, line_no: usize, new_content: &str) -> Option<String> {
        let span = self.lines.get(line_no.checked_sub(1)?)?;
        let mut out = String::with_capacity(self.source.len() + new_content.len());
        out.push_str(&self.source[..span.start]);
        out.push_str(new_content);
        out.push_str(&self.source[span.content_end..]);
        Some(out)
    }
}
