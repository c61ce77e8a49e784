use fixit::model::{BugReport, FileEntry, FixResult, RefusalReason};
use fixit::signature::generate_fix;

const TRACEBACK: &str = concat!(
    "Traceback (most recent call last):\n",
    "  File \"app.py\", line 3, in <module>\n",
    "IndexError: list index out of range"
);

fn python_report(error: &str, files: &[(&str, &str)]) -> BugReport {
    BugReport {
        language: "python".to_string(),
        error: error.to_string(),
        files: files
            .iter()
            .map(|(path, content)| FileEntry {
                path: path.to_string(),
                content: content.to_string(),
            })
            .collect(),
    }
}

fn patch(result: FixResult) -> String {
    match result {
        FixResult::Patch { diff } => diff,
        FixResult::Refusal { reason } => panic!("expected patch, got refusal: {reason}"),
    }
}

fn refusal(result: FixResult) -> RefusalReason {
    match result {
        FixResult::Refusal { reason } => reason,
        FixResult::Patch { diff } => panic!("expected refusal, got patch:\n{diff}"),
    }
}

#[test]
fn guards_index_access_on_traceback_line() {
    let source = "items = [1, 2, 3]\ni = 5\nvalue = items[i]\nprint(value)\n";
    let report = python_report(TRACEBACK, &[("app.py", source)]);
    let diff = patch(generate_fix(&report));
    assert_eq!(
        diff,
        concat!(
            "--- app.py\n",
            "+++ app.py\n",
            "@@ -1,4 +1,4 @@\n",
            " items = [1, 2, 3]\n",
            " i = 5\n",
            "-value = items[i]\n",
            "+value = (items[i] if i < len(items) else None)\n",
            " print(value)\n"
        )
    );
}

#[test]
fn only_first_access_on_line_is_guarded() {
    let source = "a = 1\nb = 2\npair = xs[i] + ys[j]\n";
    let report = python_report(TRACEBACK, &[("app.py", source)]);
    let diff = patch(generate_fix(&report));
    assert!(diff.contains("+pair = (xs[i] if i < len(xs) else None) + ys[j]\n"));
    assert!(!diff.contains("len(ys)"));
}

#[test]
fn spaced_access_is_normalized_in_guard() {
    let source = "# one\n# two\nvalue = data [ i ]\n";
    let report = python_report(TRACEBACK, &[("app.py", source)]);
    let diff = patch(generate_fix(&report));
    assert!(diff.contains("-value = data [ i ]\n"));
    assert!(diff.contains("+value = (data[i] if i < len(data) else None)\n"));
}

#[test]
fn first_traceback_frame_decides_the_file() {
    let error = concat!(
        "Traceback (most recent call last):\n",
        "  File \"outer.py\", line 2, in <module>\n",
        "  File \"inner.py\", line 1, in pick\n",
        "IndexError: list index out of range"
    );
    let report = python_report(
        error,
        &[
            ("outer.py", "import inner\nx = vals[n]\n"),
            ("inner.py", "y = other[k]\n"),
        ],
    );
    let diff = patch(generate_fix(&report));
    assert!(diff.starts_with("--- outer.py\n+++ outer.py\n"));
    assert!(diff.contains("len(vals)"));
    assert!(!diff.contains("len(other)"));
}

#[test]
fn untouched_crlf_lines_survive_byte_exact() {
    let error = "  File \"app.py\", line 1, in f\nIndexError";
    let source = "a = x[i]\r\nb = 2\r\n";
    let report = python_report(error, &[("app.py", source)]);
    let diff = patch(generate_fix(&report));
    assert!(diff.contains("-a = x[i]\r\n"));
    assert!(diff.contains("+a = (x[i] if i < len(x) else None)\r\n"));
    assert!(diff.contains(" b = 2\r\n"));
}

#[test]
fn duplicate_paths_use_the_last_entry() {
    let error = "  File \"app.py\", line 1, in f\nIndexError";
    let report = python_report(
        error,
        &[("app.py", "print(1)\n"), ("app.py", "v = seq[i]\n")],
    );
    let diff = patch(generate_fix(&report));
    assert!(diff.contains("len(seq)"));
}

#[test]
fn missing_frame_refused() {
    let report = python_report("IndexError: list index out of range", &[("app.py", "x\n")]);
    assert_eq!(
        refusal(generate_fix(&report)),
        RefusalReason::NoTracebackLocation
    );
}

#[test]
fn frame_line_zero_refused_as_missing() {
    let error = "  File \"app.py\", line 0, in f\nIndexError";
    let report = python_report(error, &[("app.py", "x = a[i]\n")]);
    assert_eq!(
        refusal(generate_fix(&report)),
        RefusalReason::NoTracebackLocation
    );
}

#[test]
fn file_not_supplied_refused() {
    let report = python_report(TRACEBACK, &[("other.py", "x = a[i]\n")]);
    assert_eq!(
        refusal(generate_fix(&report)),
        RefusalReason::FileNotProvided
    );
}

#[test]
fn traceback_line_past_end_refused() {
    let report = python_report(TRACEBACK, &[("app.py", "x = a[i]\n")]);
    assert_eq!(
        refusal(generate_fix(&report)),
        RefusalReason::TracebackLineOutOfRange
    );
}

#[test]
fn empty_file_refused_as_out_of_range() {
    let error = "  File \"app.py\", line 1, in f\nIndexError";
    let report = python_report(error, &[("app.py", "")]);
    assert_eq!(
        refusal(generate_fix(&report)),
        RefusalReason::TracebackLineOutOfRange
    );
}

#[test]
fn trailing_newline_does_not_extend_the_file() {
    // Three lines plus trailing newline; frame points one past the end.
    let error = "  File \"app.py\", line 4, in f\nIndexError";
    let report = python_report(error, &[("app.py", "a\nb\nc\n")]);
    assert_eq!(
        refusal(generate_fix(&report)),
        RefusalReason::TracebackLineOutOfRange
    );
}

#[test]
fn huge_line_number_refused_as_out_of_range() {
    let error = "  File \"app.py\", line 99999999999999999999, in f\nIndexError";
    let report = python_report(error, &[("app.py", "x = a[i]\n")]);
    assert_eq!(
        refusal(generate_fix(&report)),
        RefusalReason::TracebackLineOutOfRange
    );
}

#[test]
fn line_without_index_access_refused() {
    let error = "  File \"app.py\", line 1, in f\nIndexError";
    for line in ["print(total)\n", "v = items[0]\n", "v = obj.attr\n"] {
        let report = python_report(error, &[("app.py", line)]);
        assert_eq!(
            refusal(generate_fix(&report)),
            RefusalReason::NoIndexAccess
        );
    }
}
