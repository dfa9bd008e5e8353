//! Shared test utilities for the vouch workspace.
//!
//! Death tests run `vouch-probe` in a subprocess and only see its exit status
//! and stderr. The helpers here pick the check diagnostic out of everything
//! else the panic runtime prints around it.

use std::process::ExitStatus;

/// A `<file>:<line>:<column>: [<function>: ]<message>` line, split apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub file: &'a str,
    pub line: u32,
    pub column: u32,
    pub function: &'a str,
    pub message: &'a str,
}

/// Parse one diagnostic line. Returns `None` for anything else, including
/// the runtime's own `thread '…' panicked at …` lines.
pub fn parse_diagnostic(text: &str) -> Option<Diagnostic<'_>> {
    for (idx, _) in text.match_indices(':') {
        let file = &text[..idx];
        if file.is_empty() || file.contains(char::is_whitespace) {
            continue;
        }
        let rest = &text[idx + 1..];
        let Some((line, rest)) = rest.split_once(':') else {
            continue;
        };
        let Some((column, rest)) = rest.split_once(": ") else {
            continue;
        };
        let (Ok(line), Ok(column)) = (line.parse::<u32>(), column.parse::<u32>()) else {
            continue;
        };

        let (function, message) = match rest.split_once(": ") {
            Some((head, tail)) if is_item_path(head) => (head, tail),
            _ => ("", rest),
        };
        return Some(Diagnostic {
            file,
            line,
            column,
            function,
            message,
        });
    }
    None
}

/// Every diagnostic line in captured stderr, in order.
pub fn diagnostics(stderr: &str) -> Vec<Diagnostic<'_>> {
    stderr.lines().filter_map(parse_diagnostic).collect()
}

/// Replace line and column numbers with placeholders so snapshots survive edits.
pub fn normalize_positions(diagnostic: &Diagnostic<'_>) -> String {
    let mut out = format!("{}:LINE:COL: ", diagnostic.file.replace('\\', "/"));
    if !diagnostic.function.is_empty() {
        out.push_str(diagnostic.function);
        out.push_str(": ");
    }
    out.push_str(diagnostic.message);
    out
}

/// `true` if the process ended through an abort rather than an exit code.
pub fn terminated_by_abort(status: &ExitStatus) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        const SIGABRT: i32 = 6;
        status.signal() == Some(SIGABRT)
    }
    #[cfg(windows)]
    {
        // `__fastfail`, which the Rust runtime uses to abort.
        const STATUS_STACK_BUFFER_OVERRUN: u32 = 0xC000_0409;
        status.code().map(|code| code as u32) == Some(STATUS_STACK_BUFFER_OVERRUN)
    }
    #[cfg(not(any(unix, windows)))]
    {
        !status.success()
    }
}

fn is_item_path(s: &str) -> bool {
    !s.is_empty()
        && s.split("::")
            .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_alphanumeric() || c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_line() {
        let d = parse_diagnostic("crates/a/src/probe.rs:35:13: vouch_probe::probe: bound exceeded")
            .unwrap();
        assert_eq!(d.file, "crates/a/src/probe.rs");
        assert_eq!(d.line, 35);
        assert_eq!(d.column, 13);
        assert_eq!(d.function, "vouch_probe::probe");
        assert_eq!(d.message, "bound exceeded");
    }

    #[test]
    fn parses_line_without_function() {
        let d = parse_diagnostic("src/main.rs:1:1: a message: with a colon").unwrap();
        assert_eq!(d.function, "");
        assert_eq!(d.message, "a message: with a colon");
    }

    #[test]
    fn skips_runtime_lines() {
        let stderr = "thread 'main' panicked at crates/vouch-core/src/report.rs:139:5:\n\
                      src/probe.rs:10:4: app: boom\n\
                      note: run with `RUST_BACKTRACE=1` environment variable to display a backtrace\n";
        let found = diagnostics(stderr);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "boom");
    }

    #[test]
    fn normalizes_positions() {
        let d = parse_diagnostic("src\\probe.rs:10:4: app: boom").unwrap();
        assert_eq!(normalize_positions(&d), "src/probe.rs:LINE:COL: app: boom");
    }

    #[test]
    fn windows_drive_letters_are_part_of_the_file() {
        let d = parse_diagnostic("C:\\work\\src\\lib.rs:3:9: m").unwrap();
        assert_eq!(d.file, "C:\\work\\src\\lib.rs");
        assert_eq!(d.line, 3);
    }
}
