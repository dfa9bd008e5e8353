//! Rendering and reporting of failed `Verify` checks.
//!
//! Everything here is `const`, so a failed check inside constant evaluation
//! takes the same path and is rejected by the compiler, while at run time it
//! ends the process.

use std::fmt;

/// Bytes available to a rendered diagnostic.
///
/// A line that does not fit is reported without its function segment, and
/// if that still does not fit, as the bare message. The message itself is
/// never cut, so a message longer than this loses its position.
pub const DIAGNOSTIC_CAPACITY: usize = 1024;

/// Stands in for an empty message.
pub const EMPTY_MESSAGE_MARKER: &str = "check failed";

/// `<file>:<line>:<column>: <function>: <message>` rendered into a fixed buffer.
///
/// Segments are appended whole or dropped, so the contents are always valid
/// UTF-8. An empty function drops its segment; an empty message renders as
/// [`EMPTY_MESSAGE_MARKER`].
#[derive(Clone, Copy)]
pub struct DiagnosticLine {
    buf: [u8; DIAGNOSTIC_CAPACITY],
    len: usize,
    truncated: bool,
}

impl DiagnosticLine {
    pub const fn new(message: &str, line: u32, column: u32, file: &str, function: &str) -> Self {
        let mut out = Self {
            buf: [0; DIAGNOSTIC_CAPACITY],
            len: 0,
            truncated: false,
        };
        out.push_str(file);
        out.push_str(":");
        out.push_u32(line);
        out.push_str(":");
        out.push_u32(column);
        out.push_str(": ");
        if !function.is_empty() {
            out.push_str(function);
            out.push_str(": ");
        }
        if message.is_empty() {
            out.push_str(EMPTY_MESSAGE_MARKER);
        } else {
            out.push_str(message);
        }
        out
    }

    pub const fn as_str(&self) -> &str {
        let (rendered, _) = self.buf.split_at(self.len);
        match std::str::from_utf8(rendered) {
            Ok(text) => text,
            Err(_) => "",
        }
    }

    /// The full line if it fits, else the line without its function segment,
    /// else `None`.
    pub const fn fitted(
        message: &str,
        line: u32,
        column: u32,
        file: &str,
        function: &str,
    ) -> Option<Self> {
        let full = Self::new(message, line, column, file, function);
        if !full.is_truncated() {
            return Some(full);
        }
        let short = Self::new(message, line, column, file, "");
        if short.is_truncated() { None } else { Some(short) }
    }

    /// `true` if some segment did not fit in [`DIAGNOSTIC_CAPACITY`].
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    const fn push_str(&mut self, segment: &str) {
        let bytes = segment.as_bytes();
        if self.truncated || bytes.len() > DIAGNOSTIC_CAPACITY - self.len {
            self.truncated = true;
            return;
        }
        let mut i = 0;
        while i < bytes.len() {
            self.buf[self.len] = bytes[i];
            self.len += 1;
            i += 1;
        }
    }

    const fn push_u32(&mut self, mut value: u32) {
        let mut digits = [0u8; 10];
        let mut count = 0;
        loop {
            digits[count] = b'0' + (value % 10) as u8;
            count += 1;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        if self.truncated || count > DIAGNOSTIC_CAPACITY - self.len {
            self.truncated = true;
            return;
        }
        while count > 0 {
            count -= 1;
            self.buf[self.len] = digits[count];
            self.len += 1;
        }
    }
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticLine")
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}

/// Reports a failed check and terminates the process abnormally.
///
/// The diagnostic goes through the panic machinery: the panic hook prints it
/// to stderr, then unwinding hits the `extern "C"` frame and the runtime
/// aborts the process. During constant evaluation the panic rejects the
/// evaluation instead.
///
/// The text reaches stderr only through the installed panic hook. An
/// application that replaces the hook with one that prints nothing still
/// aborts, but without the diagnostic.
///
/// See [`DIAGNOSTIC_CAPACITY`] for lines that do not fit.
#[allow(improper_ctypes_definitions)]
#[inline(never)]
#[cold]
pub const extern "C" fn diagnose_and_terminate(
    message: &str,
    line: u32,
    column: u32,
    file: &str,
    function: &str,
) -> ! {
    match DiagnosticLine::fitted(message, line, column, file, function) {
        Some(diagnostic) => panic!("{}", diagnostic.as_str()),
        None => panic!("{}", message),
    }
}
