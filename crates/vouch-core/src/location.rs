use std::fmt;
use std::panic::Location;

/// Source position attached to a check.
///
/// Built either from `#[track_caller]` ([`SourceLocation::caller`]), which
/// knows file, line and column but not the enclosing function, or from the
/// [`here!`](crate::here) macro, which also records the enclosing module path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    column: u32,
    function: &'static str,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32, column: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            column,
            function,
        }
    }

    /// Empty file and function, zero line and column.
    pub const fn unknown() -> Self {
        Self::new("", 0, 0, "")
    }

    /// Position of the outermost `#[track_caller]` frame's call site.
    #[track_caller]
    pub const fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), location.column(), "")
    }

    pub const fn file(&self) -> &'static str {
        self.file
    }

    pub const fn line(&self) -> u32 {
        self.line
    }

    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Enclosing function or module path; empty when not captured.
    pub const fn function(&self) -> &'static str {
        self.function
    }

    pub const fn with_function(self, function: &'static str) -> Self {
        Self { function, ..self }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        if !self.function.is_empty() {
            write!(f, ": {}", self.function)?;
        }
        Ok(())
    }
}

/// Captures the current file, line, column and module path as a
/// [`SourceLocation`].
///
/// Usable in const contexts.
#[macro_export]
macro_rules! here {
    () => {
        $crate::SourceLocation::new(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            ::core::module_path!(),
        )
    };
}
