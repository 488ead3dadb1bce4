//! Caller location attached to every record.
//!
//! Locations render as `stem:line`, where `stem` is the source file's base
//! name without extension (`src/exec/sequences.rs` at line 545 renders as
//! `sequences:545`). When nothing can be resolved the sentinel `unknown:0`
//! is used.

use std::borrow::Cow;
use std::fmt;

const UNKNOWN_FILE: &str = "unknown";

/// Where a record was built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    file: Cow<'static, str>,
    line: Option<u32>,
}

impl Location {
    /// Explicit location.
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }

    /// The `unknown:0` sentinel.
    #[inline]
    pub const fn unknown() -> Self {
        Self {
            file: Cow::Borrowed(UNKNOWN_FILE),
            line: Some(0),
        }
    }

    /// Capture the location of the caller.
    ///
    /// Functions marked `#[track_caller]` pass the capture up to their own
    /// caller, so a factory records the site that invoked it.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_std(std::panic::Location::caller())
    }

    /// Convert a standard library location.
    pub fn from_std(location: &'static std::panic::Location<'static>) -> Self {
        let stem = file_stem(location.file());
        if stem.is_empty() {
            return Self::unknown();
        }
        Self {
            file: Cow::Borrowed(stem),
            line: Some(location.line()),
        }
    }

    /// Rebuild a location from its rendered form.
    ///
    /// Text without a numeric `:line` suffix is kept whole as the file part,
    /// so rendering it again yields the same text. Empty text is
    /// [`Location::unknown`].
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::unknown();
        }
        if let Some((file, line)) = text.rsplit_once(':') {
            if let Ok(line) = line.parse::<u32>() {
                if line.to_string().len() == text.len() - file.len() - 1 {
                    return Self {
                        file: Cow::Owned(file.to_owned()),
                        line: Some(line),
                    };
                }
            }
        }
        Self {
            file: Cow::Owned(text.to_owned()),
            line: None,
        }
    }

    /// File stem.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number, `0` when not known.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line.unwrap_or(0)
    }

    /// Whether this is the `unknown:0` sentinel.
    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN_FILE && self.line == Some(0)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => f.write_str(&self.file),
        }
    }
}

/// Base name of `path` without its extension.
fn file_stem(path: &str) -> &str {
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(dot) => &base[..dot],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_directories_and_extension() {
        assert_eq!(file_stem("src/exec/sequences.rs"), "sequences");
        assert_eq!(file_stem("C:\\work\\plan.rs"), "plan");
        assert_eq!(file_stem("Makefile"), "Makefile");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn caller_points_at_this_file() {
        let line = line!() + 1;
        let here = Location::caller();
        assert_eq!(here.file(), "location");
        assert_eq!(here.line(), line);
        assert_eq!(here.to_string(), format!("location:{}", line));
    }

    #[test]
    fn unknown_sentinel_renders() {
        assert_eq!(Location::unknown().to_string(), "unknown:0");
        assert!(Location::default().is_unknown());
        assert!(!Location::new("sequences", 545).is_unknown());
    }

    #[test]
    fn parse_restores_rendered_text() {
        for text in ["sequences:545", "unknown:0", "no-line", "a:b", "x:007"] {
            assert_eq!(Location::parse(text).to_string(), text);
        }
        let parsed = Location::parse("sequences:545");
        assert_eq!(parsed.file(), "sequences");
        assert_eq!(parsed.line(), 545);
    }

    #[test]
    fn parse_empty_is_unknown() {
        let parsed = Location::parse("");
        assert!(parsed.is_unknown());
        assert_eq!(parsed.to_string(), "unknown:0");
    }
}
