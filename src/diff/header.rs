//! Hunk header grammar.

use crate::error::{CheckstyleError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::LineNumber;

/// Anchored at line start. Counts are optional, as in git and `similar`
/// output for single-line ranges.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -([0-9]+)(?:,([0-9]+))? \+([0-9]+)(?:,([0-9]+))? @@").expect("valid regex")
});

/// Coordinates declared by a `@@ -a,b +c,d @@` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: LineNumber,
    pub old_count: usize,
    pub new_start: LineNumber,
    pub new_count: usize,
}

impl HunkHeader {
    /// Parse a hunk header line.
    ///
    /// Accepts:
    /// - `@@ -10,3 +10,4 @@`
    /// - `@@ -10 +10,2 @@` (omitted count means 1)
    /// - `@@ -10,3 +10,4 @@ fn section_name()` (trailing section text is ignored)
    ///
    /// # Returns
    ///
    /// * `Ok(HunkHeader)` - The declared coordinates
    /// * `Err(CheckstyleError::MalformedHunkHeader)` - The line does not match,
    ///   or a side's range runs past `usize::MAX`
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = || CheckstyleError::MalformedHunkHeader(line.trim_end().to_string());

        let caps = HUNK_HEADER.captures(line).ok_or_else(malformed)?;

        let number = |idx: usize, default: Option<usize>| -> Result<usize> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse().map_err(|_| malformed()),
                None => default.ok_or_else(malformed),
            }
        };

        let header = Self {
            old_start: number(1, None)?,
            old_count: number(2, Some(1))?,
            new_start: number(3, None)?,
            new_count: number(4, Some(1))?,
        };

        // Every line number a side can cover must be representable.
        if header.old_start.checked_add(header.old_count).is_none()
            || header.new_start.checked_add(header.new_count).is_none()
        {
            return Err(malformed());
        }

        Ok(header)
    }
}

impl fmt::Display for HunkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_count, self.new_start, self.new_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_header() {
        let header = HunkHeader::parse("@@ -10,3 +12,4 @@").unwrap();
        assert_eq!(
            header,
            HunkHeader {
                old_start: 10,
                old_count: 3,
                new_start: 12,
                new_count: 4,
            }
        );
    }

    #[test]
    fn omitted_counts_default_to_one() {
        let header = HunkHeader::parse("@@ -7 +9 @@").unwrap();
        assert_eq!(header.old_count, 1);
        assert_eq!(header.new_count, 1);

        let header = HunkHeader::parse("@@ -7,0 +8 @@").unwrap();
        assert_eq!(header.old_count, 0);
        assert_eq!(header.new_count, 1);
    }

    #[test]
    fn trailing_section_text_is_ignored() {
        let header = HunkHeader::parse("@@ -1,2 +1,3 @@ int main(void)").unwrap();
        assert_eq!(header.old_start, 1);
        assert_eq!(header.new_count, 3);
    }

    #[test]
    fn rejects_malformed_headers() {
        for line in [
            "@@",
            "@@ -a,b +c,d @@",
            "@@ -1,2 +3,4",
            "@@ 1,2 3,4 @@",
            "@@@ -1,2 -1,2 +1,3 @@@",
            " @@ -1,2 +1,2 @@",
        ] {
            let err = HunkHeader::parse(line).unwrap_err();
            assert!(
                matches!(err, CheckstyleError::MalformedHunkHeader(ref l) if l == line.trim_end()),
                "expected malformed header for {line:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let line = "@@ -99999999999999999999999,1 +1,1 @@";
        assert!(matches!(
            HunkHeader::parse(line),
            Err(CheckstyleError::MalformedHunkHeader(_))
        ));
    }

    #[test]
    fn rejects_ranges_past_usize_max() {
        let max = usize::MAX;
        for line in [
            format!("@@ -{},2 +1,2 @@", max),
            format!("@@ -1,2 +{} @@", max),
            format!("@@ -1 +{},{} @@", max - 1, 2),
        ] {
            assert!(
                matches!(HunkHeader::parse(&line), Err(CheckstyleError::MalformedHunkHeader(_))),
                "{line}"
            );
        }

        let header = HunkHeader::parse(&format!("@@ -{},0 +{},1 @@", max, max - 1)).unwrap();
        assert_eq!(header.old_start, max);
        assert_eq!(header.new_count, 1);
    }

    #[test]
    fn display_always_writes_counts() {
        let header = HunkHeader::parse("@@ -7 +9,0 @@").unwrap();
        assert_eq!(header.to_string(), "@@ -7,1 +9,0 @@");
    }
}
