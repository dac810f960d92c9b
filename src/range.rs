//! Borrowed view over a passage or object reference that may be a range.

use std::fmt;

use crate::constants::RANGE_DELIMITER;

/// A reference split at its first hyphen into start and optional end.
///
/// URN values store passages and objects as raw strings; this view is
/// derived on demand and never changes what is stored.
///
/// # Examples
///
/// ```
/// use urn_citation::UrnRange;
///
/// let range = UrnRange::split("1.1-1.5");
/// assert_eq!(range.start(), "1.1");
/// assert_eq!(range.end(), Some("1.5"));
/// assert!(range.is_range());
///
/// let single = UrnRange::split("1.1");
/// assert_eq!(single.end(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrnRange<'a> {
    start: &'a str,
    end: Option<&'a str>,
}

impl<'a> UrnRange<'a> {
    /// Splits a reference at its first hyphen.
    #[must_use]
    pub fn split(reference: &'a str) -> Self {
        match reference.split_once(RANGE_DELIMITER) {
            Some((start, end)) => Self {
                start,
                end: Some(end),
            },
            None => Self {
                start: reference,
                end: None,
            },
        }
    }

    /// Returns the first (or only) endpoint.
    #[must_use]
    pub const fn start(&self) -> &'a str {
        self.start
    }

    /// Returns the second endpoint, if this is a range.
    #[must_use]
    pub const fn end(&self) -> Option<&'a str> {
        self.end
    }

    /// Returns true if the reference names two endpoints.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        self.end.is_some()
    }
}

impl fmt::Display for UrnRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}{RANGE_DELIMITER}{end}", self.start),
            None => f.write_str(self.start),
        }
    }
}
