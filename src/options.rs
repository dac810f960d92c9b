//! Options for CTS URN parsing.

/// Optional extra checks applied when parsing CTS URNs.
///
/// CTS URNs are parsed loosely by default: neither the `urn` header nor the
/// `cts` type token is checked, and empty levels inside the work hierarchy
/// (`tlg0012..wacl1`) are kept as empty strings. Each check here can be
/// turned on independently.
///
/// # Examples
///
/// ```
/// use urn_citation::{CtsParseOptions, CtsUrn};
///
/// let options = CtsParseOptions::new().with_check_type(true);
/// assert!(CtsUrn::parse_with("urn:cite2:greekLit:tlg0012:", &options).is_err());
/// assert!(CtsUrn::parse("urn:cite2:greekLit:tlg0012:").is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CtsParseOptions {
    /// Require the first field to be `urn`.
    ///
    /// Default: false
    pub check_header: bool,

    /// Require the second field to be `cts`.
    ///
    /// Default: false
    pub check_type: bool,

    /// Reject empty levels inside the work hierarchy.
    ///
    /// Default: false
    pub reject_empty_work_parts: bool,
}

impl CtsParseOptions {
    /// Creates options with every extra check disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with every extra check enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            check_header: true,
            check_type: true,
            reject_empty_work_parts: true,
        }
    }

    /// Sets whether the `urn` header is checked.
    #[must_use]
    pub const fn with_check_header(mut self, check: bool) -> Self {
        self.check_header = check;
        self
    }

    /// Sets whether the `cts` type token is checked.
    #[must_use]
    pub const fn with_check_type(mut self, check: bool) -> Self {
        self.check_type = check;
        self
    }

    /// Sets whether empty work hierarchy levels are rejected.
    #[must_use]
    pub const fn with_reject_empty_work_parts(mut self, reject: bool) -> Self {
        self.reject_empty_work_parts = reject;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loose() {
        let options = CtsParseOptions::default();
        assert!(!options.check_header);
        assert!(!options.check_type);
        assert!(!options.reject_empty_work_parts);
    }

    #[test]
    fn strict_enables_everything() {
        let options = CtsParseOptions::strict();
        assert_eq!(
            options,
            CtsParseOptions::new()
                .with_check_header(true)
                .with_check_type(true)
                .with_reject_empty_work_parts(true)
        );
    }
}
