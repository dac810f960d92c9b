//! CTS URNs citing passages of canonically citable texts.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CTS_TYPE, HIERARCHY_DELIMITER, MAX_RANGE_PARTS, MAX_WORK_PARTS, RANGE_DELIMITER, URN_HEADER,
};
use crate::error::{Component, FieldError, ParseError, ParseErrorKind};
use crate::options::CtsParseOptions;
use crate::range::UrnRange;
use crate::split::{split_fields, split_parts};
use crate::urn::{Dialect, Urn};

/// A parsed CTS URN.
///
/// CTS URNs identify texts through two hierarchies. The work hierarchy names
/// a text group and, with increasing specificity, a work, a version (edition
/// or translation) and an exemplar. The passage hierarchy is either empty,
/// citing the whole work, or names a single passage or a range of passages.
///
/// # Structure
///
/// ```text
/// urn:cts:<namespace>:<text_group>[.<work>[.<version>[.<exemplar>]]]:[<passage>[-<passage>]]
/// ```
///
/// # Examples
///
/// ```
/// use urn_citation::CtsUrn;
///
/// let urn = CtsUrn::parse("urn:cts:greekLit:tlg0012.001.wacl1.ex1:1.1-1.5").unwrap();
/// assert_eq!(urn.namespace(), "greekLit");
/// assert_eq!(urn.text_group(), "tlg0012");
/// assert_eq!(urn.work(), Some("001"));
/// assert_eq!(urn.version(), Some("wacl1"));
/// assert_eq!(urn.exemplar(), Some("ex1"));
/// assert_eq!(urn.passage(), Some("1.1-1.5"));
///
/// // Empty passage cites the whole work
/// let urn = CtsUrn::parse("urn:cts:greekLit:tlg0012:").unwrap();
/// assert_eq!(urn.passage(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CtsUrn {
    urn_type: String,
    namespace: String,
    text_group: String,
    work: Option<String>,
    version: Option<String>,
    exemplar: Option<String>,
    passage: Option<String>,
}

impl CtsUrn {
    /// Parses a CTS URN with the default (loose) options.
    ///
    /// Neither the `urn` header nor the `cts` type token is checked, and
    /// empty work hierarchy levels are kept; see [`CtsParseOptions`].
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input does not have exactly 5 colon-delimited fields
    /// - The passage contains more than one hyphen
    /// - The work hierarchy has more than 4 dot-delimited levels
    /// - The type token, namespace or text group is empty
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, &CtsParseOptions::default())
    }

    /// Parses a CTS URN, applying the extra checks enabled in `options`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for any failure listed on [`CtsUrn::parse`], and
    /// for whichever optional check in `options` the input fails.
    pub fn parse_with(input: &str, options: &CtsParseOptions) -> Result<Self, ParseError> {
        Self::parse_inner(input, options).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Creates a CTS URN from its fields.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` if:
    /// - `urn_type`, `namespace` or `text_group` is empty
    /// - `version` is set without `work`, or `exemplar` without `version`
    pub fn new(
        urn_type: impl Into<String>,
        namespace: impl Into<String>,
        text_group: impl Into<String>,
        work: Option<String>,
        version: Option<String>,
        exemplar: Option<String>,
        passage: Option<String>,
    ) -> Result<Self, FieldError> {
        let urn = Self {
            urn_type: urn_type.into(),
            namespace: namespace.into(),
            text_group: text_group.into(),
            work,
            version,
            exemplar,
            passage,
        };
        urn.validate()?;
        Ok(urn)
    }

    fn validate(&self) -> Result<(), FieldError> {
        for (field, value) in [
            ("urn_type", &self.urn_type),
            ("namespace", &self.namespace),
            ("text_group", &self.text_group),
        ] {
            if value.is_empty() {
                return Err(FieldError::Empty { field });
            }
        }

        if self.version.is_some() && self.work.is_none() {
            return Err(FieldError::BrokenHierarchy {
                field: "version",
                missing: "work",
            });
        }
        if self.exemplar.is_some() && self.version.is_none() {
            return Err(FieldError::BrokenHierarchy {
                field: "exemplar",
                missing: "version",
            });
        }

        Ok(())
    }

    /// Returns the type token.
    #[must_use]
    pub fn urn_type(&self) -> &str {
        &self.urn_type
    }

    /// Returns the namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the text group.
    #[must_use]
    pub fn text_group(&self) -> &str {
        &self.text_group
    }

    /// Returns the work, if present.
    #[must_use]
    pub fn work(&self) -> Option<&str> {
        self.work.as_deref()
    }

    /// Returns the version, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the exemplar, if present.
    #[must_use]
    pub fn exemplar(&self) -> Option<&str> {
        self.exemplar.as_deref()
    }

    /// Returns the raw passage reference, if present.
    #[must_use]
    pub fn passage(&self) -> Option<&str> {
        self.passage.as_deref()
    }

    /// Returns the passage split into start and optional end.
    #[must_use]
    pub fn range(&self) -> Option<UrnRange<'_>> {
        self.passage().map(UrnRange::split)
    }

    /// Returns true if the passage names a range.
    ///
    /// ```
    /// use urn_citation::CtsUrn;
    ///
    /// assert!(CtsUrn::parse("urn:cts:greekLit:tlg0012.tlg001:1.1-1.5").unwrap().is_range());
    /// assert!(!CtsUrn::parse("urn:cts:greekLit:tlg0012.tlg001:1.1").unwrap().is_range());
    /// ```
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.range().is_some_and(|range| range.is_range())
    }

    /// Returns the first passage of a range, or the single passage.
    #[must_use]
    pub fn range_start(&self) -> Option<&str> {
        self.range().map(|range| range.start())
    }

    /// Returns the last passage of a range.
    #[must_use]
    pub fn range_end(&self) -> Option<&str> {
        self.range().and_then(|range| range.end())
    }

    /// Returns the work hierarchy levels that are present, least specific first.
    #[must_use]
    pub fn work_hierarchy(&self) -> Vec<&str> {
        std::iter::once(self.text_group.as_str())
            .chain(self.work())
            .chain(self.version())
            .chain(self.exemplar())
            .collect()
    }

    /// Returns every field by name, in declaration order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("urn_type", Some(self.urn_type.as_str())),
            ("namespace", Some(self.namespace.as_str())),
            ("text_group", Some(self.text_group.as_str())),
            ("work", self.work()),
            ("version", self.version()),
            ("exemplar", self.exemplar()),
            ("passage", self.passage()),
        ]
    }

    fn parse_inner(input: &str, options: &CtsParseOptions) -> Result<Self, ParseErrorKind> {
        let fields = split_fields(input, Dialect::Cts)?;

        if options.check_header && fields.header != URN_HEADER {
            return Err(ParseErrorKind::BadHeader {
                dialect: Dialect::Cts,
                found: fields.header.to_string(),
            });
        }
        if options.check_type && fields.urn_type != CTS_TYPE {
            return Err(ParseErrorKind::BadType {
                dialect: Dialect::Cts,
                found: fields.urn_type.to_string(),
            });
        }

        // Hyphen split only validates the range; the passage is stored whole
        split_parts(
            fields.reference,
            RANGE_DELIMITER,
            MAX_RANGE_PARTS,
            Component::Passage,
        )?;

        let levels = split_parts(
            fields.hierarchy,
            HIERARCHY_DELIMITER,
            MAX_WORK_PARTS,
            Component::WorkHierarchy,
        )?;
        if options.reject_empty_work_parts && levels.iter().any(|level| level.is_empty()) {
            return Err(ParseErrorKind::EmptySubPart {
                component: Component::WorkHierarchy,
            });
        }

        let mut levels = levels.into_iter().map(str::to_string);
        let text_group = levels.next().unwrap_or_default();
        let work = levels.next();
        let version = levels.next();
        let exemplar = levels.next();

        let passage = (!fields.reference.is_empty()).then(|| fields.reference.to_string());

        Self::new(
            fields.urn_type,
            fields.namespace,
            text_group,
            work,
            version,
            exemplar,
            passage,
        )
        .map_err(ParseErrorKind::InvalidField)
    }
}

impl Urn for CtsUrn {
    const DIALECT: Dialect = Dialect::Cts;

    fn parse_urn(input: &str) -> Result<Self, ParseError> {
        Self::parse(input)
    }

    fn urn_type(&self) -> &str {
        &self.urn_type
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl fmt::Display for CtsUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{URN_HEADER}:{}:{}:", self.urn_type, self.namespace)?;
        for (i, level) in self.work_hierarchy().into_iter().enumerate() {
            if i > 0 {
                write!(f, "{HIERARCHY_DELIMITER}")?;
            }
            f.write_str(level)?;
        }
        write!(f, ":{}", self.passage().unwrap_or_default())
    }
}

impl FromStr for CtsUrn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CtsUrn {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for CtsUrn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Ordered by string form; distinct values with the same string fall back to fields
impl Ord for CtsUrn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string()
            .cmp(&other.to_string())
            .then_with(|| self.fields().cmp(&other.fields()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CtsUrn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let fields = self.fields();
        let mut state = serializer.serialize_struct("CtsUrn", fields.len())?;
        for (name, value) in fields {
            state.serialize_field(name, &value)?;
        }
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CtsUrn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            urn_type: String,
            namespace: String,
            text_group: String,
            #[serde(default)]
            work: Option<String>,
            #[serde(default)]
            version: Option<String>,
            #[serde(default)]
            exemplar: Option<String>,
            #[serde(default)]
            passage: Option<String>,
        }

        let f = Fields::deserialize(deserializer)?;
        Self::new(
            f.urn_type,
            f.namespace,
            f.text_group,
            f.work,
            f.version,
            f.exemplar,
            f.passage,
        )
        .map_err(serde::de::Error::custom)
    }
}
