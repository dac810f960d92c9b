//! The URN capability shared by both dialects, and dialect dispatch.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::cite2::Cite2Urn;
use crate::constants::{CITE2_TYPE, CTS_TYPE, FIELD_DELIMITER};
use crate::cts::CtsUrn;
use crate::error::{ParseError, ParseErrorKind};

/// The URN dialects this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    /// Canonical Text Service passage citations
    Cts,
    /// CITE2 collection object citations
    Cite2,
}

impl Dialect {
    /// Returns the type token naming this dialect inside a URN.
    #[must_use]
    pub const fn type_token(self) -> &'static str {
        match self {
            Self::Cts => CTS_TYPE,
            Self::Cite2 => CITE2_TYPE,
        }
    }

    /// Looks up the dialect named by a type token.
    #[must_use]
    pub fn from_type_token(token: &str) -> Option<Self> {
        match token {
            CTS_TYPE => Some(Self::Cts),
            CITE2_TYPE => Some(Self::Cite2),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cts => f.write_str("CTS"),
            Self::Cite2 => f.write_str("CITE2"),
        }
    }
}

/// Behavior common to every URN dialect.
///
/// Each dialect parses with its own grammar; only the envelope is shared.
pub trait Urn: fmt::Display + FromStr<Err = ParseError> + Sized {
    /// The dialect implemented by this type.
    const DIALECT: Dialect;

    /// Parses a URN of this dialect.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` describing the first grammar rule the input breaks.
    fn parse_urn(input: &str) -> Result<Self, ParseError>;

    /// Returns the type token carried by this value.
    fn urn_type(&self) -> &str;

    /// Returns the namespace.
    fn namespace(&self) -> &str;

    /// Returns true if `input` parses as this dialect.
    fn is_valid(input: &str) -> bool {
        Self::parse_urn(input).is_ok()
    }
}

/// A URN of either dialect, chosen by its type token.
///
/// # Examples
///
/// ```
/// use urn_citation::{AnyUrn, Dialect};
///
/// let urn = AnyUrn::parse("urn:cite2:hmt:datamodels.v1:codexmodel").unwrap();
/// assert_eq!(urn.dialect(), Dialect::Cite2);
///
/// let urn = AnyUrn::parse("urn:cts:greekLit:tlg0012.tlg001:1.1").unwrap();
/// assert!(urn.as_cts().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyUrn {
    /// A CTS URN
    Cts(CtsUrn),
    /// A CITE2 URN
    Cite2(Cite2Urn),
}

impl AnyUrn {
    /// Parses a URN, dispatching on the second colon-delimited field.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with [`ParseErrorKind::UnknownType`] if the type
    /// token is neither `cts` nor `cite2`, or the dialect parser's error.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let token = input.split(FIELD_DELIMITER).nth(1).unwrap_or_default();
        match Dialect::from_type_token(token) {
            Some(Dialect::Cts) => CtsUrn::parse(input).map(Self::Cts),
            Some(Dialect::Cite2) => Cite2Urn::parse(input).map(Self::Cite2),
            None => Err(ParseError {
                input: input.to_string(),
                kind: ParseErrorKind::UnknownType {
                    found: token.to_string(),
                },
            }),
        }
    }

    /// Returns true if `input` parses as a URN of either dialect.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Returns the dialect of this URN.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        match self {
            Self::Cts(_) => Dialect::Cts,
            Self::Cite2(_) => Dialect::Cite2,
        }
    }

    /// Returns the type token.
    #[must_use]
    pub fn urn_type(&self) -> &str {
        match self {
            Self::Cts(urn) => urn.urn_type(),
            Self::Cite2(urn) => urn.urn_type(),
        }
    }

    /// Returns the namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        match self {
            Self::Cts(urn) => urn.namespace(),
            Self::Cite2(urn) => urn.namespace(),
        }
    }

    /// Returns the CTS URN, if this is one.
    #[must_use]
    pub const fn as_cts(&self) -> Option<&CtsUrn> {
        match self {
            Self::Cts(urn) => Some(urn),
            Self::Cite2(_) => None,
        }
    }

    /// Returns the CITE2 URN, if this is one.
    #[must_use]
    pub const fn as_cite2(&self) -> Option<&Cite2Urn> {
        match self {
            Self::Cite2(urn) => Some(urn),
            Self::Cts(_) => None,
        }
    }
}

impl From<CtsUrn> for AnyUrn {
    fn from(urn: CtsUrn) -> Self {
        Self::Cts(urn)
    }
}

impl From<Cite2Urn> for AnyUrn {
    fn from(urn: Cite2Urn) -> Self {
        Self::Cite2(urn)
    }
}

impl fmt::Display for AnyUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cts(urn) => urn.fmt(f),
            Self::Cite2(urn) => urn.fmt(f),
        }
    }
}

impl PartialOrd for AnyUrn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnyUrn {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Cts(a), Self::Cts(b)) => a.cmp(b),
            (Self::Cite2(a), Self::Cite2(b)) => a.cmp(b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl FromStr for AnyUrn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AnyUrn {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
