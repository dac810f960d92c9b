//! Error types for citation URN parsing and construction.

use std::fmt;

use crate::constants::{HIERARCHY_DELIMITER, RANGE_DELIMITER};
use crate::urn::Dialect;

/// Error returned when a string is not a well-formed URN.
///
/// Carries the rejected input alongside the first rule it violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input does not start with the dialect's literal prefix
    BadPrefix {
        /// Dialect being parsed
        dialect: Dialect,
        /// The required prefix
        expected: &'static str,
    },
    /// Input does not split into the expected number of colon-delimited fields
    WrongPartCount {
        /// Dialect being parsed
        dialect: Dialect,
        /// Required number of fields
        expected: usize,
        /// Number of fields found
        actual: usize,
    },
    /// First field is not `urn`
    BadHeader {
        /// Dialect being parsed
        dialect: Dialect,
        /// The header that was found
        found: String,
    },
    /// Second field does not name the dialect being parsed
    BadType {
        /// Dialect being parsed
        dialect: Dialect,
        /// The type token that was found
        found: String,
    },
    /// Second field names no known dialect
    UnknownType {
        /// The type token that was found
        found: String,
    },
    /// A required component is empty
    EmptyComponent {
        /// The empty component
        component: Component,
    },
    /// A component ends with its interior delimiter
    TrailingDelimiter {
        /// The offending component
        component: Component,
        /// The trailing delimiter
        delimiter: char,
    },
    /// A component splits into more parts than allowed
    TooManyParts {
        /// The offending component
        component: Component,
        /// The delimiter that was split on
        delimiter: char,
        /// Maximum allowed parts
        max: usize,
        /// Actual part count
        actual: usize,
    },
    /// A component contains an empty part between delimiters
    EmptySubPart {
        /// The offending component
        component: Component,
    },
    /// The parsed fields were rejected by the constructor
    InvalidField(FieldError),
}

/// The URN component an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Third field of either dialect
    Namespace,
    /// CTS work hierarchy (`text_group[.work[.version[.exemplar]]]`)
    WorkHierarchy,
    /// CTS passage reference or range
    Passage,
    /// CITE2 collection and optional version
    CollectionInfo,
    /// CITE2 object identifier or range
    Object,
}

impl Component {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Namespace => "namespace component",
            Self::WorkHierarchy => "work component",
            Self::Passage => "passage component",
            Self::CollectionInfo => "collection info",
            Self::Object => "object component",
        }
    }

    const fn purpose(self) -> &'static str {
        match self {
            Self::WorkHierarchy => "separate text group, work, version and exemplar",
            Self::CollectionInfo => "separate collection and version",
            Self::Passage | Self::Object => "indicate a range",
            Self::Namespace => "separate values",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn delimiter_name(delimiter: char) -> &'static str {
    match delimiter {
        HIERARCHY_DELIMITER => "period",
        RANGE_DELIMITER => "hyphen",
        _ => "delimiter",
    }
}

fn spelled(n: usize) -> String {
    match n {
        1 => "one".to_string(),
        n => n.to_string(),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed URN '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidField(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadPrefix { dialect, expected } => {
                write!(f, "{dialect} URN must start with '{expected}'")
            }
            Self::WrongPartCount {
                dialect,
                expected,
                actual,
            } => write!(
                f,
                "{dialect} URN must have {expected} colon-delimited parts, got {actual}"
            ),
            Self::BadHeader { dialect, found } => {
                write!(f, "{dialect} URN must start with 'urn', found '{found}'")
            }
            Self::BadType { dialect, found } => write!(
                f,
                "{dialect} URN must include the {} type identifier, found '{found}'",
                dialect.type_token()
            ),
            Self::UnknownType { found } => write!(
                f,
                "unrecognized URN type '{found}'; expected 'cts' or 'cite2'"
            ),
            Self::EmptyComponent { component } => write!(f, "{component} cannot be empty"),
            Self::TrailingDelimiter {
                component,
                delimiter,
            } => write!(
                f,
                "{component} cannot end with a {}",
                delimiter_name(*delimiter)
            ),
            Self::TooManyParts {
                component,
                delimiter,
                max,
                actual,
            } => {
                let allowed = max.saturating_sub(1);
                let found = actual.saturating_sub(1);
                let name = delimiter_name(*delimiter);
                write!(
                    f,
                    "{component} can contain at most {} {name}{} to {}, found {found} in {actual} parts",
                    spelled(allowed),
                    if allowed == 1 { "" } else { "s" },
                    component.purpose()
                )
            }
            Self::EmptySubPart { component } => match component {
                Component::CollectionInfo => write!(
                    f,
                    "{component} must contain non-empty collection/version values"
                ),
                Component::Object => write!(f, "{component} must contain non-empty identifiers"),
                Component::WorkHierarchy => write!(
                    f,
                    "{component} must contain non-empty text group/work/version/exemplar values"
                ),
                Component::Namespace | Component::Passage => {
                    write!(f, "{component} must contain non-empty values")
                }
            },
            Self::InvalidField(e) => write!(f, "invalid field: {e}"),
        }
    }
}

/// Errors for direct construction of URN values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field is empty
    Empty {
        /// Name of the empty field
        field: &'static str,
    },
    /// An optional hierarchy level is set while the level above it is not
    BrokenHierarchy {
        /// The field that was set
        field: &'static str,
        /// The less specific field that is missing
        missing: &'static str,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} cannot be empty"),
            Self::BrokenHierarchy { field, missing } => {
                write!(f, "{field} cannot be set while {missing} is unset")
            }
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(kind: ParseErrorKind) -> String {
        kind.to_string()
    }

    #[test]
    fn wrong_part_count_names_both_counts() {
        let msg = message(ParseErrorKind::WrongPartCount {
            dialect: Dialect::Cite2,
            expected: 5,
            actual: 4,
        });
        assert_eq!(msg, "CITE2 URN must have 5 colon-delimited parts, got 4");
    }

    #[test]
    fn too_many_parts_spells_single_delimiter() {
        let msg = message(ParseErrorKind::TooManyParts {
            component: Component::CollectionInfo,
            delimiter: '.',
            max: 2,
            actual: 3,
        });
        assert!(msg.contains("at most one period"), "{msg}");
        assert!(msg.contains("found 2 in 3 parts"), "{msg}");
    }

    #[test]
    fn too_many_work_parts_names_part_counts() {
        let msg = message(ParseErrorKind::TooManyParts {
            component: Component::WorkHierarchy,
            delimiter: '.',
            max: 4,
            actual: 5,
        });
        assert!(msg.starts_with("work component"), "{msg}");
        assert!(msg.contains("at most 3 periods"), "{msg}");
        assert!(msg.contains("in 5 parts"), "{msg}");
    }

    #[test]
    fn empty_sub_part_messages_differ_by_component() {
        let collection = message(ParseErrorKind::EmptySubPart {
            component: Component::CollectionInfo,
        });
        let object = message(ParseErrorKind::EmptySubPart {
            component: Component::Object,
        });
        assert!(collection.contains("non-empty collection/version values"));
        assert!(object.contains("non-empty identifiers"));
    }

    #[test]
    fn parse_error_echoes_input() {
        let err = ParseError {
            input: "urn:cite2:ns".to_string(),
            kind: ParseErrorKind::WrongPartCount {
                dialect: Dialect::Cite2,
                expected: 5,
                actual: 3,
            },
        };
        assert!(err.to_string().starts_with("malformed URN 'urn:cite2:ns': "));
    }

    #[test]
    fn invalid_field_exposes_source() {
        use std::error::Error;

        let err = ParseError {
            input: "urn:cts::tlg0012:".to_string(),
            kind: ParseErrorKind::InvalidField(FieldError::Empty { field: "namespace" }),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().ends_with("invalid field: namespace cannot be empty"));
    }
}
