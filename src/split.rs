//! Tokenizing helpers shared by both URN dialects.

use crate::constants::{FIELD_DELIMITER, URN_FIELD_COUNT};
use crate::error::{Component, ParseErrorKind};
use crate::urn::Dialect;

/// The five colon-delimited fields of a URN, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrnFields<'a> {
    pub header: &'a str,
    pub urn_type: &'a str,
    pub namespace: &'a str,
    /// Work hierarchy (CTS) or collection info (CITE2)
    pub hierarchy: &'a str,
    /// Passage (CTS) or object (CITE2)
    pub reference: &'a str,
}

/// Splits `input` on every colon, keeping empty fields, and requires
/// exactly [`URN_FIELD_COUNT`] of them.
pub(crate) fn split_fields(input: &str, dialect: Dialect) -> Result<UrnFields<'_>, ParseErrorKind> {
    let fields: Vec<&str> = input.split(FIELD_DELIMITER).collect();
    match fields.as_slice() {
        &[header, urn_type, namespace, hierarchy, reference] => Ok(UrnFields {
            header,
            urn_type,
            namespace,
            hierarchy,
            reference,
        }),
        _ => Err(ParseErrorKind::WrongPartCount {
            dialect,
            expected: URN_FIELD_COUNT,
            actual: fields.len(),
        }),
    }
}

/// Splits a component on `delimiter`, keeping empty parts, and rejects it
/// when it yields more than `max` parts. Always returns at least one part.
pub(crate) fn split_parts(
    value: &str,
    delimiter: char,
    max: usize,
    component: Component,
) -> Result<Vec<&str>, ParseErrorKind> {
    let parts: Vec<&str> = value.split(delimiter).collect();
    if parts.len() > max {
        return Err(ParseErrorKind::TooManyParts {
            component,
            delimiter,
            max,
            actual: parts.len(),
        });
    }
    Ok(parts)
}

/// Rejects an empty component.
pub(crate) fn require_non_empty(value: &str, component: Component) -> Result<(), ParseErrorKind> {
    if value.is_empty() {
        Err(ParseErrorKind::EmptyComponent { component })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fields_keeps_empty_fields() {
        let fields = split_fields("urn:cts:greekLit:tlg0012:", Dialect::Cts).unwrap();
        assert_eq!(fields.header, "urn");
        assert_eq!(fields.urn_type, "cts");
        assert_eq!(fields.namespace, "greekLit");
        assert_eq!(fields.hierarchy, "tlg0012");
        assert_eq!(fields.reference, "");
    }

    #[test]
    fn split_fields_counts_empty_input_as_one_field() {
        let result = split_fields("", Dialect::Cts);
        assert_eq!(
            result,
            Err(ParseErrorKind::WrongPartCount {
                dialect: Dialect::Cts,
                expected: 5,
                actual: 1,
            })
        );
    }

    #[test]
    fn split_fields_rejects_extra_colons() {
        let result = split_fields("urn:cite2:ns:coll:obj:extra", Dialect::Cite2);
        assert!(matches!(
            result,
            Err(ParseErrorKind::WrongPartCount { actual: 6, .. })
        ));
    }

    #[test]
    fn split_parts_at_limit() {
        let parts = split_parts("a.b", '.', 2, Component::CollectionInfo).unwrap();
        assert_eq!(parts, vec!["a", "b"]);
    }

    #[test]
    fn split_parts_over_limit() {
        let result = split_parts("a-b-c", '-', 2, Component::Object);
        assert_eq!(
            result,
            Err(ParseErrorKind::TooManyParts {
                component: Component::Object,
                delimiter: '-',
                max: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn split_parts_keeps_empty_parts() {
        let parts = split_parts("tlg0012..v1", '.', 4, Component::WorkHierarchy).unwrap();
        assert_eq!(parts, vec!["tlg0012", "", "v1"]);
    }

    #[test]
    fn require_non_empty_flags_component() {
        assert!(require_non_empty("ns", Component::Namespace).is_ok());
        assert_eq!(
            require_non_empty("", Component::Object),
            Err(ParseErrorKind::EmptyComponent {
                component: Component::Object
            })
        );
    }
}
