//! CITE2 URNs citing objects in named collections.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CITE2_PREFIX, CITE2_TYPE, HIERARCHY_DELIMITER, MAX_COLLECTION_PARTS, MAX_RANGE_PARTS,
    RANGE_DELIMITER, URN_HEADER,
};
use crate::error::{Component, FieldError, ParseError, ParseErrorKind};
use crate::range::UrnRange;
use crate::split::{require_non_empty, split_fields, split_parts};
use crate::urn::{Dialect, Urn};

/// A parsed CITE2 URN.
///
/// CITE2 URNs identify an object, or a range of objects, in a versioned
/// collection defined within a namespace.
///
/// # Structure
///
/// ```text
/// urn:cite2:<namespace>:<collection>[.<version>]:<object>[-<object>]
/// ```
///
/// # Examples
///
/// ```
/// use urn_citation::Cite2Urn;
///
/// let urn = Cite2Urn::parse("urn:cite2:hmt:datamodels.v1:codexmodel").unwrap();
/// assert_eq!(urn.namespace(), "hmt");
/// assert_eq!(urn.collection(), "datamodels");
/// assert_eq!(urn.version(), Some("v1"));
/// assert_eq!(urn.object_id(), "codexmodel");
///
/// // Object ranges are stored as written
/// let urn = Cite2Urn::parse("urn:cite2:ns:coll:obj-2").unwrap();
/// assert_eq!(urn.version(), None);
/// assert_eq!(urn.object_id(), "obj-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cite2Urn {
    urn_type: String,
    namespace: String,
    collection: String,
    version: Option<String>,
    object_id: String,
}

impl Cite2Urn {
    /// Parses a CITE2 URN.
    ///
    /// Checks run in a fixed order and the first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input does not start with `urn:cite2:`
    /// - The input does not have exactly 5 colon-delimited fields
    /// - The namespace, collection info or object is empty
    /// - The collection info ends with a period, has more than one period,
    ///   or has an empty collection or version
    /// - The object ends with a hyphen, has more than one hyphen, or has an
    ///   empty endpoint
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Creates a CITE2 URN from its fields.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` if `urn_type`, `namespace`, `collection`
    /// or `object_id` is empty.
    pub fn new(
        urn_type: impl Into<String>,
        namespace: impl Into<String>,
        collection: impl Into<String>,
        version: Option<String>,
        object_id: impl Into<String>,
    ) -> Result<Self, FieldError> {
        let urn = Self {
            urn_type: urn_type.into(),
            namespace: namespace.into(),
            collection: collection.into(),
            version,
            object_id: object_id.into(),
        };

        for (field, value) in [
            ("urn_type", &urn.urn_type),
            ("namespace", &urn.namespace),
            ("collection", &urn.collection),
            ("object_id", &urn.object_id),
        ] {
            if value.is_empty() {
                return Err(FieldError::Empty { field });
            }
        }

        Ok(urn)
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

    /// Returns the collection.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the collection version, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the raw object reference, which may be a range.
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// Returns the object reference split into start and optional end.
    #[must_use]
    pub fn range(&self) -> UrnRange<'_> {
        UrnRange::split(&self.object_id)
    }

    /// Returns true if the object reference names a range.
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.range().is_range()
    }

    /// Returns the first object of a range, or the single object.
    #[must_use]
    pub fn range_start(&self) -> &str {
        self.range().start()
    }

    /// Returns the last object of a range.
    #[must_use]
    pub fn range_end(&self) -> Option<&str> {
        self.range().end()
    }

    /// Returns every field by name, in declaration order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("urn_type", Some(self.urn_type.as_str())),
            ("namespace", Some(self.namespace.as_str())),
            ("collection", Some(self.collection.as_str())),
            ("version", self.version()),
            ("object_id", Some(self.object_id.as_str())),
        ]
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if !input.starts_with(CITE2_PREFIX) {
            return Err(ParseErrorKind::BadPrefix {
                dialect: Dialect::Cite2,
                expected: CITE2_PREFIX,
            });
        }

        let fields = split_fields(input, Dialect::Cite2)?;

        if fields.header != URN_HEADER {
            return Err(ParseErrorKind::BadHeader {
                dialect: Dialect::Cite2,
                found: fields.header.to_string(),
            });
        }
        if fields.urn_type != CITE2_TYPE {
            return Err(ParseErrorKind::BadType {
                dialect: Dialect::Cite2,
                found: fields.urn_type.to_string(),
            });
        }

        require_non_empty(fields.namespace, Component::Namespace)?;
        require_non_empty(fields.hierarchy, Component::CollectionInfo)?;
        require_non_empty(fields.reference, Component::Object)?;

        let (collection, version) = Self::split_collection(fields.hierarchy)?;
        Self::check_object(fields.reference)?;

        Self::new(
            fields.urn_type,
            fields.namespace,
            collection,
            version.map(str::to_string),
            fields.reference,
        )
        .map_err(ParseErrorKind::InvalidField)
    }

    fn split_collection(info: &str) -> Result<(&str, Option<&str>), ParseErrorKind> {
        let component = Component::CollectionInfo;

        if info.ends_with(HIERARCHY_DELIMITER) {
            return Err(ParseErrorKind::TrailingDelimiter {
                component,
                delimiter: HIERARCHY_DELIMITER,
            });
        }

        let parts = split_parts(info, HIERARCHY_DELIMITER, MAX_COLLECTION_PARTS, component)?;
        if parts.iter().any(|part| part.is_empty()) {
            return Err(ParseErrorKind::EmptySubPart { component });
        }

        Ok((parts[0], parts.get(1).copied()))
    }

    // Hyphen split only validates the range; the object is stored whole
    fn check_object(object: &str) -> Result<(), ParseErrorKind> {
        let component = Component::Object;

        if object.ends_with(RANGE_DELIMITER) {
            return Err(ParseErrorKind::TrailingDelimiter {
                component,
                delimiter: RANGE_DELIMITER,
            });
        }

        let parts = split_parts(object, RANGE_DELIMITER, MAX_RANGE_PARTS, component)?;
        if parts.iter().any(|part| part.is_empty()) {
            return Err(ParseErrorKind::EmptySubPart { component });
        }

        Ok(())
    }
}

impl Urn for Cite2Urn {
    const DIALECT: Dialect = Dialect::Cite2;

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

impl fmt::Display for Cite2Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{URN_HEADER}:{}:{}:{}",
            self.urn_type, self.namespace, self.collection
        )?;
        if let Some(version) = &self.version {
            write!(f, "{HIERARCHY_DELIMITER}{version}")?;
        }
        write!(f, ":{}", self.object_id)
    }
}

impl FromStr for Cite2Urn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cite2Urn {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Cite2Urn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Ordered by string form; distinct values with the same string fall back to fields
impl Ord for Cite2Urn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string()
            .cmp(&other.to_string())
            .then_with(|| self.fields().cmp(&other.fields()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cite2Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let fields = self.fields();
        let mut state = serializer.serialize_struct("Cite2Urn", fields.len())?;
        for (name, value) in fields {
            state.serialize_field(name, &value)?;
        }
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cite2Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            urn_type: String,
            namespace: String,
            collection: String,
            #[serde(default)]
            version: Option<String>,
            object_id: String,
        }

        let f = Fields::deserialize(deserializer)?;
        Self::new(f.urn_type, f.namespace, f.collection, f.version, f.object_id)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(input: &str) -> ParseError {
        Cite2Urn::parse(input).unwrap_err()
    }

    #[test]
    fn parse_full_with_version() {
        let urn = Cite2Urn::parse("urn:cite2:hmt:datamodels.v1:codexmodel").unwrap();

        assert_eq!(urn.urn_type(), "cite2");
        assert_eq!(urn.namespace(), "hmt");
        assert_eq!(urn.collection(), "datamodels");
        assert_eq!(urn.version(), Some("v1"));
        assert_eq!(urn.object_id(), "codexmodel");
    }

    #[test]
    fn parse_without_version_and_with_range_object() {
        let urn = Cite2Urn::parse("urn:cite2:ns:coll:obj-2").unwrap();

        assert_eq!(urn.urn_type(), "cite2");
        assert_eq!(urn.namespace(), "ns");
        assert_eq!(urn.collection(), "coll");
        assert_eq!(urn.version(), None);
        assert_eq!(urn.object_id(), "obj-2");
    }

    #[test]
    fn requires_cite2_prefix() {
        let err = parse_err("urn:cts:ns:coll:obj");
        assert!(matches!(err.kind, ParseErrorKind::BadPrefix { .. }));
        assert!(err.to_string().contains("start with 'urn:cite2:'"));
    }

    #[test]
    fn requires_five_colon_parts() {
        let err = parse_err("urn:cite2:ns:coll");
        assert_eq!(
            err.kind,
            ParseErrorKind::WrongPartCount {
                dialect: Dialect::Cite2,
                expected: 5,
                actual: 4,
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("5 colon-delimited parts"), "{msg}");
        assert!(msg.contains("urn:cite2:ns:coll"), "{msg}");
    }

    #[test]
    fn collection_cannot_end_with_period() {
        let err = parse_err("urn:cite2:ns:coll.:obj");
        assert!(matches!(
            err.kind,
            ParseErrorKind::TrailingDelimiter {
                component: Component::CollectionInfo,
                delimiter: '.',
            }
        ));
        assert!(err.to_string().contains("end with a period"));
    }

    #[test]
    fn collection_allows_single_period_only() {
        let err = parse_err("urn:cite2:ns:coll.v1.extra:obj");
        assert!(err.to_string().contains("at most one period"));
    }

    #[test]
    fn collection_parts_must_be_non_empty() {
        let err = parse_err("urn:cite2:ns:.v1:obj");
        assert_eq!(
            err.kind,
            ParseErrorKind::EmptySubPart {
                component: Component::CollectionInfo
            }
        );
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn object_cannot_end_with_hyphen() {
        let err = parse_err("urn:cite2:ns:coll:obj-");
        assert!(err.to_string().contains("end with a hyphen"));
    }

    #[test]
    fn object_allows_single_hyphen_only() {
        let err = parse_err("urn:cite2:ns:coll:one-two-three");
        assert!(err.to_string().contains("at most one hyphen"));
    }

    #[test]
    fn object_parts_must_be_non_empty() {
        let err = parse_err("urn:cite2:ns:coll:-obj");
        assert!(err.to_string().contains("non-empty identifiers"));
    }

    #[test]
    fn namespace_collection_and_object_required() {
        assert_eq!(
            parse_err("urn:cite2::coll:obj").kind,
            ParseErrorKind::EmptyComponent {
                component: Component::Namespace
            }
        );
        assert_eq!(
            parse_err("urn:cite2:ns::obj").kind,
            ParseErrorKind::EmptyComponent {
                component: Component::CollectionInfo
            }
        );
        assert_eq!(
            parse_err("urn:cite2:ns:coll:").kind,
            ParseErrorKind::EmptyComponent {
                component: Component::Object
            }
        );
    }

    #[test]
    fn earlier_checks_shadow_later_ones() {
        // Empty namespace wins over the trailing period and hyphen
        assert!(matches!(
            parse_err("urn:cite2::coll.:obj-").kind,
            ParseErrorKind::EmptyComponent {
                component: Component::Namespace
            }
        ));
        // Collection problems win over object problems
        assert!(matches!(
            parse_err("urn:cite2:ns:a.b.c:x-y-z").kind,
            ParseErrorKind::TooManyParts {
                component: Component::CollectionInfo,
                ..
            }
        ));
        // Trailing period wins over the period count
        assert!(matches!(
            parse_err("urn:cite2:ns:a.b.:obj").kind,
            ParseErrorKind::TrailingDelimiter { .. }
        ));
    }

    #[test]
    fn prefix_checked_before_part_count() {
        assert!(matches!(
            parse_err("urn:cite2").kind,
            ParseErrorKind::BadPrefix { .. }
        ));
        assert!(matches!(
            parse_err("urn:cite2:").kind,
            ParseErrorKind::WrongPartCount { actual: 3, .. }
        ));
    }

    #[test]
    fn reparse_is_idempotent() {
        let input = "urn:cite2:hmt:msA.v1:12r-14v";
        assert_eq!(
            Cite2Urn::parse(input).unwrap(),
            Cite2Urn::parse(input).unwrap()
        );
    }

    #[test]
    fn range_accessors() {
        let urn = Cite2Urn::parse("urn:cite2:hmt:msA.v1:12r-14v").unwrap();
        assert!(urn.is_range());
        assert_eq!(urn.range_start(), "12r");
        assert_eq!(urn.range_end(), Some("14v"));

        let urn = Cite2Urn::parse("urn:cite2:hmt:msA.v1:12r").unwrap();
        assert!(!urn.is_range());
        assert_eq!(urn.range_start(), "12r");
        assert_eq!(urn.range_end(), None);
    }

    #[test]
    fn new_rejects_empty_required_fields() {
        assert_eq!(
            Cite2Urn::new("cite2", "", "coll", None, "obj"),
            Err(FieldError::Empty { field: "namespace" })
        );
        assert_eq!(
            Cite2Urn::new("cite2", "ns", "", None, "obj"),
            Err(FieldError::Empty {
                field: "collection"
            })
        );
        assert_eq!(
            Cite2Urn::new("cite2", "ns", "coll", None, ""),
            Err(FieldError::Empty { field: "object_id" })
        );
    }

    #[test]
    fn new_matches_parse() {
        let built = Cite2Urn::new("cite2", "hmt", "datamodels", Some("v1".to_string()), "codexmodel")
            .unwrap();
        let parsed = Cite2Urn::parse("urn:cite2:hmt:datamodels.v1:codexmodel").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn fields_in_declaration_order() {
        let urn = Cite2Urn::parse("urn:cite2:ns:coll:obj-2").unwrap();
        assert_eq!(
            urn.fields(),
            [
                ("urn_type", Some("cite2")),
                ("namespace", Some("ns")),
                ("collection", Some("coll")),
                ("version", None),
                ("object_id", Some("obj-2")),
            ]
        );
    }

    #[test]
    fn display_roundtrip() {
        for input in [
            "urn:cite2:hmt:datamodels.v1:codexmodel",
            "urn:cite2:ns:coll:obj-2",
        ] {
            assert_eq!(Cite2Urn::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn ordering_follows_string_form() {
        let unversioned = Cite2Urn::parse("urn:cite2:a:coll:obj").unwrap();
        let versioned = Cite2Urn::parse("urn:cite2:a:coll.v1:obj").unwrap();
        assert_eq!(
            unversioned.cmp(&versioned),
            unversioned.to_string().cmp(&versioned.to_string())
        );
        assert!(unversioned > versioned);
        assert_eq!(
            unversioned.partial_cmp(&versioned),
            Some(std::cmp::Ordering::Greater)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_exports_field_map() {
        let urn = Cite2Urn::parse("urn:cite2:ns:coll:obj-2").unwrap();
        let json = serde_json::to_string(&urn).unwrap();
        assert_eq!(
            json,
            r#"{"urn_type":"cite2","namespace":"ns","collection":"coll","version":null,"object_id":"obj-2"}"#
        );

        let back: Cite2Urn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, urn);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_empty_object() {
        let json = r#"{"urn_type":"cite2","namespace":"ns","collection":"coll","object_id":""}"#;
        let result: Result<Cite2Urn, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
