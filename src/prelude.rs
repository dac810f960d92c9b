//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use urn_citation::prelude::*;
//!
//! let urn = AnyUrn::parse("urn:cite2:hmt:msA.v1:12r").unwrap();
//! assert!(Cite2Urn::is_valid("urn:cite2:hmt:msA.v1:12r"));
//! assert_eq!(urn.dialect(), Dialect::Cite2);
//! ```
//!
//! Builder state markers are intentionally excluded as they are
//! implementation details.

pub use crate::{
    // Core types
    AnyUrn, Cite2Urn, CtsUrn, Dialect, Urn, UrnRange,
    // Builders and options
    Cite2UrnBuilder, CtsParseOptions, CtsUrnBuilder,
    // Errors
    Component, FieldError, ParseError, ParseErrorKind,
    // Constants
    CITE2_PREFIX, CITE2_TYPE, CTS_TYPE, URN_FIELD_COUNT, URN_HEADER,
};
