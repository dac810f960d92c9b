//! Parser and validator for CTS and CITE2 citation URNs.
//!
//! This crate parses and validates the two URN dialects of the CITE
//! architecture for citing scholarly texts and the objects that carry them.
//!
//! # Overview
//!
//! Both dialects share a five-field, colon-delimited envelope and differ in
//! the grammar of their last two fields:
//!
//! ```text
//! urn:cts:<namespace>:<text_group>[.<work>[.<version>[.<exemplar>]]]:[<passage>[-<passage>]]
//! urn:cite2:<namespace>:<collection>[.<version>]:<object>[-<object>]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use urn_citation::{Cite2Urn, CtsUrn};
//!
//! // Passages of texts
//! let urn = CtsUrn::parse("urn:cts:greekLit:tlg0012.001.wacl1.ex1:1.1-1.5").unwrap();
//! assert_eq!(urn.text_group(), "tlg0012");
//! assert_eq!(urn.passage(), Some("1.1-1.5"));
//! assert_eq!(urn.range_end(), Some("1.5"));
//!
//! // Objects in collections
//! let urn = Cite2Urn::parse("urn:cite2:hmt:datamodels.v1:codexmodel").unwrap();
//! assert_eq!(urn.collection(), "datamodels");
//! assert_eq!(urn.version(), Some("v1"));
//!
//! // Errors name the first rule the input breaks
//! let err = Cite2Urn::parse("urn:cite2:ns:coll:obj-").unwrap_err();
//! assert!(err.to_string().contains("cannot end with a hyphen"));
//! ```
//!
//! # Strictness
//!
//! CITE2 URNs are checked field by field, in a fixed order. CTS URNs are
//! parsed loosely: the header and type token are not checked and empty work
//! hierarchy levels are kept. [`CtsParseOptions`] enables the extra checks.
//!
//! Passages and objects are stored exactly as written; ranges are exposed
//! through derived accessors such as [`CtsUrn::range`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod cite2;
mod constants;
mod cts;
mod error;
#[cfg(kani)]
mod kani_impls;
mod options;
pub mod prelude;
mod range;
mod split;
mod urn;

pub use builder::{
    Cite2UrnBuilder, CtsBuildable, CtsUrnBuilder, Empty, HasCollection, HasExemplar,
    HasNamespace, HasTextGroup, HasVersion, HasWork, Ready,
};
pub use cite2::Cite2Urn;
pub use constants::{
    CITE2_PREFIX, CITE2_TYPE, CTS_TYPE, FIELD_DELIMITER, HIERARCHY_DELIMITER,
    MAX_COLLECTION_PARTS, MAX_RANGE_PARTS, MAX_WORK_PARTS, RANGE_DELIMITER, URN_FIELD_COUNT,
    URN_HEADER,
};
pub use cts::CtsUrn;
pub use error::{Component, FieldError, ParseError, ParseErrorKind};
pub use options::CtsParseOptions;
pub use range::UrnRange;
pub use urn::{AnyUrn, Dialect, Urn};
