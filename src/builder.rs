//! Typestate builders for constructing URN values without parsing.
//!
//! The phantom state tracks which fields have been set, so the CTS work
//! hierarchy can only be extended one level at a time and `build()` is only
//! available once every required field is present.

use std::marker::PhantomData;

use crate::cite2::Cite2Urn;
use crate::constants::{CITE2_TYPE, CTS_TYPE};
use crate::cts::CtsUrn;
use crate::error::FieldError;

/// Marker: No fields set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Namespace has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasNamespace;

/// Marker: CTS text group has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasTextGroup;

/// Marker: CTS work has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasWork;

/// Marker: CTS version has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasVersion;

/// Marker: CTS exemplar has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasExemplar;

/// Marker: CITE2 collection has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasCollection;

/// Marker: All required CITE2 fields are set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::HasTextGroup {}
    impl Sealed for super::HasWork {}
    impl Sealed for super::HasVersion {}
    impl Sealed for super::HasExemplar {}
}

/// Builder states in which a CTS URN has every required field.
pub trait CtsBuildable: sealed::Sealed {}

impl CtsBuildable for HasTextGroup {}
impl CtsBuildable for HasWork {}
impl CtsBuildable for HasVersion {}
impl CtsBuildable for HasExemplar {}

/// A typestate builder for [`CtsUrn`] values.
///
/// Fields are set from least to most specific: namespace, text group, then
/// optionally work, version and exemplar. A passage may be added once the
/// text group is set.
///
/// # Examples
///
/// ```
/// use urn_citation::CtsUrnBuilder;
///
/// let urn = CtsUrnBuilder::new()
///     .namespace("greekLit")
///     .text_group("tlg0012")
///     .work("tlg001")
///     .passage("1.1-1.10")
///     .build()
///     .unwrap();
///
/// assert_eq!(urn.to_string(), "urn:cts:greekLit:tlg0012.tlg001:1.1-1.10");
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use urn_citation::CtsUrnBuilder;
///
/// // Error: a version needs a work
/// let builder = CtsUrnBuilder::new()
///     .namespace("greekLit")
///     .text_group("tlg0012")
///     .version("wacl1");
/// ```
///
/// ```compile_fail
/// use urn_citation::CtsUrnBuilder;
///
/// // Error: cannot build without a text group
/// let urn = CtsUrnBuilder::new().namespace("greekLit").build();
/// ```
#[derive(Debug, Clone)]
pub struct CtsUrnBuilder<State = Empty> {
    namespace: Option<String>,
    text_group: Option<String>,
    work: Option<String>,
    version: Option<String>,
    exemplar: Option<String>,
    passage: Option<String>,
    _state: PhantomData<State>,
}

impl<State> CtsUrnBuilder<State> {
    fn advance<Next>(self) -> CtsUrnBuilder<Next> {
        CtsUrnBuilder {
            namespace: self.namespace,
            text_group: self.text_group,
            work: self.work,
            version: self.version,
            exemplar: self.exemplar,
            passage: self.passage,
            _state: PhantomData,
        }
    }
}

impl CtsUrnBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: None,
            text_group: None,
            work: None,
            version: None,
            exemplar: None,
            passage: None,
            _state: PhantomData,
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> CtsUrnBuilder<HasNamespace> {
        self.namespace = Some(namespace.into());
        self.advance()
    }
}

impl Default for CtsUrnBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl CtsUrnBuilder<HasNamespace> {
    /// Sets the text group.
    #[must_use]
    pub fn text_group(mut self, text_group: impl Into<String>) -> CtsUrnBuilder<HasTextGroup> {
        self.text_group = Some(text_group.into());
        self.advance()
    }
}

impl CtsUrnBuilder<HasTextGroup> {
    /// Sets the work.
    #[must_use]
    pub fn work(mut self, work: impl Into<String>) -> CtsUrnBuilder<HasWork> {
        self.work = Some(work.into());
        self.advance()
    }
}

impl CtsUrnBuilder<HasWork> {
    /// Sets the version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> CtsUrnBuilder<HasVersion> {
        self.version = Some(version.into());
        self.advance()
    }
}

impl CtsUrnBuilder<HasVersion> {
    /// Sets the exemplar.
    #[must_use]
    pub fn exemplar(mut self, exemplar: impl Into<String>) -> CtsUrnBuilder<HasExemplar> {
        self.exemplar = Some(exemplar.into());
        self.advance()
    }
}

impl<State: CtsBuildable> CtsUrnBuilder<State> {
    /// Sets the passage, a single reference or a hyphen-joined range.
    #[must_use]
    pub fn passage(mut self, passage: impl Into<String>) -> Self {
        self.passage = Some(passage.into());
        self
    }

    /// Builds the URN with the `cts` type token.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` if the namespace or text group is empty.
    pub fn build(self) -> Result<CtsUrn, FieldError> {
        CtsUrn::new(
            CTS_TYPE,
            self.namespace.unwrap_or_default(),
            self.text_group.unwrap_or_default(),
            self.work,
            self.version,
            self.exemplar,
            self.passage,
        )
    }
}

/// A typestate builder for [`Cite2Urn`] values.
///
/// Fields are set in order: namespace, collection, optional version, then
/// object.
///
/// # Examples
///
/// ```
/// use urn_citation::Cite2UrnBuilder;
///
/// let urn = Cite2UrnBuilder::new()
///     .namespace("hmt")
///     .collection("datamodels")
///     .version("v1")
///     .object_id("codexmodel")
///     .build()
///     .unwrap();
///
/// assert_eq!(urn.to_string(), "urn:cite2:hmt:datamodels.v1:codexmodel");
/// ```
///
/// ```compile_fail
/// use urn_citation::Cite2UrnBuilder;
///
/// // Error: cannot build without an object
/// let urn = Cite2UrnBuilder::new().namespace("hmt").collection("msA").build();
/// ```
#[derive(Debug, Clone)]
pub struct Cite2UrnBuilder<State = Empty> {
    namespace: Option<String>,
    collection: Option<String>,
    version: Option<String>,
    object_id: Option<String>,
    _state: PhantomData<State>,
}

impl<State> Cite2UrnBuilder<State> {
    fn advance<Next>(self) -> Cite2UrnBuilder<Next> {
        Cite2UrnBuilder {
            namespace: self.namespace,
            collection: self.collection,
            version: self.version,
            object_id: self.object_id,
            _state: PhantomData,
        }
    }
}

impl Cite2UrnBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: None,
            collection: None,
            version: None,
            object_id: None,
            _state: PhantomData,
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Cite2UrnBuilder<HasNamespace> {
        self.namespace = Some(namespace.into());
        self.advance()
    }
}

impl Default for Cite2UrnBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl Cite2UrnBuilder<HasNamespace> {
    /// Sets the collection.
    #[must_use]
    pub fn collection(mut self, collection: impl Into<String>) -> Cite2UrnBuilder<HasCollection> {
        self.collection = Some(collection.into());
        self.advance()
    }
}

impl Cite2UrnBuilder<HasCollection> {
    /// Sets the collection version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the object, a single identifier or a hyphen-joined range.
    #[must_use]
    pub fn object_id(mut self, object_id: impl Into<String>) -> Cite2UrnBuilder<Ready> {
        self.object_id = Some(object_id.into());
        self.advance()
    }
}

impl Cite2UrnBuilder<Ready> {
    /// Builds the URN with the `cite2` type token.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` if the namespace, collection or object is
    /// empty.
    pub fn build(self) -> Result<Cite2Urn, FieldError> {
        Cite2Urn::new(
            CITE2_TYPE,
            self.namespace.unwrap_or_default(),
            self.collection.unwrap_or_default(),
            self.version,
            self.object_id.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cts_builder_text_group_only() {
        let urn = CtsUrnBuilder::new()
            .namespace("greekLit")
            .text_group("tlg0012")
            .build()
            .unwrap();

        assert_eq!(urn.urn_type(), "cts");
        assert_eq!(urn.work(), None);
        assert_eq!(urn.passage(), None);
    }

    #[test]
    fn cts_builder_full_hierarchy() {
        let urn = CtsUrnBuilder::new()
            .namespace("greekLit")
            .text_group("tlg0012")
            .work("001")
            .version("wacl1")
            .exemplar("ex1")
            .passage("1.1-1.5")
            .build()
            .unwrap();

        assert_eq!(
            urn,
            CtsUrn::parse("urn:cts:greekLit:tlg0012.001.wacl1.ex1:1.1-1.5").unwrap()
        );
    }

    #[test]
    fn cts_builder_rejects_empty_text_group() {
        let result = CtsUrnBuilder::new()
            .namespace("greekLit")
            .text_group("")
            .build();
        assert_eq!(
            result,
            Err(FieldError::Empty {
                field: "text_group"
            })
        );
    }

    #[test]
    fn cite2_builder_without_version() {
        let urn = Cite2UrnBuilder::new()
            .namespace("ns")
            .collection("coll")
            .object_id("obj-2")
            .build()
            .unwrap();

        assert_eq!(urn, Cite2Urn::parse("urn:cite2:ns:coll:obj-2").unwrap());
    }

    #[test]
    fn cite2_builder_rejects_empty_object() {
        let result = Cite2UrnBuilder::new()
            .namespace("ns")
            .collection("coll")
            .object_id("")
            .build();
        assert_eq!(result, Err(FieldError::Empty { field: "object_id" }));
    }

    #[test]
    fn builder_default_matches_new() {
        let a = CtsUrnBuilder::default().namespace("x").text_group("y").build();
        let b = CtsUrnBuilder::new().namespace("x").text_group("y").build();
        assert_eq!(a, b);
    }
}
