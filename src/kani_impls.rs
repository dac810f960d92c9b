//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Cite2Urn, CtsUrn, UrnRange};

/// Identifier characters: no delimiters
const IDENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Characters that exercise every delimiter of the grammar
const GRAMMAR_CHARS: &[u8] = b"urnctsie2:.-a";

fn pick(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

/// Generate a 1-4 char identifier for tractability
fn arbitrary_ident() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len).map(|_| pick(IDENT_CHARS)).collect()
}

fn arbitrary_grammar_string(max: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max + 1);
    (0..len).map(|_| pick(GRAMMAR_CHARS)).collect()
}

impl kani::Arbitrary for Cite2Urn {
    fn any() -> Self {
        let has_version: bool = kani::any();
        let is_range: bool = kani::any();

        let version = has_version.then(arbitrary_ident);
        let object_id = if is_range {
            format!("{}-{}", arbitrary_ident(), arbitrary_ident())
        } else {
            arbitrary_ident()
        };

        Cite2Urn::new("cite2", arbitrary_ident(), arbitrary_ident(), version, object_id)
            .expect("valid CITE2 URN by construction")
    }
}

impl kani::Arbitrary for CtsUrn {
    fn any() -> Self {
        let depth: usize = kani::any();
        let depth = depth % 4;

        let work = (depth >= 1).then(arbitrary_ident);
        let version = (depth >= 2).then(arbitrary_ident);
        let exemplar = (depth >= 3).then(arbitrary_ident);

        let has_passage: bool = kani::any();
        let passage = has_passage.then(arbitrary_ident);

        CtsUrn::new(
            "cts",
            arbitrary_ident(),
            arbitrary_ident(),
            work,
            version,
            exemplar,
            passage,
        )
        .expect("valid CTS URN by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: CITE2 parsing never panics on grammar-shaped input
#[kani::proof]
#[kani::unwind(14)]
fn proof_cite2_parse_never_panics() {
    let input = arbitrary_grammar_string(12);
    let _ = Cite2Urn::parse(&input);
}

/// Proof: CTS parsing never panics on grammar-shaped input
#[kani::proof]
#[kani::unwind(14)]
fn proof_cts_parse_never_panics() {
    let input = arbitrary_grammar_string(12);
    let _ = CtsUrn::parse(&input);
}

/// Proof: A displayed CITE2 URN parses back to the same value
#[kani::proof]
#[kani::unwind(10)]
fn proof_cite2_display_roundtrip() {
    let urn: Cite2Urn = kani::any();
    let reparsed = Cite2Urn::parse(&urn.to_string()).expect("displayed URN should parse");
    assert_eq!(reparsed, urn);
}

/// Proof: A displayed CTS URN parses back to the same value
#[kani::proof]
#[kani::unwind(10)]
fn proof_cts_display_roundtrip() {
    let urn: CtsUrn = kani::any();
    let reparsed = CtsUrn::parse(&urn.to_string()).expect("displayed URN should parse");
    assert_eq!(reparsed, urn);
}

/// Proof: Splitting a range and displaying it reproduces the reference
#[kani::proof]
#[kani::unwind(10)]
fn proof_range_display_reproduces_reference() {
    let urn: Cite2Urn = kani::any();
    assert_eq!(UrnRange::split(urn.object_id()).to_string(), urn.object_id());
}
