//! Constants for citation URN validation.

/// Leading token shared by every URN.
pub const URN_HEADER: &str = "urn";

/// Type token of CTS URNs.
pub const CTS_TYPE: &str = "cts";

/// Type token of CITE2 URNs.
pub const CITE2_TYPE: &str = "cite2";

/// Literal prefix every CITE2 URN must start with.
pub const CITE2_PREFIX: &str = "urn:cite2:";

/// Number of colon-delimited fields in a URN of either dialect.
pub const URN_FIELD_COUNT: usize = 5;

/// Maximum dot-delimited parts in a CTS work hierarchy
/// (text group, work, version, exemplar).
pub const MAX_WORK_PARTS: usize = 4;

/// Maximum hyphen-delimited parts in a range (start and end).
pub const MAX_RANGE_PARTS: usize = 2;

/// Maximum dot-delimited parts in a CITE2 collection (collection and version).
pub const MAX_COLLECTION_PARTS: usize = 2;

/// Separator between top-level URN fields.
pub const FIELD_DELIMITER: char = ':';

/// Separator between hierarchy levels.
pub const HIERARCHY_DELIMITER: char = '.';

/// Separator between the two ends of a range.
pub const RANGE_DELIMITER: char = '-';
