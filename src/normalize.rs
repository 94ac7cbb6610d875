//! Tag normalization: recovering agency identifiers from free-form tags.

use crate::constants::tags;
use crate::types::AgencyId;

/// Extracts the agency identifier from one raw tag cell.
///
/// A cell yields an identifier only when it starts with the exact
/// `AgencyID-` prefix and carries a non-empty remainder; matching is
/// case-sensitive and anchored at the start of the cell, so embedded or
/// prefixed-elsewhere occurrences are ignored. Everything after the
/// prefix is kept verbatim, including further hyphens.
pub fn normalize_tag(raw: Option<&str>) -> Option<AgencyId> {
    raw.and_then(|v| v.strip_prefix(tags::AGENCY_ID_PREFIX))
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
}
