//! Duplicate collapsing: one record per workstation key, first wins.

use indexmap::IndexMap;

use crate::types::WorkstationKey;

/// Interprets a key cell; absent and empty cells mean the row is unkeyed
/// and cannot participate in reconciliation.
pub fn row_key(cell: Option<&str>) -> Option<WorkstationKey> {
    cell.filter(|k| !k.is_empty()).map(str::to_string)
}

/// Collapses `rows` to one record per key, keeping the first occurrence
/// in input order and preserving first-seen ordering of the keys.
pub fn collapse_first_wins<R>(
    rows: impl IntoIterator<Item = R>,
    key_of: impl Fn(&R) -> WorkstationKey,
) -> IndexMap<WorkstationKey, R> {
    let mut collapsed: IndexMap<WorkstationKey, R> = IndexMap::new();
    for row in rows {
        collapsed.entry(key_of(&row)).or_insert(row);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_key_excludes_absent_and_empty() {
        assert_eq!(row_key(Some("w1")), Some("w1".to_string()));
        assert_eq!(row_key(Some("")), None);
        assert_eq!(row_key(None), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let rows = vec![("w1", "a"), ("w2", "b"), ("w1", "c")];
        let collapsed = collapse_first_wins(rows, |(k, _)| k.to_string());
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed["w1"], ("w1", "a"));
        assert_eq!(collapsed["w2"], ("w2", "b"));
    }

    #[test]
    fn preserves_first_seen_order() {
        let rows = vec![("b", 1), ("a", 2), ("b", 3), ("c", 4)];
        let collapsed = collapse_first_wins(rows, |(k, _)| k.to_string());
        let keys: Vec<&str> = collapsed.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn collapsing_is_idempotent() {
        let rows = vec![("w1", 1), ("w2", 2), ("w1", 3)];
        let once = collapse_first_wins(rows, |(k, _)| k.to_string());
        let again = collapse_first_wins(once.values().copied().collect::<Vec<_>>(), |(k, _)| {
            k.to_string()
        });
        assert_eq!(once, again);
    }
}
