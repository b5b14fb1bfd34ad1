//! Core types for the chain-flattening API.

use std::collections::HashMap;

use crate::error::Result;
use crate::response::Cast;

/// An owned, immutable lookup of casts by hash plus their emission order.
///
/// Built once per thread: every timestamp is parsed up front (a bad record
/// fails the whole build), the casts are stable-sorted ascending by
/// timestamp, and the hash index is filled in a single pass. Duplicate
/// hashes keep the last record seen.
#[derive(Debug, Clone)]
pub struct CastIndex {
    /// Hash -> cast, unique.
    by_hash: HashMap<String, Cast>,
    /// Hashes in timestamp-ascending order, as received (duplicates kept).
    order: Vec<String>,
}

impl CastIndex {
    /// Build an index from the casts of one thread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) if any cast carries a
    /// timestamp that is not valid RFC 3339.
    pub fn build(casts: Vec<Cast>) -> Result<Self> {
        let mut keyed = Vec::with_capacity(casts.len());
        for cast in casts {
            let timestamp = cast.parsed_timestamp()?;
            keyed.push((timestamp, cast));
        }

        // Stable sort: equal timestamps keep their input order.
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        let mut by_hash = HashMap::with_capacity(keyed.len());
        let mut order = Vec::with_capacity(keyed.len());
        for (_, cast) in keyed {
            order.push(cast.hash.clone());
            by_hash.insert(cast.hash.clone(), cast);
        }

        Ok(Self { by_hash, order })
    }

    /// Look up a cast by hash.
    pub fn get(&self, hash: &str) -> Option<&Cast> {
        self.by_hash.get(hash)
    }

    /// Check whether a hash is present in the index.
    pub fn contains(&self, hash: &str) -> bool {
        self.by_hash.contains_key(hash)
    }

    /// Hashes in emission (timestamp-ascending) order.
    pub fn ordered_hashes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct casts in the index.
    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    /// Check if the index holds no casts.
    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::response::Author;

    fn make_cast(hash: &str, timestamp: &str) -> Cast {
        Cast {
            hash: hash.to_string(),
            parent_hash: None,
            author: Author {
                username: "tester".to_string(),
            },
            text: "text".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_build_empty() {
        let index = CastIndex::build(vec![]).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.ordered_hashes().count(), 0);
    }

    #[test]
    fn test_build_orders_by_timestamp() {
        let casts = vec![
            make_cast("0xb", "2024-01-02T00:00:00Z"),
            make_cast("0xa", "2024-01-01T00:00:00Z"),
            make_cast("0xc", "2024-01-03T00:00:00Z"),
        ];

        let index = CastIndex::build(casts).unwrap();
        let order: Vec<&str> = index.ordered_hashes().collect();
        assert_eq!(order, vec!["0xa", "0xb", "0xc"]);
    }

    #[test]
    fn test_build_stable_on_equal_timestamps() {
        let casts = vec![
            make_cast("0xfirst", "2024-01-01T00:00:00Z"),
            make_cast("0xsecond", "2024-01-01T00:00:00Z"),
        ];

        let index = CastIndex::build(casts).unwrap();
        let order: Vec<&str> = index.ordered_hashes().collect();
        assert_eq!(order, vec!["0xfirst", "0xsecond"]);
    }

    #[test]
    fn test_build_duplicate_hash_last_write_wins() {
        let mut first = make_cast("0xdup", "2024-01-01T00:00:00Z");
        first.text = "first".to_string();
        let mut second = make_cast("0xdup", "2024-01-02T00:00:00Z");
        second.text = "second".to_string();

        let index = CastIndex::build(vec![first, second]).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("0xdup").unwrap().text, "second");
    }

    #[test]
    fn test_build_bad_timestamp() {
        let casts = vec![make_cast("0xa", "not-a-timestamp")];
        assert!(matches!(CastIndex::build(casts), Err(Error::Parse(_))));
    }

    #[test]
    fn test_lookup() {
        let index = CastIndex::build(vec![make_cast("0xa", "2024-01-01T00:00:00Z")]).unwrap();
        assert!(index.contains("0xa"));
        assert!(!index.contains("0xb"));
        assert_eq!(index.get("0xa").unwrap().hash, "0xa");
        assert!(index.get("0xb").is_none());
    }
}
