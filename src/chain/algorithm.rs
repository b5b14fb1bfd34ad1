//! Chain building algorithm.
//!
//! This module implements the algorithm for flattening a thread into one
//! line per cast by walking parent pointers over an immutable index.

use std::collections::HashSet;

use crate::error::Result;
use crate::response::Cast;

use super::types::CastIndex;

/// Format one cast as its chain segment: `[@username]: text`.
pub fn format_cast(cast: &Cast) -> String {
    format!("[@{}]: {}", cast.author.username, cast.text)
}

/// Build one chain string per cast, in timestamp-ascending order.
///
/// Steps:
/// 1. Parses every timestamp and stable-sorts the casts ascending; the sort
///    determines emission order only, never chain content
/// 2. Indexes the casts by hash
/// 3. Walks each cast's ancestry to produce its chain
/// 4. Drops empty chains before emission
///
/// For a fixed input list the output is fully deterministic.
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) if any timestamp is not
/// valid RFC 3339. A parent hash missing from the set is not an error; see
/// [`build_chain`].
pub fn build_chains(casts: Vec<Cast>) -> Result<Vec<String>> {
    if casts.is_empty() {
        return Ok(Vec::new());
    }

    let index = CastIndex::build(casts)?;
    let chains = index
        .ordered_hashes()
        .map(|hash| build_chain(hash, &index))
        .filter(|chain| !chain.is_empty())
        .collect();

    Ok(chains)
}

/// Build the ancestor-to-self chain for one cast.
///
/// The walk is iterative with a visited set, so cyclic `parentHash` data
/// terminates with a truncated chain instead of looping forever. A parent
/// hash that is missing from the index contributes an empty leading segment
/// and stops the walk; sibling replies to a missing parent still render.
/// An unknown `hash` yields an empty string.
pub fn build_chain(hash: &str, index: &CastIndex) -> String {
    let Some(cast) = index.get(hash) else {
        return String::new();
    };

    // Segments are collected leaf-to-root, then reversed for output.
    let mut segments = vec![format_cast(cast)];
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(cast.hash.as_str());

    let mut current = cast;
    while let Some(parent_hash) = current.parent_hash.as_deref() {
        if !visited.insert(parent_hash) {
            tracing::warn!(hash = parent_hash, "cycle in parent references, truncating chain");
            break;
        }
        match index.get(parent_hash) {
            Some(parent) => {
                segments.push(format_cast(parent));
                current = parent;
            }
            None => {
                // Parent outside the fetched set: degrade to an empty
                // ancestor segment rather than erroring.
                segments.push(String::new());
                break;
            }
        }
    }

    segments.reverse();
    segments.join("; ")
}
