//! Conflict resolution between overlapping candidates.
//!
//! Pairwise over the candidate list: a candidate is dropped iff another
//! candidate strictly contains it and the outer one takes priority. The
//! only priority is List over Vector/Map — never the other direction, and
//! Vector/Map never subsume each other.

use tracing::trace;

use super::{ContainerKind, FoldCandidate};

pub(crate) fn resolve_conflicts(candidates: Vec<FoldCandidate>) -> Vec<FoldCandidate> {
    let keep: Vec<bool> = (0..candidates.len())
        .map(|i| should_keep(i, &candidates))
        .collect();

    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect()
}

fn should_keep(index: usize, all: &[FoldCandidate]) -> bool {
    let candidate = &all[index];
    for (j, other) in all.iter().enumerate() {
        if j == index {
            continue;
        }
        let strictly_contains =
            other.range.contains_range(candidate.range) && other.range != candidate.range;
        if strictly_contains && prioritize_outer(other, candidate) {
            trace!(
                dropped = ?candidate.range,
                outer = ?other.range,
                "fold candidate subsumed by enclosing list"
            );
            return false;
        }
    }
    true
}

fn prioritize_outer(outer: &FoldCandidate, inner: &FoldCandidate) -> bool {
    if outer.kind == ContainerKind::List
        && matches!(inner.kind, ContainerKind::Vector | ContainerKind::Map)
    {
        if outer.binding_head {
            trace!(outer = ?outer.range, "binding construct takes priority");
        }
        return true;
    }
    false
}
