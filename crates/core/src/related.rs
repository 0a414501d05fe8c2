//! "Related content" ranking by tag and technology overlap.
//!
//! Score = `2 × |shared tags| + 1 × |shared technologies|`. Zero-score
//! candidates are dropped; ties keep the order in which candidates were
//! supplied (the sort is stable).

use std::collections::HashSet;

use crate::types::DbId;

/// Weight of one shared tag.
pub const TAG_WEIGHT: u32 = 2;

/// Weight of one shared technology.
pub const TECHNOLOGY_WEIGHT: u32 = 1;

/// Maximum number of related entries returned.
pub const RELATED_LIMIT: usize = 3;

/// Anything that carries an identity plus tag and technology sets.
pub trait Taggable {
    fn key(&self) -> DbId;
    fn tags(&self) -> &[String];
    fn technologies(&self) -> &[String];
}

/// A candidate paired with its overlap score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<T> {
    pub item: T,
    pub score: u32,
}

fn shared(a: &[String], b: &[String]) -> u32 {
    let left: HashSet<&str> = a.iter().map(String::as_str).collect();
    let right: HashSet<&str> = b.iter().map(String::as_str).collect();
    left.intersection(&right).count() as u32
}

/// Overlap score of `candidate` relative to `target`.
pub fn overlap_score<T: Taggable>(target: &T, candidate: &T) -> u32 {
    TAG_WEIGHT * shared(target.tags(), candidate.tags())
        + TECHNOLOGY_WEIGHT * shared(target.technologies(), candidate.technologies())
}

/// Rank `candidates` against `target`, best first, at most [`RELATED_LIMIT`].
///
/// The target itself is skipped if it appears among the candidates.
pub fn rank_related<T: Taggable>(
    target: &T,
    candidates: impl IntoIterator<Item = T>,
) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = candidates
        .into_iter()
        .filter(|c| c.key() != target.key())
        .filter_map(|c| {
            let score = overlap_score(target, &c);
            (score > 0).then_some(Ranked { item: c, score })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(RELATED_LIMIT);
    ranked
}
