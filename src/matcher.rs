//! Entity matching engine
//!
//! Scores an extracted candidate name against the roster of known insureds
//! using normalized Levenshtein similarity and returns every roster entry
//! ranked by score. Matching is assistive, not authoritative, so the full
//! ranking is always surfaced for human review rather than just the winner.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;
use tracing::debug;

/// Sentinel the upstream extractor returns when no insured name was found.
/// A known-failed extraction must never appear to match anything.
pub const UNKNOWN_INSURED: &str = "Unknown Insured";

/// A known insured organisation from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Opaque unique identifier
    pub internal_id: String,
    /// Display name
    pub name: String,
}

impl Entity {
    pub fn new(internal_id: &str, name: &str) -> Self {
        Self {
            internal_id: internal_id.to_string(),
            name: name.to_string(),
        }
    }
}

/// One scored roster entry
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    pub entity: Entity,
    /// Similarity score in [0, 1]
    pub similarity: f64,
}

/// Outcome of a match call. "No match" is represented as data, never as an
/// error, so callers can always render a result row.
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    /// Top-ranked entity, or None when nothing was scored
    pub best_entity: Option<Entity>,
    /// Similarity of the top-ranked entity, 0 when `ranked` is empty
    pub confidence: f64,
    /// Every roster entity exactly once, descending by similarity.
    /// Equal scores keep roster order (stable sort).
    pub ranked: Vec<MatchCandidate>,
}

impl MatchResult {
    fn no_match() -> Self {
        Self::default()
    }
}

/// Similarity between two already-normalized names.
///
/// Returns 0 if either string is empty, 1 on exact equality, otherwise
/// `1 - levenshtein(a, b) / max(len)`. Distance never exceeds the longer
/// length, so the result is always within [0, 1]. Symmetric in its arguments.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    normalized_levenshtein(a, b)
}

/// Find the best roster match for an extracted candidate name.
///
/// An empty candidate, an empty roster, or the [`UNKNOWN_INSURED`] sentinel
/// short-circuits to a zero-confidence result without scoring anything.
pub fn find_best_match(candidate_name: &str, roster: &[Entity]) -> MatchResult {
    if candidate_name.is_empty() || roster.is_empty() || candidate_name == UNKNOWN_INSURED {
        debug!(
            "Nothing to match (candidate: '{}', roster: {} entries)",
            candidate_name,
            roster.len()
        );
        return MatchResult::no_match();
    }

    let normalized_name = normalize(candidate_name);
    debug!("Matching normalized candidate: '{}'", normalized_name);

    let mut ranked: Vec<MatchCandidate> = roster
        .iter()
        .map(|entity| MatchCandidate {
            entity: entity.clone(),
            similarity: similarity(&normalized_name, &normalize(&entity.name)),
        })
        .collect();

    // Stable sort keeps roster order for equal scores, making ties deterministic.
    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, cand) in ranked.iter().take(5).enumerate() {
        debug!(
            "  {}. {} ({}): {:.3}",
            i + 1,
            cand.entity.name,
            cand.entity.internal_id,
            cand.similarity
        );
    }

    let (best_entity, confidence) = match ranked.first() {
        Some(top) => (Some(top.entity.clone()), top.similarity),
        None => (None, 0.0),
    };

    MatchResult {
        best_entity,
        confidence,
        ranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Entity> {
        vec![
            Entity::new("A1B2", "Riley HealthCare LLC"),
            Entity::new("C3D4", "Quail Creek RE LLC"),
            Entity::new("E5F6", "William James Group LLC"),
            Entity::new("G7H8", "Northstar Logistics Inc."),
            Entity::new("I9J0", "Evergreen Farms Ltd."),
        ]
    }

    #[test]
    fn test_similarity_symmetry() {
        let pairs = [
            ("riley healthcare llc", "riley helthcare llc"),
            ("abc", "xyz"),
            ("northstar", "north star"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_identity() {
        for s in ["a", "riley healthcare llc", "x y z"] {
            assert_eq!(similarity(s, s), 1.0);
        }
    }

    #[test]
    fn test_similarity_bounds() {
        let pairs = [
            ("a", "completely different and much longer"),
            ("abc", "abd"),
            ("short", "sh"),
        ];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{} vs {} -> {}", a, b, score);
        }
    }

    #[test]
    fn test_similarity_zero_on_empty() {
        assert_eq!(similarity("", "anything"), 0.0);
        assert_eq!(similarity("anything", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_exact_match() {
        let result = find_best_match("Riley HealthCare LLC", &roster());
        assert_eq!(result.best_entity.unwrap().internal_id, "A1B2");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_match_survives_case_and_punctuation() {
        let result = find_best_match("riley healthcare llc.", &roster());
        assert_eq!(result.best_entity.unwrap().internal_id, "A1B2");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_one_letter_typo() {
        // "Helthcare" is one deletion away from "HealthCare";
        // 1 - 1/len("riley healthcare llc") = 0.95
        let result = find_best_match("Riley Helthcare LLC", &roster());
        assert_eq!(result.best_entity.unwrap().internal_id, "A1B2");
        assert!(result.confidence < 1.0);
        assert!((result.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_unrelated_name_low_confidence() {
        let result = find_best_match("Totally Unrelated Co", &roster());
        assert!(result.best_entity.is_some());
        assert!(result.confidence < 0.5);
        assert_eq!(result.ranked.len(), roster().len());
    }

    #[test]
    fn test_ranked_is_complete() {
        let entities = roster();
        let result = find_best_match("Quail Creek", &entities);
        assert_eq!(result.ranked.len(), entities.len());
        for entity in &entities {
            assert_eq!(
                result
                    .ranked
                    .iter()
                    .filter(|c| c.entity.internal_id == entity.internal_id)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_confidence_equals_top_similarity() {
        let result = find_best_match("Evergreen Farms", &roster());
        assert_eq!(result.confidence, result.ranked[0].similarity);
    }

    #[test]
    fn test_unknown_insured_sentinel() {
        let result = find_best_match(UNKNOWN_INSURED, &roster());
        assert!(result.best_entity.is_none());
        assert_eq!(result.confidence, 0.0);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_empty_candidate() {
        let result = find_best_match("", &roster());
        assert!(result.best_entity.is_none());
        assert_eq!(result.confidence, 0.0);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let result = find_best_match("Acme LLC", &[]);
        assert!(result.best_entity.is_none());
        assert_eq!(result.confidence, 0.0);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_roster_order() {
        // Two roster entries equidistant from the candidate: the one listed
        // first must rank first.
        let entities = vec![Entity::new("X1", "abcd"), Entity::new("X2", "abce")];
        let result = find_best_match("abcf", &entities);
        assert_eq!(result.ranked[0].similarity, result.ranked[1].similarity);
        assert_eq!(result.ranked[0].entity.internal_id, "X1");
    }

    #[test]
    fn test_roster_is_untouched() {
        let entities = roster();
        let before = entities.clone();
        let _ = find_best_match("Riley HealthCare LLC", &entities);
        assert_eq!(entities, before);
    }
}
