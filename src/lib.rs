//! Claimmatch Library
//!
//! Core modules for matching insured-entity names extracted from claim
//! documents against a roster of known insureds.

pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod roster;

pub use error::{ClaimError, ClaimResult};
pub use extract::{Extraction, HeuristicExtractor, NameExtractor};
pub use matcher::{find_best_match, similarity, Entity, MatchCandidate, MatchResult, UNKNOWN_INSURED};
pub use normalize::normalize;
pub use roster::Roster;
