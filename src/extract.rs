//! Insured-name extraction
//!
//! Upstream capability of the matcher: given raw document text, produce a
//! candidate name or a failure marker. Backends sit behind the
//! [`NameExtractor`] trait so callers can plug in other extractors (e.g. a
//! text-generation service); the shipped backend is a label/pattern heuristic
//! that covers the common claim-document layouts. Retry, timeout and fallback
//! policy belong to the caller, never to the matcher.

use crate::error::ClaimResult;
use crate::matcher::UNKNOWN_INSURED;
use regex::Regex;
use tracing::debug;

/// Result of an extraction attempt: a name, or a known failure.
/// Failure is data; the matcher treats it as "do not attempt to match".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A candidate insured name, exactly as it appeared in the document
    Found(String),
    /// No insured name could be identified
    Unknown,
}

impl Extraction {
    /// The candidate string to hand to the matcher. Failures map to the
    /// [`UNKNOWN_INSURED`] sentinel, which the matcher short-circuits on.
    pub fn candidate(&self) -> &str {
        match self {
            Extraction::Found(name) => name,
            Extraction::Unknown => UNKNOWN_INSURED,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Extraction::Unknown)
    }
}

/// Trait for insured-name extraction backends
pub trait NameExtractor: Send + Sync {
    /// Extract the primary insured name from document text
    fn extract(&self, document: &str) -> ClaimResult<Extraction>;
}

/// Pattern-based extractor for claim documents.
///
/// Tries, in order: explicit labels ("Insured:", "Policyholder:",
/// "Claim Report - "), company names with a legal suffix, a scan for known
/// roster names, and finally any capitalized word run.
pub struct HeuristicExtractor {
    label_patterns: Vec<Regex>,
    company_patterns: Vec<Regex>,
    /// Display names from the roster, scanned verbatim as a fallback
    known_names: Vec<String>,
}

impl HeuristicExtractor {
    pub fn new() -> ClaimResult<Self> {
        let label_patterns = vec![
            Regex::new(r"(?i)claim report\s*[-:]\s*([^\n\r]+)")?,
            Regex::new(
                r"(?mi)^\s*(?:primary insured|named insured|insured entity|insured party|policyholder|policy holder|policy-holder|insured|client)\s*:\s*([^\n\r]+)",
            )?,
        ];
        let company_patterns = vec![
            // Company name ending in a legal suffix
            Regex::new(
                r"([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*(?:\s+&\s+[A-Z][A-Za-z]+)?,?\s+(?:LLC|Corporation|Corp|Inc|Ltd|Limited|Partners|Group|Holdings|Services|Solutions))",
            )?,
            // Last resort: any capitalized word run
            Regex::new(r"([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+){1,5})")?,
        ];

        Ok(Self {
            label_patterns,
            company_patterns,
            known_names: Vec::new(),
        })
    }

    /// Also scan the document for these names verbatim (typically the roster
    /// display names) before falling back to the loose patterns.
    pub fn with_known_names(mut self, names: Vec<String>) -> Self {
        self.known_names = names;
        self
    }
}

impl NameExtractor for HeuristicExtractor {
    fn extract(&self, document: &str) -> ClaimResult<Extraction> {
        for pattern in &self.label_patterns {
            if let Some(caps) = pattern.captures(document) {
                if let Some(name) = caps.get(1) {
                    let name = name.as_str().trim();
                    if !name.is_empty() {
                        debug!("Extracted labeled insured name: '{}'", name);
                        return Ok(Extraction::Found(name.to_string()));
                    }
                }
            }
        }

        // Suffix pattern before the known-name scan: an explicit company name
        // in the text beats a coincidental roster mention.
        if let Some(caps) = self.company_patterns[0].captures(document) {
            if let Some(name) = caps.get(1) {
                let name = name.as_str().trim();
                debug!("Extracted company-suffix name: '{}'", name);
                return Ok(Extraction::Found(name.to_string()));
            }
        }

        for known in &self.known_names {
            if document.contains(known.as_str()) {
                debug!("Found known insured verbatim: '{}'", known);
                return Ok(Extraction::Found(known.clone()));
            }
        }

        if let Some(caps) = self.company_patterns[1].captures(document) {
            if let Some(name) = caps.get(1) {
                let name = name.as_str().trim();
                debug!("Extracted capitalized word run: '{}'", name);
                return Ok(Extraction::Found(name.to_string()));
            }
        }

        debug!("No insured name found in document");
        Ok(Extraction::Unknown)
    }
}
