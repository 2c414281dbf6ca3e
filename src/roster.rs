//! Insured roster
//!
//! The roster is a small, fixed list of known insureds, supplied whole to the
//! matcher and treated as read-only. It is a JSON file under the config
//! directory; a built-in default list ships for first runs. Deliberately no
//! database: the list is tens of entries and static for the life of a process.

use crate::error::ClaimResult;
use crate::matcher::Entity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The full set of known insured entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub entities: Vec<Entity>,
}

impl Default for Roster {
    fn default() -> Self {
        let entities = [
            ("A1B2", "Riley HealthCare LLC"),
            ("C3D4", "Quail Creek RE LLC"),
            ("E5F6", "William James Group LLC"),
            ("G7H8", "Northstar Logistics Inc."),
            ("I9J0", "Evergreen Farms Ltd."),
            ("K1L2", "Beacon Financial Services Corp"),
            ("M3N4", "Hudson Valley Medical Partners"),
            ("O5P6", "Sierra Manufacturing Co."),
            ("Q7R8", "Lakeside Property Holdings, LLC"),
            ("S9T0", "Atlas Retail Group, Inc."),
            ("U1V2", "Pioneer Energy Solutions"),
            ("W3X4", "Blue Ridge Hospitality Partners"),
            ("Y5Z6", "Copper Mountain Mining Corp."),
            ("B7C8", "Silverline Software Ltd."),
            ("D9E0", "Harbor Point Marine Services"),
            ("F1G2", "Metro Transit Authority"),
            ("H3I4", "Golden Gate Ventures LLC"),
            ("J5K6", "Cypress Pharmaceuticals, Inc."),
            ("L7M8", "Redwood Timber Holdings"),
            ("N9O0", "Summit Peak Outdoor Gear"),
            ("P1Q2", "Capital Square Investments"),
            ("R3S4", "Ironclad Security Solutions"),
            ("T5U6", "Frontier Airlines Group"),
            ("V7W8", "Majestic Resorts & Spas Ltd."),
            ("X9Y0", "Orchard Valley Foods"),
            ("Z1A2", "Starlight Entertainment Corp"),
            ("B3D4", "Cascade Water Works"),
            ("F5H6", "Urban Grid Construction"),
            ("J7L8", "Vertex Capital Management"),
        ]
        .iter()
        .map(|(id, name)| Entity::new(id, name))
        .collect();

        Self { entities }
    }
}

impl Roster {
    /// Load a roster from a JSON file
    pub fn load(path: &Path) -> ClaimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster: Roster = serde_json::from_str(&content)?;
        Ok(roster)
    }

    /// Load from file, falling back to the built-in default list
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(roster) => return roster,
                Err(e) => {
                    tracing::warn!("⚠️ Roster file unreadable, using built-in list: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save the roster to a JSON file
    pub fn save(&self, path: &Path) -> ClaimResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Default on-disk location of the roster file
pub fn roster_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("claimmatch")
        .join("roster.json")
}
