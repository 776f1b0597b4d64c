//! Shared configuration types for Caldera
//!
//! This crate contains the serializable activation config shared between
//! caldera-core and the CLI. The JSON field names (`activationTicks`,
//! `ventPairs`) are a file-format contract and must not change.

use serde::{Deserialize, Serialize};

/// Game ticks per second.
pub const TICKS_PER_SECOND: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Vent Pair
// ─────────────────────────────────────────────────────────────────────────────

/// One dormant → active vent block mapping.
///
/// Both sides are registry IDs, e.g. `"create_resource_vents:dormant_asurine_vent"`.
/// A pair with an empty side is inert: it is skipped by lookups and by the
/// recipe projection. Missing JSON fields deserialize to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VentPair {
    /// Registry ID of the dormant vent block
    #[serde(default)]
    pub dormant: String,
    /// Registry ID of the active vent block
    #[serde(default)]
    pub active: String,
}

impl VentPair {
    pub fn new(dormant: impl Into<String>, active: impl Into<String>) -> Self {
        Self {
            dormant: dormant.into(),
            active: active.into(),
        }
    }

    /// Both sides present?
    pub fn is_valid(&self) -> bool {
        !self.dormant.is_empty() && !self.active.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Activation Config
// ─────────────────────────────────────────────────────────────────────────────

/// Vent activation configuration.
///
/// Loaded once at startup and read-only afterwards; the state machine and the
/// recipe projection take it by reference. Replaced wholesale on reload,
/// never mutated field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// How many ticks the burner must stay superheated before conversion
    /// (default 200 = 10 seconds)
    #[serde(rename = "activationTicks", default = "default_activation_ticks")]
    pub activation_ticks: u32,

    /// Ordered dormant → active vent pairs; first match wins on duplicates
    #[serde(rename = "ventPairs", default)]
    pub vent_pairs: Vec<VentPair>,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        let vents = [
            "asurine", "crimsite", "ochrum", "scorchia", "scoria", "veridium",
        ];
        Self {
            activation_ticks: default_activation_ticks(),
            vent_pairs: vents
                .iter()
                .map(|v| {
                    VentPair::new(
                        format!("create_resource_vents:dormant_{v}_vent"),
                        format!("create_resource_vents:active_{v}_vent"),
                    )
                })
                .collect(),
        }
    }
}

impl ActivationConfig {
    /// Returns the active block ID configured for a dormant block ID, or
    /// `None` if no valid pair matches. Linear scan, first match wins,
    /// case-sensitive exact match.
    pub fn active_for(&self, dormant: &str) -> Option<&str> {
        self.vent_pairs
            .iter()
            .filter(|p| p.is_valid())
            .find(|p| p.dormant == dormant)
            .map(|p| p.active.as_str())
    }

    /// Is this block ID listed as a dormant vent?
    pub fn is_dormant(&self, id: &str) -> bool {
        self.active_for(id).is_some()
    }
}

fn default_activation_ticks() -> u32 {
    200
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
