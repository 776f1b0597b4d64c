//! Recipe projection for display layers
//!
//! Derives a read-only list of dormant → active conversion recipes from the
//! current config. Pairs that do not fully resolve in the registry are
//! omitted, so a recipe browser never shows a conversion that cannot happen
//! in the loaded game.

use caldera_types::{ActivationConfig, TICKS_PER_SECOND};

use crate::registry::{BlockRef, BlockRegistry};

/// One dormant → active conversion, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VentActivationRecipe {
    pub dormant: BlockRef,
    pub active: BlockRef,
    /// The single global activation duration; identical for every recipe.
    pub activation_ticks: u32,
}

impl VentActivationRecipe {
    /// Activation time in seconds (truncated).
    pub fn activation_secs(&self) -> u32 {
        self.activation_ticks / TICKS_PER_SECOND
    }
}

/// Project the configured pairs into displayable recipes, preserving config
/// order. Inert or unresolvable pairs are skipped silently.
pub fn project(config: &ActivationConfig, registry: &dyn BlockRegistry) -> Vec<VentActivationRecipe> {
    config
        .vent_pairs
        .iter()
        .filter(|pair| pair.is_valid())
        .filter_map(|pair| {
            let dormant = registry.resolve(&pair.dormant);
            let active = registry.resolve(&pair.active);
            match (dormant, active) {
                (Some(dormant), Some(active)) => Some(VentActivationRecipe {
                    dormant,
                    active,
                    activation_ticks: config.activation_ticks,
                }),
                _ => {
                    tracing::debug!(
                        dormant = %pair.dormant,
                        active = %pair.active,
                        "Skipping vent pair, block(s) not found in registry"
                    );
                    None
                }
            }
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
