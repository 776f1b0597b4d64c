//! World-side interfaces consumed by the activation system
//!
//! The real block world lives in the host; the core only needs three
//! questions answered per tick: what block sits at a position, how hot is
//! the burner there, and (on a completed conversion) replace a block.
//! `MemoryWorld` is a small in-memory implementation for tests and the CLI
//! simulator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Block Position
// ─────────────────────────────────────────────────────────────────────────────

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position directly beneath this one.
    pub const fn below(self) -> Self {
        Self::new(self.x, self.y - 1, self.z)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Heat Level
// ─────────────────────────────────────────────────────────────────────────────

/// Burner heat level, ordered coldest to hottest.
///
/// Conversion requires at least [`HeatLevel::Seething`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    #[default]
    None,
    Smouldering,
    Fading,
    Kindled,
    Seething,
}

impl HeatLevel {
    pub fn is_at_least(self, other: HeatLevel) -> bool {
        self >= other
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// World Accessor
// ─────────────────────────────────────────────────────────────────────────────

/// Access to the block world, at the granularity the activation system needs.
pub trait VentWorld {
    /// Registry ID of the block at `pos`, or `None` if the block cannot be
    /// resolved to an identifier.
    fn block_id(&self, pos: BlockPos) -> Option<String>;

    /// Replace the block at `pos`. Returns false if the world rejected the
    /// change.
    fn set_block(&mut self, pos: BlockPos, id: &str) -> bool;

    /// Heat level of the burner at `pos` (`HeatLevel::None` if there is no
    /// burner there).
    fn heat_level(&self, pos: BlockPos) -> HeatLevel;
}

/// In-memory world for tests and the CLI simulator.
#[derive(Debug, Default)]
pub struct MemoryWorld {
    blocks: HashMap<BlockPos, String>,
    heat: HashMap<BlockPos, HeatLevel>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, pos: BlockPos, id: impl Into<String>) {
        self.blocks.insert(pos, id.into());
    }

    pub fn set_heat(&mut self, pos: BlockPos, level: HeatLevel) {
        self.heat.insert(pos, level);
    }
}

impl VentWorld for MemoryWorld {
    fn block_id(&self, pos: BlockPos) -> Option<String> {
        self.blocks.get(&pos).cloned()
    }

    fn set_block(&mut self, pos: BlockPos, id: &str) -> bool {
        self.blocks.insert(pos, id.to_string());
        true
    }

    fn heat_level(&self, pos: BlockPos) -> HeatLevel {
        self.heat.get(&pos).copied().unwrap_or_default()
    }
}
