//! Activation manager
//!
//! Owns the state machines for every monitored position and wires them to
//! the world, the registry, and the persistence hook. The external scheduler
//! calls [`ActivationManager::tick`] once per position per time step.

use hashbrown::HashMap;

use caldera_types::ActivationConfig;

use crate::registry::BlockRegistry;
use crate::world::{BlockPos, VentWorld};

use super::machine::{TickInput, TickOutcome, VentActivation};

/// Per-position timer persistence.
///
/// Mirrors the host's save-data record for a position: `read_timer` on first
/// observation, `write_timer` after any dirty tick.
pub trait TimerStore {
    /// Persisted timer for `pos`, `None` if the record has no entry yet.
    fn read_timer(&self, pos: BlockPos) -> Option<i32>;

    fn write_timer(&mut self, pos: BlockPos, raw: i32);

    /// Drop the entry for a removed position.
    fn remove(&mut self, pos: BlockPos);
}

/// In-memory store for tests and the CLI simulator.
#[derive(Debug, Default)]
pub struct MemoryStore {
    timers: HashMap<BlockPos, i32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimerStore for MemoryStore {
    fn read_timer(&self, pos: BlockPos) -> Option<i32> {
        self.timers.get(&pos).copied()
    }

    fn write_timer(&mut self, pos: BlockPos, raw: i32) {
        self.timers.insert(pos, raw);
    }

    fn remove(&mut self, pos: BlockPos) {
        self.timers.remove(&pos);
    }
}

/// Drives one [`VentActivation`] per monitored position.
#[derive(Debug, Default)]
pub struct ActivationManager {
    machines: HashMap<BlockPos, VentActivation>,
}

impl ActivationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick the machine at `pos`, creating it on first observation (seeded
    /// from the persisted timer, if any).
    ///
    /// Applies a successful conversion to the world and checkpoints the
    /// timer after any dirty tick.
    pub fn tick(
        &mut self,
        pos: BlockPos,
        world: &mut dyn VentWorld,
        registry: &dyn BlockRegistry,
        config: &ActivationConfig,
        store: &mut dyn TimerStore,
    ) -> TickOutcome {
        let machine = self
            .machines
            .entry(pos)
            .or_insert_with(|| match store.read_timer(pos) {
                Some(raw) => VentActivation::from_raw(raw),
                None => VentActivation::new(),
            });

        let below = pos.below();
        let below_id = world.block_id(below);
        let input = TickInput {
            below: below_id.as_deref(),
            heat: world.heat_level(pos),
        };

        let outcome = machine.tick(input, config, registry);

        if let Some(active) = &outcome.converted_to {
            if !world.set_block(below, &active.id) {
                tracing::debug!(pos = ?pos, active = %active.id, "World rejected conversion");
            }
        }
        if outcome.dirty {
            store.write_timer(pos, machine.timer_raw());
        }

        outcome
    }

    /// Current timer for `pos`, if the position is being tracked.
    pub fn timer_raw(&self, pos: BlockPos) -> Option<i32> {
        self.machines.get(&pos).map(|m| m.timer_raw())
    }

    /// Forget a position whose record was destroyed.
    pub fn remove(&mut self, pos: BlockPos, store: &mut dyn TimerStore) {
        self.machines.remove(&pos);
        store.remove(pos);
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}
