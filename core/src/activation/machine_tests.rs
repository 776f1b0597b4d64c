//! Tests for the conversion state machine and activation manager
//!
//! Verifies the countdown lifecycle: start, advance, fire, reset, and the
//! persistence write-back throttle.

use caldera_types::{ActivationConfig, VentPair};

use crate::registry::MemoryRegistry;
use crate::world::{BlockPos, HeatLevel, MemoryWorld, VentWorld};

use super::{ActivationManager, MemoryStore, TickInput, TimerStore, VentActivation};

const DORMANT: &str = "vents:dormant_test_vent";
const ACTIVE: &str = "vents:active_test_vent";

fn make_config(activation_ticks: u32) -> ActivationConfig {
    ActivationConfig {
        activation_ticks,
        vent_pairs: vec![VentPair::new(DORMANT, ACTIVE)],
    }
}

fn make_registry() -> MemoryRegistry {
    let mut registry = MemoryRegistry::new();
    registry.insert(DORMANT, "Dormant Test Vent");
    registry.insert(ACTIVE, "Active Test Vent");
    registry
}

fn held() -> TickInput<'static> {
    TickInput {
        below: Some(DORMANT),
        heat: HeatLevel::Seething,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Machine
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_countdown_is_monotonic() {
    let config = make_config(3);
    let registry = make_registry();
    let mut machine = VentActivation::new();

    let mut observed = Vec::new();
    for _ in 0..4 {
        let outcome = machine.tick(held(), &config, &registry);
        assert!(outcome.converted_to.is_none());
        observed.push(machine.timer_raw());
    }
    assert_eq!(observed, vec![3, 2, 1, 0]);

    // The tick that observes 0 fires and resets
    let outcome = machine.tick(held(), &config, &registry);
    assert!(outcome.converted_to.is_some());
    assert!(outcome.dirty);
    assert_eq!(machine.timer_raw(), -1);
}

#[test]
fn test_fires_exactly_once_per_cycle() {
    let config = make_config(2);
    let registry = make_registry();
    let mut machine = VentActivation::new();

    let mut fires = 0;
    for _ in 0..8 {
        if machine.tick(held(), &config, &registry).converted_to.is_some() {
            fires += 1;
        }
    }
    // 8 ticks = two full start→fire cycles of 4 ticks each
    assert_eq!(fires, 2);
}

#[test]
fn test_condition_loss_resets() {
    let config = make_config(10);
    let registry = make_registry();
    let cold = TickInput {
        below: Some(DORMANT),
        heat: HeatLevel::Kindled,
    };

    // Lose the condition at every point in the countdown
    for held_ticks in 1..=11 {
        let mut machine = VentActivation::new();
        for _ in 0..held_ticks {
            machine.tick(held(), &config, &registry);
        }
        assert!(machine.timer_raw() > -1);

        let outcome = machine.tick(cold, &config, &registry);
        assert_eq!(machine.timer_raw(), -1);
        assert!(outcome.dirty, "reset must be checkpointed");
        assert!(outcome.converted_to.is_none());
    }
}

#[test]
fn test_reset_when_already_idle_is_clean() {
    let config = make_config(3);
    let registry = make_registry();
    let mut machine = VentActivation::new();

    let outcome = machine.tick(
        TickInput {
            below: None,
            heat: HeatLevel::Seething,
        },
        &config,
        &registry,
    );
    assert!(!outcome.dirty);
    assert_eq!(machine.timer_raw(), -1);
}

#[test]
fn test_interrupted_then_restarted() {
    // duration 3, condition [true, true, false, true] → timers [3, 2, -1, 3]
    let config = make_config(3);
    let registry = make_registry();
    let mut machine = VentActivation::new();
    let cold = TickInput {
        below: Some(DORMANT),
        heat: HeatLevel::None,
    };

    let mut observed = Vec::new();
    for input in [held(), held(), cold, held()] {
        machine.tick(input, &config, &registry);
        observed.push(machine.timer_raw());
    }
    assert_eq!(observed, vec![3, 2, -1, 3]);
}

#[test]
fn test_unlisted_block_below_forces_idle() {
    let config = make_config(3);
    let registry = make_registry();
    let mut machine = VentActivation::new();

    machine.tick(held(), &config, &registry);
    assert_eq!(machine.timer_raw(), 3);

    let outcome = machine.tick(
        TickInput {
            below: Some("minecraft:stone"),
            heat: HeatLevel::Seething,
        },
        &config,
        &registry,
    );
    assert_eq!(machine.timer_raw(), -1);
    assert!(outcome.dirty);
}

#[test]
fn test_unresolved_neighbor_forces_idle() {
    let config = make_config(3);
    let registry = make_registry();
    let mut machine = VentActivation::new();

    machine.tick(held(), &config, &registry);
    let outcome = machine.tick(
        TickInput {
            below: None,
            heat: HeatLevel::Seething,
        },
        &config,
        &registry,
    );
    assert_eq!(machine.timer_raw(), -1);
    assert!(outcome.dirty);
}

#[test]
fn test_zero_duration_fires_on_second_tick() {
    let config = make_config(0);
    let registry = make_registry();
    let mut machine = VentActivation::new();

    // Start tick puts the timer straight at 0
    let outcome = machine.tick(held(), &config, &registry);
    assert!(outcome.converted_to.is_none());
    assert!(outcome.dirty);
    assert_eq!(machine.timer_raw(), 0);

    // Next tick observes 0 and fires
    let outcome = machine.tick(held(), &config, &registry);
    assert!(outcome.converted_to.is_some());
    assert_eq!(machine.timer_raw(), -1);
}

#[test]
fn test_unresolved_target_consumes_countdown() {
    let config = make_config(1);
    let mut registry = MemoryRegistry::new();
    registry.insert(DORMANT, "Dormant Test Vent");
    // ACTIVE deliberately absent

    let mut machine = VentActivation::new();
    machine.tick(held(), &config, &registry); // 1
    machine.tick(held(), &config, &registry); // 0

    let outcome = machine.tick(held(), &config, &registry);
    assert!(outcome.converted_to.is_none(), "fire must be a no-op");
    assert!(outcome.dirty, "countdown is still consumed");
    assert_eq!(machine.timer_raw(), -1);

    // No retry: the machine restarts a full countdown instead
    machine.tick(held(), &config, &registry);
    assert_eq!(machine.timer_raw(), 1);
}

#[test]
fn test_dirty_throttled_while_counting() {
    let config = make_config(45);
    let registry = make_registry();
    let mut machine = VentActivation::new();

    assert!(machine.tick(held(), &config, &registry).dirty); // start at 45

    let mut dirty_at = Vec::new();
    while machine.timer_raw() > 0 {
        if machine.tick(held(), &config, &registry).dirty {
            dirty_at.push(machine.timer_raw());
        }
    }
    // Only multiples of 20 are checkpointed during the countdown
    assert_eq!(dirty_at, vec![40, 20, 0]);
}

#[test]
fn test_restore_resumes_mid_countdown() {
    let config = make_config(200);
    let registry = make_registry();
    let mut machine = VentActivation::from_raw(5);

    machine.tick(held(), &config, &registry);
    assert_eq!(machine.timer_raw(), 4);
}

// ─────────────────────────────────────────────────────────────────────────────
// Manager
// ─────────────────────────────────────────────────────────────────────────────

const BURNER: BlockPos = BlockPos::new(0, 64, 0);

fn make_world() -> MemoryWorld {
    let mut world = MemoryWorld::new();
    world.place(BURNER.below(), DORMANT);
    world.set_heat(BURNER, HeatLevel::Seething);
    world
}

#[test]
fn test_manager_full_conversion() {
    let config = make_config(3);
    let registry = make_registry();
    let mut world = make_world();
    let mut store = MemoryStore::new();
    let mut manager = ActivationManager::new();

    let mut converted = 0;
    for _ in 0..5 {
        let outcome = manager.tick(BURNER, &mut world, &registry, &config, &mut store);
        if outcome.converted_to.is_some() {
            converted += 1;
        }
    }

    assert_eq!(converted, 1);
    assert_eq!(world.block_id(BURNER.below()).as_deref(), Some(ACTIVE));
    assert_eq!(manager.timer_raw(BURNER), Some(-1));
    assert_eq!(store.read_timer(BURNER), Some(-1));
}

#[test]
fn test_manager_seeds_from_store() {
    let config = make_config(200);
    let registry = make_registry();
    let mut world = make_world();
    let mut store = MemoryStore::new();
    store.write_timer(BURNER, 2);

    let mut manager = ActivationManager::new();
    manager.tick(BURNER, &mut world, &registry, &config, &mut store);
    assert_eq!(manager.timer_raw(BURNER), Some(1));
}

#[test]
fn test_manager_checkpoint_lags_in_memory_value() {
    let config = make_config(30);
    let registry = make_registry();
    let mut world = make_world();
    let mut store = MemoryStore::new();
    let mut manager = ActivationManager::new();

    // Start tick checkpoints the full duration
    manager.tick(BURNER, &mut world, &registry, &config, &mut store);
    assert_eq!(store.read_timer(BURNER), Some(30));

    // A few decrements later the in-memory value has moved on but the
    // checkpoint has not
    for _ in 0..5 {
        manager.tick(BURNER, &mut world, &registry, &config, &mut store);
    }
    assert_eq!(manager.timer_raw(BURNER), Some(25));
    assert_eq!(store.read_timer(BURNER), Some(30));
}

#[test]
fn test_manager_remove() {
    let config = make_config(3);
    let registry = make_registry();
    let mut world = make_world();
    let mut store = MemoryStore::new();
    let mut manager = ActivationManager::new();

    manager.tick(BURNER, &mut world, &registry, &config, &mut store);
    assert_eq!(manager.len(), 1);

    manager.remove(BURNER, &mut store);
    assert!(manager.is_empty());
    assert_eq!(store.read_timer(BURNER), None);

    // Re-observed positions start over from idle
    manager.tick(BURNER, &mut world, &registry, &config, &mut store);
    assert_eq!(manager.timer_raw(BURNER), Some(3));
}
