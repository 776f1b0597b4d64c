use std::path::Path;

use caldera_core::{
    ActivationConfig, ActivationManager, BlockPos, HeatLevel, MemoryRegistry, MemoryStore,
    MemoryWorld, TICKS_PER_SECOND, VentWorld, recipes,
};

pub fn show_config(path: &Path, config: &ActivationConfig) {
    println!("config: {}", path.display());
    println!(
        "{}",
        serde_json::to_string_pretty(config).expect("config serialization")
    );
}

/// Print the projection as a table, resolving against a registry seeded from
/// the configured IDs (so every valid pair shows up).
pub fn list_recipes(config: &ActivationConfig) {
    let mut registry = MemoryRegistry::new();
    for pair in config.vent_pairs.iter().filter(|p| p.is_valid()) {
        registry.insert_auto(&pair.dormant);
        registry.insert_auto(&pair.active);
    }

    let projected = recipes::project(config, &registry);
    if projected.is_empty() {
        println!("No vent pairs configured");
        return;
    }

    println!("{:<48} {:<48} {:>6} {:>5}", "Dormant", "Active", "Ticks", "Secs");
    println!("{}", "-".repeat(110));
    for recipe in &projected {
        println!(
            "{:<48} {:<48} {:>6} {:>5}",
            recipe.dormant.id,
            recipe.active.id,
            recipe.activation_ticks,
            recipe.activation_secs()
        );
    }
    println!("\nTotal: {} conversions", projected.len());
}

/// Tick a single burner sitting on the first configured dormant vent.
pub fn simulate(config: &ActivationConfig, ticks: u32, lapse_at: Option<u32>) {
    let Some(pair) = config.vent_pairs.iter().find(|p| p.is_valid()) else {
        println!("No valid vent pairs configured, nothing to simulate");
        return;
    };

    let mut registry = MemoryRegistry::new();
    registry.insert_auto(&pair.dormant);
    registry.insert_auto(&pair.active);

    let burner = BlockPos::new(0, 64, 0);
    let mut world = MemoryWorld::new();
    world.place(burner.below(), pair.dormant.clone());
    world.set_heat(burner, HeatLevel::Seething);

    let mut store = MemoryStore::new();
    let mut manager = ActivationManager::new();

    println!(
        "Simulating {} over {} ({} ticks to convert, {}s)",
        pair.dormant,
        pair.active,
        config.activation_ticks,
        config.activation_ticks / TICKS_PER_SECOND
    );

    for tick in 1..=ticks {
        let lapsed = lapse_at == Some(tick);
        world.set_heat(
            burner,
            if lapsed { HeatLevel::Kindled } else { HeatLevel::Seething },
        );

        let outcome = manager.tick(burner, &mut world, &registry, config, &mut store);
        let timer = manager.timer_raw(burner).unwrap_or(-1);

        let note = if let Some(active) = &outcome.converted_to {
            format!("converted to {}", active.id)
        } else if lapsed {
            "heat lapsed, countdown reset".to_string()
        } else {
            String::new()
        };
        println!("tick {:>4}  timer {:>5}  {}", tick, timer, note);

        if outcome.converted_to.is_some() {
            break;
        }
    }

    println!(
        "block below is now: {}",
        world.block_id(burner.below()).unwrap_or_default()
    );
}
