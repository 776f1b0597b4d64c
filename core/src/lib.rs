pub mod activation;
pub mod config;
pub mod recipes;
pub mod registry;
pub mod world;

// Re-exports for convenience
pub use activation::{
    ACTIVATION_HEAT, ActivationManager, ConversionTimer, MemoryStore, TickInput, TickOutcome,
    TimerStore, VentActivation,
};
pub use caldera_types::{ActivationConfig, TICKS_PER_SECOND, VentPair};
pub use config::{ConfigError, default_config_path, load_or_create};
pub use recipes::{VentActivationRecipe, project};
pub use registry::{BlockRef, BlockRegistry, MemoryRegistry};
pub use world::{BlockPos, HeatLevel, MemoryWorld, VentWorld};
