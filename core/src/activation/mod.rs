//! Vent activation system
//!
//! This module provides:
//! - **State**: the persisted countdown value (`ConversionTimer`)
//! - **Machine**: the per-position tick state machine (`VentActivation`)
//! - **Manager**: lifecycle glue tying machines to world, registry, and
//!   persistence (`ActivationManager`)

mod machine;
mod manager;
mod state;

#[cfg(test)]
mod machine_tests;

pub use machine::{ACTIVATION_HEAT, TickInput, TickOutcome, VentActivation};
pub use manager::{ActivationManager, MemoryStore, TimerStore};
pub use state::ConversionTimer;
