//! Per-position conversion state machine
//!
//! One `VentActivation` exists per monitored position. Each tick it is fed
//! the block below the position and the burner heat level; it decides the
//! next timer value and whether the conversion fires. The machine itself
//! never touches the world: a successful fire is reported in the
//! [`TickOutcome`] and applied by the caller.
//!
//! State transitions per tick:
//!
//! - condition lost → `Idle` (from any state), dirty
//! - `Idle` + condition held → `Counting` at the full duration, dirty
//! - `Counting` → decrement by 1, dirty on every 20th tick only
//! - `Ready` (timer 0) + condition held → fire once, back to `Idle`, dirty
//!
//! An active ID that fails registry resolution at fire time still consumes
//! the countdown; the fire is a no-op.

use caldera_types::ActivationConfig;

use crate::registry::{BlockRef, BlockRegistry};
use crate::world::HeatLevel;

use super::state::ConversionTimer;

/// Minimum heat for the condition to hold.
pub const ACTIVATION_HEAT: HeatLevel = HeatLevel::Seething;

/// Environment snapshot for one tick of one position.
#[derive(Debug, Clone, Copy)]
pub struct TickInput<'a> {
    /// Registry ID of the block below the burner, `None` if unresolvable.
    pub below: Option<&'a str>,
    /// Heat level of the burner at the position.
    pub heat: HeatLevel,
}

/// What a single tick decided.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Resolved replacement block, present only when the conversion fired
    /// and its target resolved.
    pub converted_to: Option<BlockRef>,
    /// The timer changed enough to warrant a persistence write-back.
    pub dirty: bool,
}

/// Conversion state machine for one monitored position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VentActivation {
    timer: ConversionTimer,
}

impl VentActivation {
    /// Fresh machine, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a persisted timer value.
    pub fn from_raw(raw: i32) -> Self {
        Self {
            timer: ConversionTimer::from_raw(raw),
        }
    }

    pub fn timer(&self) -> ConversionTimer {
        self.timer
    }

    /// Raw timer value for persistence.
    pub fn timer_raw(&self) -> i32 {
        self.timer.raw()
    }

    /// Advance one tick.
    pub fn tick(
        &mut self,
        input: TickInput<'_>,
        config: &ActivationConfig,
        registry: &dyn BlockRegistry,
    ) -> TickOutcome {
        let active_id = input.below.and_then(|id| config.active_for(id));

        let Some(active_id) = active_id.filter(|_| input.heat.is_at_least(ACTIVATION_HEAT)) else {
            // Not superheating, or no longer over a dormant vent
            if !self.timer.is_idle() {
                self.timer = ConversionTimer::IDLE;
                return TickOutcome {
                    converted_to: None,
                    dirty: true,
                };
            }
            return TickOutcome::default();
        };

        if self.timer.is_idle() {
            self.timer = ConversionTimer::start(config.activation_ticks);
            TickOutcome {
                converted_to: None,
                dirty: true,
            }
        } else if self.timer.is_ready() {
            // Countdown complete; the fire consumes it whether or not the
            // target resolves
            let converted_to = registry.resolve(active_id);
            if converted_to.is_none() {
                tracing::debug!(active = active_id, "Conversion target not in registry, skipping");
            }
            self.timer = ConversionTimer::IDLE;
            TickOutcome {
                converted_to,
                dirty: true,
            }
        } else {
            self.timer = self.timer.decremented();
            // Checkpoint every 20 ticks so the persisted value stays
            // reasonably in sync
            TickOutcome {
                converted_to: None,
                dirty: self.timer.raw() % 20 == 0,
            }
        }
    }
}
