//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per rendered frame)
//! - Seeded RNG only
//! - Stable iteration order, removal deferred to end of tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circle_gap, circles_touch, fully_outside};
pub use state::{Circle, GameEvent, GamePhase, GameState, Hsl, Mover, Particle, Role};
pub use tick::{TickInput, tick};
