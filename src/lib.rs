//! Chroma Blitz - a last-stand arcade shooter for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Draw-surface abstraction and the frame paint pass
//! - `settings`: Preferences loaded from an optional JSON file

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per rendered frame)
    pub const TICK_HZ: u32 = 60;

    /// Enemy spawn cadence at the default 1000 ms interval
    pub const SPAWN_INTERVAL_TICKS: u32 = TICK_HZ;

    /// Player defaults - anchored at the center of the field
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy radius range (half-open: max is never rolled)
    pub const ENEMY_MIN_RADIUS: f32 = 4.0;
    pub const ENEMY_MAX_RADIUS: f32 = 30.0;
    /// Enemies fly at unit speed, fixed at spawn
    pub const ENEMY_SPEED: f32 = 1.0;

    /// Particle burst defaults
    pub const PARTICLE_RADIUS: f32 = 2.0;
    /// Scale of the random per-axis burst velocity
    pub const PARTICLE_SPREAD: f32 = 5.0;
    /// Velocity damping applied to particles each tick
    pub const PARTICLE_FRICTION: f32 = 0.98;
    /// Alpha lost per tick; a particle lives ~100 ticks
    pub const PARTICLE_FADE_STEP: f32 = 0.01;

    /// Collision slack: circles count as touching while the gap
    /// between their edges is below this
    pub const HIT_GAP: f32 = 1.0;

    /// Radius an enemy loses per absorbed projectile
    pub const SHRINK_STEP: f32 = 10.0;
    /// Remaining radius must exceed this after a shrink or the
    /// enemy is destroyed outright
    pub const SHRINK_SURVIVE_MIN: f32 = 7.0;
    /// Per-tick exponential ease of the visible radius toward its
    /// shrink target (converges in roughly a quarter second)
    pub const SHRINK_EASE: f32 = 0.25;
    /// Snap distance ending a shrink ease
    pub const SHRINK_SNAP: f32 = 0.05;

    /// Opacity of the black veil painted each frame (motion trails)
    pub const TRAIL_FADE: f32 = 0.1;

    /// Score values: every hit lands the base, then one bonus
    pub const SCORE_HIT: u64 = 10;
    pub const SCORE_SHRINK_BONUS: u64 = 10;
    pub const SCORE_DESTROY_BONUS: u64 = 15;
}

/// Unit vector pointing from `from` toward `to` (zero if coincident)
#[inline]
pub fn unit_toward(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
