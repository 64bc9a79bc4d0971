//! Game state and core simulation types
//!
//! The original cast of Player/Projectile/Enemy/Particle shares one
//! positional record (`Circle`); the moving entities are a single
//! `Mover` record distinguished by a role tag rather than a type
//! hierarchy.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::unit_toward;

/// HSL color, the display attribute every entity carries.
///
/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const WHITE: Hsl = Hsl {
        h: 0.0,
        s: 0.0,
        l: 1.0,
    };

    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB components in `[0, 1]`
    pub fn to_rgb(self) -> [f32; 3] {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let hp = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.l - c / 2.0;
        [r + m, g + m, b + m]
    }
}

/// Shared positional/render record: a colored circle
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsl,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32, color: Hsl) -> Self {
        Self { pos, radius, color }
    }
}

/// What a moving circle is playing as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Projectile,
    Enemy,
}

/// A moving circle: projectile or enemy, depending on role
#[derive(Debug, Clone)]
pub struct Mover {
    pub body: Circle,
    /// Position delta applied per tick, fixed at spawn
    pub vel: Vec2,
    pub role: Role,
    /// Radius the body eases toward after a shrink
    pub target_radius: f32,
    /// Cleared when the entity is scheduled for end-of-tick removal
    pub alive: bool,
}

impl Mover {
    pub fn new(pos: Vec2, radius: f32, color: Hsl, vel: Vec2, role: Role) -> Self {
        Self {
            body: Circle::new(pos, radius, color),
            vel,
            role,
            target_radius: radius,
            alive: true,
        }
    }

    /// Apply one tick: advance position, ease the radius toward its target
    pub fn advance(&mut self) {
        self.body.pos += self.vel;
        let gap = self.target_radius - self.body.radius;
        if gap.abs() > SHRINK_SNAP {
            self.body.radius += gap * SHRINK_EASE;
        } else {
            self.body.radius = self.target_radius;
        }
    }

    /// Start an eased shrink from the current radius
    pub fn shrink(&mut self, step: f32) {
        self.target_radius = self.body.radius - step;
    }
}

/// A burst fragment with decaying opacity and velocity
#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Circle,
    pub vel: Vec2,
    /// Rendering opacity, 1 at birth, decremented each tick
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, radius: f32, color: Hsl, vel: Vec2) -> Self {
        Self {
            body: Circle::new(pos, radius, color),
            vel,
            alpha: 1.0,
        }
    }

    /// Apply one tick: advance, damp velocity, fade
    pub fn advance(&mut self) {
        self.body.pos += self.vel;
        self.vel *= PARTICLE_FRICTION;
        self.alpha -= PARTICLE_FADE_STEP;
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first start command
    Idle,
    /// Active gameplay
    Running,
    /// Terminal state after a player hit, until restart
    GameOver,
}

/// Observable output of a tick, consumed by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score changed; carries the new total
    ScoreChanged(u64),
    /// Player was hit; the score freezes at this value
    GameOver { final_score: u64 },
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Field dimensions in world units
    pub width: f32,
    pub height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter, zeroed on every session start
    pub time_ticks: u64,
    /// Enemy spawn cadence (ticks between spawns)
    pub spawn_interval_ticks: u32,
    /// The stationary player at field center
    pub player: Circle,
    pub projectiles: Vec<Mover>,
    pub enemies: Vec<Mover>,
    pub particles: Vec<Particle>,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh Idle state for a field of the given size
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            seed,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            player: Circle::new(center, PLAYER_RADIUS, Hsl::WHITE),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clear all entity collections and zero score and tick counter.
    /// The RNG stream continues; back-to-back sessions differ.
    pub fn reset(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.score = 0;
        self.time_ticks = 0;
    }

    /// Append a projectile at the player, aimed at `target`
    pub fn fire_projectile(&mut self, target: Vec2) {
        let vel = unit_toward(self.player.pos, target) * PROJECTILE_SPEED;
        self.projectiles.push(Mover::new(
            self.player.pos,
            PROJECTILE_RADIUS,
            Hsl::WHITE,
            vel,
            Role::Projectile,
        ));
    }

    /// Append an enemy just outside a random edge, aimed at the center.
    /// The velocity is fixed here; enemies never re-aim.
    pub fn spawn_enemy(&mut self) {
        let radius = self.rng.random_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS);
        let color = Hsl::new(self.rng.random_range(0.0..360.0), 0.5, 0.5);

        let pos = if self.rng.random_bool(0.5) {
            let x = if self.rng.random_bool(0.5) {
                -radius
            } else {
                self.width + radius
            };
            Vec2::new(x, self.rng.random_range(0.0..self.height))
        } else {
            let y = if self.rng.random_bool(0.5) {
                -radius
            } else {
                self.height + radius
            };
            Vec2::new(self.rng.random_range(0.0..self.width), y)
        };

        let vel = unit_toward(pos, self.center()) * ENEMY_SPEED;
        self.enemies
            .push(Mover::new(pos, radius, color, vel, Role::Enemy));
    }

    /// Spawn a burst of `count` particles at `at` in the given color
    pub fn burst_particles(&mut self, at: Vec2, color: Hsl, count: usize) {
        for _ in 0..count {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * (self.rng.random::<f32>() * PARTICLE_SPREAD),
                (self.rng.random::<f32>() - 0.5) * (self.rng.random::<f32>() * PARTICLE_SPREAD),
            );
            self.particles
                .push(Particle::new(at, PARTICLE_RADIUS, color, vel));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_white_and_primaries() {
        let [r, g, b] = Hsl::WHITE.to_rgb();
        assert!((r - 1.0).abs() < 1e-5 && (g - 1.0).abs() < 1e-5 && (b - 1.0).abs() < 1e-5);

        // Pure red at full saturation, half lightness
        let [r, g, b] = Hsl::new(0.0, 1.0, 0.5).to_rgb();
        assert!((r - 1.0).abs() < 1e-5 && g.abs() < 1e-5 && b.abs() < 1e-5);

        // Pure green
        let [r, g, b] = Hsl::new(120.0, 1.0, 0.5).to_rgb();
        assert!(r.abs() < 1e-5 && (g - 1.0).abs() < 1e-5 && b.abs() < 1e-5);
    }

    #[test]
    fn test_shrink_eases_to_target() {
        let mut enemy = Mover::new(
            Vec2::ZERO,
            30.0,
            Hsl::new(200.0, 0.5, 0.5),
            Vec2::ZERO,
            Role::Enemy,
        );
        enemy.shrink(10.0);
        assert_eq!(enemy.target_radius, 20.0);

        let mut last = enemy.body.radius;
        for _ in 0..60 {
            enemy.advance();
            assert!(enemy.body.radius <= last);
            last = enemy.body.radius;
        }
        assert_eq!(enemy.body.radius, 20.0);
    }
}
