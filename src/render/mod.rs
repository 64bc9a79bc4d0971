//! Draw-surface abstraction and the per-frame paint pass
//!
//! The simulation never draws; each frame the front end hands the
//! current state to `draw_frame` together with some `Surface`. The
//! trait exposes exactly the two operations the game needs: a
//! low-opacity black veil over the whole field (motion trails) and a
//! filled circle with an opacity modifier.

pub mod terminal;

pub use terminal::TerminalSurface;

use glam::Vec2;

use crate::consts::TRAIL_FADE;
use crate::sim::{GameState, Hsl};

/// A 2D drawing target in world coordinates
pub trait Surface {
    /// Darken the entire field toward black by `alpha` (0 = no-op,
    /// 1 = clear to black)
    fn fade(&mut self, alpha: f32);

    /// Paint a filled circle; `alpha` scales its opacity
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl, alpha: f32);
}

/// Paint one frame of the current state: veil, player, particles,
/// projectiles, enemies. `show_particles` is a render preference only;
/// the simulation keeps its particles either way.
pub fn draw_frame(state: &GameState, surface: &mut impl Surface, show_particles: bool) {
    surface.fade(TRAIL_FADE);

    surface.fill_circle(
        state.player.pos,
        state.player.radius,
        state.player.color,
        1.0,
    );

    if show_particles {
        for particle in &state.particles {
            let body = particle.body;
            surface.fill_circle(body.pos, body.radius, body.color, particle.alpha.max(0.0));
        }
    }

    for shot in &state.projectiles {
        let body = shot.body;
        surface.fill_circle(body.pos, body.radius, body.color, 1.0);
    }

    for enemy in &state.enemies {
        let body = enemy.body;
        surface.fill_circle(body.pos, body.radius, body.color, 1.0);
    }
}
