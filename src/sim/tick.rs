//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically: session
//! commands, the spawn counter, entity updates, collision resolution,
//! then one compaction pass. Entities hit mid-tick are only marked;
//! nothing is removed while a collection is being scanned.

use glam::Vec2;

use super::collision::{circles_touch, fully_outside};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic, one-shot)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start or restart a session (Idle/GameOver only)
    pub start: bool,
    /// Fire a projectile toward these world coordinates
    pub fire: Option<Vec2>,
}

/// Advance the game state by one tick, returning the observable events
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.start && state.phase != GamePhase::Running {
        state.reset();
        state.phase = GamePhase::Running;
        events.push(GameEvent::ScoreChanged(0));
        return events;
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    // Fire lands before movement so the projectile advances this tick
    if let Some(target) = input.fire {
        state.fire_projectile(target);
    }

    state.time_ticks += 1;

    // The spawner is a counter check, not an independent timer, so a
    // restart can never leave a second cadence running
    if state.time_ticks % u64::from(state.spawn_interval_ticks) == 0 {
        state.spawn_enemy();
    }

    // Particles: cull the fully faded, advance the rest
    state.particles.retain_mut(|p| {
        if p.alpha <= 0.0 {
            false
        } else {
            p.advance();
            true
        }
    });

    // Projectiles: advance, then mark the ones that left the field
    for projectile in &mut state.projectiles {
        projectile.advance();
        let body = projectile.body;
        if fully_outside(body.pos, body.radius, state.width, state.height) {
            projectile.alive = false;
        }
    }

    // Enemies: advance, then resolve player and projectile contacts.
    // Marked entities take no further part in pairing this tick.
    for e_idx in 0..state.enemies.len() {
        state.enemies[e_idx].advance();

        let enemy = state.enemies[e_idx].body;
        if circles_touch(enemy.pos, enemy.radius, state.player.pos, state.player.radius) {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver {
                final_score: state.score,
            });
            // Halt mid-tick; the collections freeze until restart
            return events;
        }

        for p_idx in 0..state.projectiles.len() {
            if !state.enemies[e_idx].alive {
                break;
            }
            if !state.projectiles[p_idx].alive {
                continue;
            }

            let enemy = state.enemies[e_idx].body;
            let shot = state.projectiles[p_idx].body;
            if !circles_touch(enemy.pos, enemy.radius, shot.pos, shot.radius) {
                continue;
            }

            // Hit registered
            state.score += SCORE_HIT;
            events.push(GameEvent::ScoreChanged(state.score));

            let burst = (enemy.radius * 2.0).ceil() as usize;
            state.burst_particles(shot.pos, enemy.color, burst);

            if enemy.radius - SHRINK_STEP > SHRINK_SURVIVE_MIN {
                // Large enough to survive: ease down and keep coming
                state.score += SCORE_SHRINK_BONUS;
                state.enemies[e_idx].shrink(SHRINK_STEP);
            } else {
                state.score += SCORE_DESTROY_BONUS;
                state.enemies[e_idx].alive = false;
            }
            events.push(GameEvent::ScoreChanged(state.score));
            state.projectiles[p_idx].alive = false;
        }
    }

    // End-of-tick compaction: all removals marked above land here
    state.projectiles.retain(|p| p.alive);
    state.enemies.retain(|e| e.alive);

    events
}
