//! Per-frame simulation step
//!
//! One call advances the whole session by one frame: damage and latch
//! bookkeeping, enemy motion, power-up collection, shield activation,
//! probabilistic spawning, rotation updates, and the game-over transition.

use glam::IVec2;
use rand::Rng;

use super::entity::PowerUp;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in field pixels; the player centers on it
    pub pointer: IVec2,
    /// Quit signal (window close, Escape)
    pub quit: bool,
}

/// Things that happened during a tick, for the platform layer to log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An unshielded enemy contact cost a life
    Hit,
    /// The shield absorbed a contact
    ShieldBroken,
    ShieldGained,
    OrbCollected,
    GameOver,
}

/// Advance the session by one frame. No-op once the phase is `GameOver`.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }
    if input.quit {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
        return events;
    }

    state.time_ticks += 1;
    state.player.set_position(input.pointer);

    // Enemies: resolve contact against the player, then move and bounce.
    // The latch suppresses repeated damage while a contact persists; it
    // clears only once the sprites separate.
    let player_sprite = &state.player.sprite;
    for enemy in &mut state.enemies {
        if enemy.sprite.collides(player_sprite) {
            if state.shield_on {
                state.shield_on = false;
                enemy.latched = true;
                events.push(GameEvent::ShieldBroken);
            } else if !enemy.latched {
                state.life -= 1.0;
                enemy.latched = true;
                events.push(GameEvent::Hit);
            }
        } else if enemy.latched {
            enemy.latched = false;
        }
        enemy.step();
        enemy.bounce(FIELD_WIDTH, FIELD_HEIGHT);
    }

    // Power-up collection
    let mut collected = 0u32;
    state.orbs.retain(|orb| {
        if orb.sprite.collides(player_sprite) {
            collected += 1;
            false
        } else {
            true
        }
    });
    for _ in 0..collected {
        state.life += 1.0;
        state.collected_orbs += 1;
        events.push(GameEvent::OrbCollected);
    }

    if state.collected_orbs >= SHIELD_THRESHOLD {
        state.shield_on = true;
        state.collected_orbs = 0;
        events.push(GameEvent::ShieldGained);
    }

    maybe_spawn_orb(state);

    for orb in &mut state.orbs {
        orb.advance_rotation();
    }

    if state.life <= 0.0 {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }
    events
}

/// Spawn roll: below the cap, a 3% chance per frame of a new power-up, split
/// 50/50 between static and rotating, at a uniform random center
fn maybe_spawn_orb(state: &mut GameState) {
    if state.orbs.len() >= MAX_ACTIVE_ORBS {
        return;
    }
    if state.rng.random_range(1..=100u32) > ORB_SPAWN_PERCENT {
        return;
    }
    let orb = if state.rng.random_bool(0.5) {
        PowerUp::spawn_static(
            state.masks.orb.clone(),
            FIELD_WIDTH,
            FIELD_HEIGHT,
            &mut state.rng,
        )
    } else {
        PowerUp::spawn_rotating(
            state.masks.rotating_orb.clone(),
            FIELD_WIDTH,
            FIELD_HEIGHT,
            &mut state.rng,
        )
    };
    state.orbs.push(orb);
}
