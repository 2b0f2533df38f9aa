//! Session state
//!
//! Everything the per-frame tick reads and writes lives here. The session
//! exclusively owns the player, the fixed enemy roster, and the power-up
//! list; a seed fully determines a run given the same input sequence.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Enemy, EnemyKind, Player, PowerUp};
use super::mask::PixelMask;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Terminal; the program ends after a short hold
    GameOver,
}

/// Collision masks the session spawns entities from, derived from the loaded
/// sprite images (or synthetic in tests)
#[derive(Debug, Clone)]
pub struct SpawnMasks {
    pub player: PixelMask,
    pub roaming: PixelMask,
    pub platform: PixelMask,
    pub orb: PixelMask,
    pub rotating_orb: PixelMask,
}

impl SpawnMasks {
    /// Full-rectangle masks at the standard sprite sizes, for headless use
    pub fn solid() -> Self {
        Self {
            player: PixelMask::filled(PLAYER_SIZE as u32, PLAYER_SIZE as u32),
            roaming: PixelMask::filled(ENEMY_SIZE as u32, ENEMY_SIZE as u32),
            platform: PixelMask::filled(ENEMY_SIZE as u32, ENEMY_SIZE as u32),
            orb: PixelMask::filled(ORB_SIZE as u32, ORB_SIZE as u32),
            rotating_orb: PixelMask::filled(ORB_SIZE as u32, ORB_SIZE as u32),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every spawn decision draws from it in a fixed order
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Remaining life; the session ends when it reaches zero
    pub life: f32,
    /// Orbs banked toward the next shield
    pub collected_orbs: u32,
    pub shield_on: bool,
    /// Simulation frame counter
    pub time_ticks: u64,
    pub player: Player,
    /// Fixed roster, stored order is iteration order
    pub enemies: Vec<Enemy>,
    /// Active power-ups; insertion and removal only by the tick
    pub orbs: Vec<PowerUp>,
    /// Masks new entities are stamped from
    pub masks: SpawnMasks,
}

impl GameState {
    /// New session: full life, shield off, no power-ups, and a fresh roster of
    /// roaming then platform enemies at seed-determined positions
    pub fn new(seed: u64, masks: SpawnMasks) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut enemies = Vec::with_capacity(ROAMING_ENEMIES + PLATFORM_ENEMIES);
        for _ in 0..ROAMING_ENEMIES {
            enemies.push(Enemy::spawn(
                masks.roaming.clone(),
                EnemyKind::Roaming,
                FIELD_WIDTH,
                FIELD_HEIGHT,
                &mut rng,
            ));
        }
        for _ in 0..PLATFORM_ENEMIES {
            enemies.push(Enemy::spawn(
                masks.platform.clone(),
                EnemyKind::Platform,
                FIELD_WIDTH,
                FIELD_HEIGHT,
                &mut rng,
            ));
        }

        Self {
            seed,
            rng,
            phase: GamePhase::Running,
            life: START_LIFE,
            collected_orbs: 0,
            shield_on: false,
            time_ticks: 0,
            player: Player::new(masks.player.clone()),
            enemies,
            orbs: Vec::new(),
            masks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_three_roaming_then_two_platform() {
        let state = GameState::new(1, SpawnMasks::solid());
        assert_eq!(state.enemies.len(), 5);
        assert!(
            state.enemies[..ROAMING_ENEMIES]
                .iter()
                .all(|e| e.kind == EnemyKind::Roaming)
        );
        assert!(
            state.enemies[ROAMING_ENEMIES..]
                .iter()
                .all(|e| e.kind == EnemyKind::Platform && e.vel.y == 0)
        );
    }

    #[test]
    fn new_session_defaults() {
        let state = GameState::new(1, SpawnMasks::solid());
        assert_eq!(state.seed, 1);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.life, START_LIFE);
        assert_eq!(state.collected_orbs, 0);
        assert!(!state.shield_on);
        assert!(state.orbs.is_empty());
        assert!(state.enemies.iter().all(|e| !e.latched));
    }

    #[test]
    fn same_seed_same_roster() {
        let a = GameState::new(99, SpawnMasks::solid());
        let b = GameState::new(99, SpawnMasks::solid());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.sprite.rect, eb.sprite.rect);
            assert_eq!(ea.vel, eb.vel);
        }
    }
}
