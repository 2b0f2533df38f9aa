//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed per-frame steps only
//! - Seeded RNG only
//! - Stable entity iteration order (roster order, never reordered)
//! - No rendering or platform dependencies

pub mod entity;
pub mod mask;
pub mod rect;
pub mod state;
pub mod tick;

pub use entity::{ENEMY_SPEEDS, Enemy, EnemyKind, OrbKind, Player, PowerUp, Sprite};
pub use mask::{PixelMask, pixel_collision};
pub use rect::Rect;
pub use state::{GamePhase, GameState, SpawnMasks};
pub use tick::{GameEvent, TickInput, tick};
