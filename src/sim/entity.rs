//! Game entities: the player avatar, bouncing enemies, and power-ups
//!
//! Behavior variants are explicit tags (`EnemyKind`, `OrbKind`) rather than a
//! type hierarchy; every entity is a `Sprite` plus whatever state its tag
//! needs. Constructors take the session RNG so spawns stay deterministic.

use glam::IVec2;
use rand::Rng;

use super::mask::{PixelMask, pixel_collision};
use super::rect::Rect;
use crate::consts::ROTATION_STEP_DEG;

/// Velocity components an enemy may spawn with, pixels per frame
pub const ENEMY_SPEEDS: [i32; 6] = [-3, -2, -1, 1, 2, 3];

/// A positioned bitmap with pixel-accurate collision geometry
#[derive(Debug, Clone)]
pub struct Sprite {
    pub rect: Rect,
    pub mask: PixelMask,
}

impl Sprite {
    /// Sprite at the origin; the rect adopts the mask's dimensions
    pub fn new(mask: PixelMask) -> Self {
        let rect = Rect::new(0, 0, mask.width() as i32, mask.height() as i32);
        Self { rect, mask }
    }

    pub fn at_center(mask: PixelMask, center: IVec2) -> Self {
        let rect = Rect::from_center(center, mask.width() as i32, mask.height() as i32);
        Self { rect, mask }
    }

    pub fn collides(&self, other: &Sprite) -> bool {
        pixel_collision(&self.mask, self.rect, &other.mask, other.rect)
    }
}

/// The mouse-controlled avatar; exactly one per session
#[derive(Debug, Clone)]
pub struct Player {
    pub sprite: Sprite,
}

impl Player {
    pub fn new(mask: PixelMask) -> Self {
        Self {
            sprite: Sprite::new(mask),
        }
    }

    /// Center the avatar on the pointer
    pub fn set_position(&mut self, pos: IVec2) {
        self.sprite.rect.set_center(pos);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Bounces off all four field edges
    Roaming,
    /// Horizontal motion only; vertical velocity is zero from creation
    Platform,
}

/// A bouncing hazard. Enemies live for the whole session.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub sprite: Sprite,
    pub kind: EnemyKind,
    /// Pixels per frame, each component fixed at spawn
    pub vel: IVec2,
    /// Damage already counted for the current continuous contact
    pub latched: bool,
}

impl Enemy {
    /// Spawn at a uniform random center within the field. Both velocity
    /// components are drawn even for platform enemies (which then zero the
    /// vertical one) so the RNG stream does not depend on kind.
    pub fn spawn(
        mask: PixelMask,
        kind: EnemyKind,
        field_w: i32,
        field_h: i32,
        rng: &mut impl Rng,
    ) -> Self {
        let center = IVec2::new(rng.random_range(0..=field_w), rng.random_range(0..=field_h));
        let mut vel = IVec2::new(random_speed(rng), random_speed(rng));
        if kind == EnemyKind::Platform {
            vel.y = 0;
        }
        Self {
            sprite: Sprite::at_center(mask, center),
            kind,
            vel,
            latched: false,
        }
    }

    /// Translate by the stored velocity, unconditionally, once per frame
    pub fn step(&mut self) {
        self.sprite.rect.translate(self.vel);
    }

    /// Turn back inward at any crossed field edge and clamp 1 px inside it.
    /// Horizontal and vertical checks are independent, so a corner resolves
    /// both axes in one call.
    pub fn bounce(&mut self, field_w: i32, field_h: i32) {
        let rect = &mut self.sprite.rect;
        if rect.left() <= 0 {
            self.vel.x = self.vel.x.abs();
            rect.set_left(1);
        } else if rect.right() >= field_w {
            self.vel.x = -self.vel.x.abs();
            rect.set_right(field_w - 1);
        }
        if rect.top() <= 0 {
            self.vel.y = self.vel.y.abs();
            rect.set_top(1);
        } else if rect.bottom() >= field_h {
            self.vel.y = -self.vel.y.abs();
            rect.set_bottom(field_h - 1);
        }
    }
}

fn random_speed(rng: &mut impl Rng) -> i32 {
    ENEMY_SPEEDS[rng.random_range(0..ENEMY_SPEEDS.len())]
}

#[derive(Debug, Clone)]
pub enum OrbKind {
    /// Sits still until collected
    Static,
    /// Spins in place; mask and rect are regenerated every frame from the
    /// unrotated source so collision geometry tracks the visual
    Rotating { angle_deg: f32, source: PixelMask },
}

/// A collectible. Removed from the session on contact with the player.
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub sprite: Sprite,
    pub kind: OrbKind,
}

impl PowerUp {
    pub fn spawn_static(mask: PixelMask, field_w: i32, field_h: i32, rng: &mut impl Rng) -> Self {
        Self {
            sprite: Sprite::at_center(mask, random_center(field_w, field_h, rng)),
            kind: OrbKind::Static,
        }
    }

    pub fn spawn_rotating(mask: PixelMask, field_w: i32, field_h: i32, rng: &mut impl Rng) -> Self {
        let source = mask.clone();
        Self {
            sprite: Sprite::at_center(mask, random_center(field_w, field_h, rng)),
            kind: OrbKind::Rotating {
                angle_deg: 0.0,
                source,
            },
        }
    }

    /// Advance a rotating orb by one frame: bump the angle, rebuild the mask
    /// from the source, and recenter the grown bounding box on the old center.
    /// No-op for static orbs.
    pub fn advance_rotation(&mut self) {
        if let OrbKind::Rotating { angle_deg, source } = &mut self.kind {
            *angle_deg = (*angle_deg + ROTATION_STEP_DEG).rem_euclid(360.0);
            let mask = source.rotated(*angle_deg);
            let center = self.sprite.rect.center();
            self.sprite.rect = Rect::from_center(center, mask.width() as i32, mask.height() as i32);
            self.sprite.mask = mask;
        }
    }

    /// Current rotation angle, if this orb spins
    pub fn angle_deg(&self) -> Option<f32> {
        match &self.kind {
            OrbKind::Static => None,
            OrbKind::Rotating { angle_deg, .. } => Some(*angle_deg),
        }
    }
}

fn random_center(field_w: i32, field_h: i32, rng: &mut impl Rng) -> IVec2 {
    IVec2::new(rng.random_range(0..=field_w), rng.random_range(0..=field_h))
}
