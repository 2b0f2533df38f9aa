//! Frame drawing
//!
//! Plain blits over the fixed 600x400 field. The sim owns all geometry; this
//! module only reads it.

use macroquad::color::{Color, WHITE};
use macroquad::text::draw_text;
use macroquad::texture::{DrawTextureParams, draw_texture, draw_texture_ex};

use crate::assets::Assets;
use crate::consts::{FIELD_WIDTH, ORB_SIZE, SHIELD_SIZE};
use crate::sim::{EnemyKind, GameState, OrbKind, Rect};

const BANNER_COLOR: Color = Color::new(0.71, 0.55, 1.0, 1.0);
const SHIELD_TINT: Color = Color::new(1.0, 1.0, 1.0, 0.5);

pub fn draw_frame(state: &GameState, assets: &Assets, fps: Option<i32>) {
    draw_texture(&assets.background, 0.0, 0.0, WHITE);

    let player_rect = state.player.sprite.rect;
    draw_at(&assets.player.texture, player_rect);
    if state.shield_on {
        let center = player_rect.center();
        draw_texture(
            &assets.shield,
            (center.x - SHIELD_SIZE / 2) as f32,
            (center.y - SHIELD_SIZE / 2) as f32,
            SHIELD_TINT,
        );
    }

    for enemy in &state.enemies {
        let texture = match enemy.kind {
            EnemyKind::Roaming => &assets.roaming.texture,
            EnemyKind::Platform => &assets.platform.texture,
        };
        draw_at(texture, enemy.sprite.rect);
    }

    for orb in &state.orbs {
        match &orb.kind {
            OrbKind::Static => draw_at(&assets.orb.texture, orb.sprite.rect),
            OrbKind::Rotating { angle_deg, .. } => {
                // Rotate the texture about the same center the sim rotates
                // the mask around; the unrotated dest size keeps the pivot
                // aligned with the grown collision box
                let center = orb.sprite.rect.center();
                draw_texture_ex(
                    &assets.rotating_orb.texture,
                    (center.x - ORB_SIZE / 2) as f32,
                    (center.y - ORB_SIZE / 2) as f32,
                    WHITE,
                    DrawTextureParams {
                        rotation: angle_deg.to_radians(),
                        ..Default::default()
                    },
                );
            }
        }
    }

    draw_text(
        &format!("Spirit Energy: {:.1}", state.life),
        20.0,
        32.0,
        24.0,
        BANNER_COLOR,
    );
    if let Some(fps) = fps {
        draw_text(
            &format!("{fps} fps"),
            FIELD_WIDTH as f32 - 70.0,
            32.0,
            20.0,
            BANNER_COLOR,
        );
    }
}

fn draw_at(texture: &macroquad::texture::Texture2D, rect: Rect) {
    draw_texture(texture, rect.x as f32, rect.y as f32, WHITE);
}
